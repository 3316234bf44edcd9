use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::{PhaseStatus, StepStatus};

/// A development phase of a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phase {
    pub id: String,
    pub project_id: String,
    /// Position within the project. `None` until the phase has been ordered.
    #[serde(default)]
    pub phase_order: Option<Number>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub full_description: Option<String>,
    pub status: PhaseStatus,
    pub total_steps: Number,
    pub created_at: String,
    pub updated_at: String,
}

/// An implementation step inside a phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    pub phase_id: String,
    #[serde(default)]
    pub step_order: Option<Number>,
    pub name: String,
    pub content: String,
    /// Opaque code payload attached by the generator.
    #[serde(default)]
    pub code: Option<Value>,
    pub status: StepStatus,
    pub created_at: String,
    pub updated_at: String,
}
