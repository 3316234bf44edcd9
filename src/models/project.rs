use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::ProjectStatus;

/// A project owned by the authenticated user.
///
/// Projects move through a generation pipeline (docs, then phases) before
/// development starts. `current_phase_index` and `number_of_phases` track how
/// far development has progressed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub project_summary: Option<String>,
    #[serde(default)]
    pub full_description: Option<String>,
    pub status: ProjectStatus,
    /// Free-form generation progress reported by the backend.
    #[serde(default)]
    pub detailed_generation_status: Option<Value>,
    #[serde(default)]
    pub error_message: Option<String>,
    pub current_phase_index: Number,
    pub last_generated_phase_index: Number,
    pub number_of_phases: Number,
    #[serde(default)]
    pub current_phase_id: Option<String>,
    /// Running summary of development progress, written by the backend.
    #[serde(default)]
    pub context_summary: Option<String>,
    #[serde(default)]
    pub planning_context: Option<Value>,
    pub last_accessed_at: String,
    pub created_at: String,
    pub updated_at: String,
}
