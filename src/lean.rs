//! Lean projections of the raw entities.
//!
//! Tool callers get a reduced view of each entity: internal and volatile
//! fields are dropped, counters are grouped into a `progress` object and
//! statuses become open strings. The conversions are pure `From<&Raw>` impls,
//! so projecting the same record twice always gives the same result.
//!
//! Nullable fields keep their `null`; they are never coerced to `""`. Numbers
//! are passed through as the upstream sent them, fractions and negatives
//! included.

use rmcp::schemars::JsonSchema;
use serde::Serialize;
use serde_json::Number;

use crate::models::*;

/// Project the raw records in order. The output has the same length and order
/// as the input.
pub fn project_all<'a, R, L>(raw: &'a [R]) -> Vec<L>
where
    L: From<&'a R>,
{
    raw.iter().map(L::from).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ProjectProgress {
    pub current_phase: Number,
    pub total_phases: Number,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct LeanProject {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub context_summary: Option<String>,
    pub progress: ProjectProgress,
    pub last_updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct LeanFeature {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub priority: Number,
    pub status: String,
    pub is_post_mvp: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct PhaseProgress {
    /// Not carried by the phase record; always `0` in a phase projection.
    pub completed_steps: Number,
    pub total_steps: Number,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct LeanPhase {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub progress: PhaseProgress,
    pub order: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct LeanStep {
    pub id: String,
    pub name: String,
    pub content: String,
    pub status: String,
    pub order: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct LeanRule {
    pub id: String,
    pub file_name: String,
    pub description: Option<String>,
    pub content: Option<String>,
}

impl From<&Project> for ProjectProgress {
    fn from(project: &Project) -> Self {
        Self {
            current_phase: project.current_phase_index.clone(),
            total_phases: project.number_of_phases.clone(),
        }
    }
}

impl From<&Project> for LeanProject {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            description: project.description.clone(),
            status: project.status.as_str().to_string(),
            context_summary: project.context_summary.clone(),
            progress: ProjectProgress::from(project),
            last_updated_at: project.updated_at.clone(),
        }
    }
}

impl From<&Feature> for LeanFeature {
    fn from(feature: &Feature) -> Self {
        Self {
            id: feature.id.clone(),
            name: feature.name.clone(),
            description: feature.description.clone(),
            priority: feature.priority.clone(),
            status: feature.status.as_str().to_string(),
            is_post_mvp: feature.is_post_mvp,
        }
    }
}

impl From<&Phase> for LeanPhase {
    fn from(phase: &Phase) -> Self {
        Self {
            id: phase.id.clone(),
            title: phase.title.clone(),
            description: phase.description.clone(),
            status: phase.status.as_str().to_string(),
            progress: PhaseProgress {
                completed_steps: Number::from(0),
                total_steps: phase.total_steps.clone(),
            },
            order: phase.phase_order.clone(),
        }
    }
}

impl From<&Step> for LeanStep {
    fn from(step: &Step) -> Self {
        Self {
            id: step.id.clone(),
            name: step.name.clone(),
            content: step.content.clone(),
            status: step.status.as_str().to_string(),
            order: step.step_order.clone(),
        }
    }
}

impl From<&Rule> for LeanRule {
    fn from(rule: &Rule) -> Self {
        Self {
            id: rule.id.clone(),
            file_name: rule.file_name.clone(),
            description: rule.description.clone(),
            content: rule.content.clone(),
        }
    }
}
