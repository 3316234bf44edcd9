use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::FeatureStatus;

/// A product capability planned for a project.
///
/// Lower `priority` values are built first. Features flagged `is_post_mvp`
/// are deferred until after the first release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: Number,
    pub is_post_mvp: bool,
    pub status: FeatureStatus,
    pub created_at: String,
    pub updated_at: String,
}
