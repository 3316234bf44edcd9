use serde::{Deserialize, Serialize};

/// An editor rule file generated for a project.
///
/// `globs` selects the files the rule applies to unless `always_apply` is set.
/// `content` stays `None` while generation is pending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    pub project_id: String,
    pub file_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub globs: String,
    pub always_apply: bool,
    #[serde(default)]
    pub content: Option<String>,
    pub is_generated: bool,
    #[serde(default)]
    pub generation_status: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
