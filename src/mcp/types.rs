//! Request and response types for MCP tools.

use rmcp::schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lean::*;

// ============================================================
// Request Types
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    #[schemars(description = "The ID of the project")]
    pub project_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhaseRequest {
    #[schemars(description = "The ID of the project the phase belongs to")]
    pub project_id: String,
    #[schemars(description = "The ID of the phase")]
    pub phase_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleRequest {
    #[schemars(description = "The ID of the project the rule belongs to")]
    pub project_id: String,
    #[schemars(description = "The ID of the rule")]
    pub rule_id: String,
}

// ============================================================
// Response Types
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
pub struct ProjectListResponse {
    pub projects: Vec<LeanProject>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ProjectResponse {
    /// `null` when the project does not exist or could not be fetched
    pub project: Option<LeanProject>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ContextResponse {
    /// The project's context summary; `null` when the project has none or
    /// could not be fetched
    pub context: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct FeatureListResponse {
    pub features: Vec<LeanFeature>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct PhaseListResponse {
    pub phases: Vec<LeanPhase>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct PhaseResponse {
    pub phase: Option<LeanPhase>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct StepListResponse {
    pub steps: Vec<LeanStep>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct RuleListResponse {
    pub rules: Vec<LeanRule>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct RuleResponse {
    pub rule: Option<LeanRule>,
}
