//! MCP server exposing the Coddie API as lean tool results.
//!
//! Each tool call performs one upstream request. Upstream failures never
//! surface as tool errors: they are logged and the tool answers with an empty
//! list or `null`, so the calling model always gets a well-formed result.

mod types;

pub use types::*;

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};
use serde::Serialize;

use crate::client::{ClientError, CoddieClient};
use crate::config::Config;
use crate::lean::{self, LeanPhase, LeanProject, LeanRule};

#[derive(Clone)]
pub struct McpServer {
    client: CoddieClient,
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    pub fn new(client: CoddieClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(CoddieClient::new(config))
    }

    /// Collapse a failed list fetch into an empty list.
    fn collection<T>(operation: &str, result: Result<Vec<T>, ClientError>) -> Vec<T> {
        result.unwrap_or_else(|e| {
            tracing::warn!("Error in {}: {}", operation, e);
            Vec::new()
        })
    }

    /// Collapse a failed single-entity fetch into `None`.
    fn entity<T>(operation: &str, result: Result<T, ClientError>) -> Option<T> {
        match result {
            Ok(entity) => Some(entity),
            Err(ClientError::NotFound(what)) => {
                tracing::debug!("{}: not found: {}", operation, what);
                None
            }
            Err(e) => {
                tracing::warn!("Error in {}: {}", operation, e);
                None
            }
        }
    }

    /// Text content holds the pretty-printed `data`; structured content holds
    /// the full response object.
    fn respond<D: Serialize, S: Serialize>(
        data: &D,
        response: &S,
    ) -> Result<CallToolResult, McpError> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        let structured = serde_json::to_value(response)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let mut result = CallToolResult::success(vec![Content::text(json)]);
        result.structured_content = Some(structured);
        Ok(result)
    }

    // ============================================================
    // Tool logic, shared by the tool handlers and tests
    // ============================================================

    pub async fn fetch_projects(&self) -> ProjectListResponse {
        let projects = Self::collection("list_projects", self.client.list_projects().await);
        ProjectListResponse {
            projects: lean::project_all(&projects),
        }
    }

    pub async fn fetch_project(&self, project_id: &str) -> ProjectResponse {
        let project = Self::entity("get_project_info", self.client.get_project(project_id).await);
        ProjectResponse {
            project: project.as_ref().map(LeanProject::from),
        }
    }

    pub async fn fetch_context(&self, project_id: &str) -> ContextResponse {
        let project = Self::entity("get_context", self.client.get_project(project_id).await);
        ContextResponse {
            context: project.and_then(|p| p.context_summary),
        }
    }

    pub async fn fetch_features(&self, project_id: &str) -> FeatureListResponse {
        let features = Self::collection(
            "list_features",
            self.client.list_features(project_id).await,
        );
        FeatureListResponse {
            features: lean::project_all(&features),
        }
    }

    pub async fn fetch_phases(&self, project_id: &str) -> PhaseListResponse {
        let phases = Self::collection("list_phases", self.client.list_phases(project_id).await);
        PhaseListResponse {
            phases: lean::project_all(&phases),
        }
    }

    pub async fn fetch_phase(&self, project_id: &str, phase_id: &str) -> PhaseResponse {
        let phase = Self::entity(
            "get_phase",
            self.client.get_phase(project_id, phase_id).await,
        );
        PhaseResponse {
            phase: phase.as_ref().map(LeanPhase::from),
        }
    }

    pub async fn fetch_steps(&self, project_id: &str, phase_id: &str) -> StepListResponse {
        let steps = Self::collection(
            "list_steps",
            self.client.list_steps(project_id, phase_id).await,
        );
        StepListResponse {
            steps: lean::project_all(&steps),
        }
    }

    pub async fn fetch_rules(&self, project_id: &str) -> RuleListResponse {
        let rules = Self::collection("list_rules", self.client.list_rules(project_id).await);
        RuleListResponse {
            rules: lean::project_all(&rules),
        }
    }

    pub async fn fetch_rule(&self, project_id: &str, rule_id: &str) -> RuleResponse {
        let rule = Self::entity("get_rule", self.client.get_rule(project_id, rule_id).await);
        RuleResponse {
            rule: rule.as_ref().map(LeanRule::from),
        }
    }
}

#[tool_router]
impl McpServer {
    // ============================================================
    // Project Tools
    // ============================================================

    #[tool(description = "List all projects for authenticated user")]
    async fn list_projects(&self) -> Result<CallToolResult, McpError> {
        let response = self.fetch_projects().await;
        Self::respond(&response.projects, &response)
    }

    #[tool(description = "Get project details (name, description, status, and progress summary)")]
    async fn get_project_info(
        &self,
        params: Parameters<ProjectRequest>,
    ) -> Result<CallToolResult, McpError> {
        let response = self.fetch_project(&params.0.project_id).await;
        Self::respond(&response.project, &response)
    }

    #[tool(description = "Get development progress status and context summary for a project")]
    async fn get_context(
        &self,
        params: Parameters<ProjectRequest>,
    ) -> Result<CallToolResult, McpError> {
        let response = self.fetch_context(&params.0.project_id).await;
        Self::respond(&response.context, &response)
    }

    // ============================================================
    // Feature Tools
    // ============================================================

    #[tool(description = "List all features for a specific project")]
    async fn list_features(
        &self,
        params: Parameters<ProjectRequest>,
    ) -> Result<CallToolResult, McpError> {
        let response = self.fetch_features(&params.0.project_id).await;
        Self::respond(&response.features, &response)
    }

    // ============================================================
    // Phase Tools
    // ============================================================

    #[tool(description = "List all development phases for a project")]
    async fn list_phases(
        &self,
        params: Parameters<ProjectRequest>,
    ) -> Result<CallToolResult, McpError> {
        let response = self.fetch_phases(&params.0.project_id).await;
        Self::respond(&response.phases, &response)
    }

    #[tool(description = "Get phase details (title, description, status, and progress)")]
    async fn get_phase(
        &self,
        params: Parameters<PhaseRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let response = self.fetch_phase(&req.project_id, &req.phase_id).await;
        Self::respond(&response.phase, &response)
    }

    #[tool(description = "List all implementation steps for a specific phase")]
    async fn list_steps(
        &self,
        params: Parameters<PhaseRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let response = self.fetch_steps(&req.project_id, &req.phase_id).await;
        Self::respond(&response.steps, &response)
    }

    // ============================================================
    // Rule Tools
    // ============================================================

    #[tool(description = "List all rules for a specific project")]
    async fn list_rules(
        &self,
        params: Parameters<ProjectRequest>,
    ) -> Result<CallToolResult, McpError> {
        let response = self.fetch_rules(&params.0.project_id).await;
        Self::respond(&response.rules, &response)
    }

    #[tool(description = "Get rule details (file name, description, content)")]
    async fn get_rule(&self, params: Parameters<RuleRequest>) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let response = self.fetch_rule(&req.project_id, &req.rule_id).await;
        Self::respond(&response.rule, &response)
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: "coddie".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            instructions: Some(
                r#"Coddie plans software projects as phases of implementation steps, alongside a prioritized feature list and generated editor rules.

DISCOVERY:
1. list_projects to find the project you are working on
2. get_context for its current phase and development summary
3. list_phases, then list_steps for the phase you are implementing
4. list_features and list_rules for scope and coding conventions

All tools are read-only. An empty list or null means nothing was found or the Coddie API could not be reached."#
                    .into(),
            ),
            ..Default::default()
        }
    }
}

pub async fn run_stdio_server(config: &Config) -> anyhow::Result<()> {
    use tokio::io::{stdin, stdout};

    tracing::info!("Coddie MCP Server running on stdio");

    let service = McpServer::from_config(config);
    let server = service.serve((stdin(), stdout())).await?;

    let quit_reason = server.waiting().await?;
    tracing::info!("MCP server stopped: {:?}", quit_reason);

    Ok(())
}
