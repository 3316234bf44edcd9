use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coddie_mcp::config::{ApiKey, Config, DEFAULT_BASE_URL};
use coddie_mcp::mcp;

#[derive(Parser)]
#[command(name = "coddie-mcp", version)]
#[command(about = "MCP server for Coddie projects, phases, steps and rules")]
struct Cli {
    /// Coddie API key, sent as a bearer token on every request
    #[arg(long, env = "CODDIE_API_KEY", hide_env_values = true, allow_hyphen_values = true)]
    api_key: ApiKey,

    /// Base URL of the Coddie MCP API
    #[arg(long, env = "CODDIE_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

/// Initialize tracing on stderr; stdout is the MCP protocol channel.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "coddie_mcp=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::new(cli.api_key, &cli.base_url)?;
    tracing::info!("API key parsed successfully at startup");

    mcp::run_stdio_server(&config).await
}
