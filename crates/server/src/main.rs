use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use runtime::{McpToolHost, Orchestrator};
use server::{Config, Result, router, serve};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

const CONFIG_FILE: &str = "herald.toml";

#[derive(Parser)]
#[command(name = "herald")]
#[command(about = "Voice-assistant backend with MCP tool calls", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (defaults apply when it does not exist)
    #[arg(short, long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Bind address (overrides the config file)
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(&cli.config)?;
    if let Ok(model) = std::env::var("HERALD_MODEL") {
        config.model.model = model;
    }
    let addr = cli.bind.unwrap_or(config.server.bind);

    let backend = config.backend()?;
    let tools = McpToolHost::new(config.tool_server());
    info!(%backend, tools = %config.tools.url, "Backends configured");

    let mut orchestrator = Orchestrator::new(backend, tools);
    if let Some(prompt) = config.system_prompt.take() {
        debug!("Using system prompt from config");
        orchestrator = orchestrator.with_system(prompt);
    }

    serve(router(Arc::new(orchestrator)), addr).await
}

fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        info!(path = %path.display(), "Loading config");
        Ok(Config::load(path)?)
    } else {
        info!(path = %path.display(), "Config file not found, using defaults");
        Ok(Config::default_config())
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .init();
}
