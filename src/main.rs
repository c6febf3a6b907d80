//! Play Tagger Server - Binary Entry Point
//!
//! Serves MCP over stdio by default; set `TAGGER_HTTP_ADDR` to serve the
//! REST API instead. Logs go to stderr since stdout carries JSON-RPC.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use play_tagger::api::{create_router, AppState};
use play_tagger::config::TaggerConfig;
use play_tagger::protocol::ServerInfo;
use play_tagger::server::McpServer;
use play_tagger::session::{SessionRegistry, DEFAULT_SESSION_ID};
use play_tagger::tools::{register_all_tools, ToolContext};
use play_tagger::types::McpResult;
use play_tagger::utils::cleanup_temp_files;

fn main() -> McpResult<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Arc::new(TaggerConfig::from_env());
    if config.export_dir().exists() {
        match cleanup_temp_files(config.export_dir()) {
            Ok(0) => {}
            Ok(n) => info!(removed = n, "cleaned up interrupted exports"),
            Err(e) => warn!(error = %e, "could not scan export directory"),
        }
    }

    let registry = Arc::new(SessionRegistry::new());

    match config.http_addr {
        Some(addr) => serve_http(addr, registry, config),
        None => serve_stdio(registry, config),
    }
}

fn serve_stdio(registry: Arc<SessionRegistry>, config: Arc<TaggerConfig>) -> McpResult<()> {
    registry.get_or_create(DEFAULT_SESSION_ID);

    let mut server = McpServer::with_info(ServerInfo::default());
    register_all_tools(&mut server, ToolContext::new(registry, config));
    info!(tools = server.tool_count(), "serving MCP on stdio");

    server.run()
}

fn serve_http(
    addr: std::net::SocketAddr,
    registry: Arc<SessionRegistry>,
    config: Arc<TaggerConfig>,
) -> McpResult<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let app = create_router(Arc::new(AppState::new(registry, config)));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!(%addr, "serving REST API");
        axum::serve(listener, app).await?;
        Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
    })
}
