//! synthmetrics gateway
//!
//! Serves synthetic metric values behind Prometheus-shaped query endpoints.
//! - Config: YAML list of endpoints, read once from `--config` / `CONFIG_URL`
//!   (local path or http(s) URL)
//! - Listen address: `--listen` / `LISTEN_ADDR`, default `0.0.0.0:8080`

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use synthmetrics_core::error::{Result, SynthError};
use synthmetrics_gateway::config::{self, ConfigSource};
use synthmetrics_gateway::{app_state, router};

#[derive(Debug, Parser)]
#[command(name = "synthmetrics-gateway", version, about = "Configurable mock metrics endpoint")]
struct Args {
    /// Config location: file path or http(s) URL.
    #[arg(long = "config", env = "CONFIG_URL")]
    config: String,

    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        tracing::error!(code = e.code().as_str(), error = %e, "synthmetrics-gateway failed");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let cfg = config::load(&ConfigSource::parse(&args.config)).await?;

    let state = app_state::AppState::new(cfg)?;
    let uris = state.endpoints().uris().join(",");
    let app = router::build_router(state);

    tracing::info!(listen = %args.listen, %uris, "synthmetrics-gateway starting");
    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .map_err(|e| SynthError::Internal(format!("bind {} failed: {e}", args.listen)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| SynthError::Internal(format!("server failed: {e}")))
}
