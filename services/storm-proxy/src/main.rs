//! Storm Proxy Server
//!
//! CORS-friendly JSON front for the National Hurricane Center's products.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Extension;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use storm_proxy::config::ProxyConfig;
use storm_proxy::state::AppState;

/// Storm Proxy Server
#[derive(Parser, Debug)]
#[command(name = "storm-proxy")]
#[command(about = "JSON/GeoJSON proxy for NHC hurricane products")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8090", env = "STORM_PROXY_LISTEN_ADDR")]
    listen: String,

    /// Path to the YAML config file
    #[arg(short, long, default_value = "config/storm-proxy.yaml", env = "STORM_PROXY_CONFIG")]
    config: String,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "STORM_PROXY_WORKER_THREADS")]
    worker_threads: Option<usize>,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .context("Failed to create Tokio runtime")?;

    runtime.block_on(run_server(args))
}

async fn run_server(args: Args) -> Result<()> {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    // Initialize Prometheus metrics exporter
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    info!("Starting storm proxy");

    let config = ProxyConfig::load(&args.config)?;
    let state = Arc::new(AppState::from_config(config)?);

    let app = storm_proxy::build_router(state).layer(Extension(prometheus_handle));

    // Parse listen address
    let addr: SocketAddr = args
        .listen
        .parse()
        .with_context(|| format!("Invalid listen address: {}", args.listen))?;

    info!("Storm proxy listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}
