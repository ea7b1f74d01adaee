//! Profile Card service daemon (profiled)

use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use profilecard_repository::ProfileStore;
use profilecard_service::observability::init_tracing;
use profilecard_service::{AppState, ConfigOverrides, ServiceConfig, build_router};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "profiled")]
#[command(about = "Profile Card REST service - serves and stores a single user profile")]
#[command(version)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, env = "PROFILE_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, env = "PROFILE_BIND_ADDR")]
    bind_addr: Option<IpAddr>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Profile data file
    #[arg(long, env = "PROFILE_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long)]
    log_filter: Option<String>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            bind_addr: self.bind_addr,
            port: self.port,
            data_file: self.data_file.clone(),
            log_filter: self.log_filter.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ServiceConfig::load(cli.config.as_deref())
        .await?
        .with_overrides(cli.overrides());

    init_tracing(&config.log_filter)?;

    info!("Starting Profile Card service v{}", env!("CARGO_PKG_VERSION"));

    let store = ProfileStore::new(config.store_config());
    store
        .initialize()
        .await
        .with_context(|| format!("Failed to initialize profile data file {:?}", store.path()))?;

    let app = build_router(AppState::new(store));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
