mod config;

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use axum::Router;
use clap::{Args, Parser, Subcommand};
use erpstore_files::DiskStore;
use erpstore_gateway::AppState;
use erpstore_metadata::MetadataHandle;
use erpstore_upstream::{HttpFileServer, HttpMetadataService};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::config::{FilesSection, GatewaySection, MetadataSection, RuntimeConfig};

#[derive(Debug, Parser)]
#[command(author, version, about = "ERP file storage, metadata and gateway services")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct ConfigArg {
    #[arg(long, default_value = "config/erpstore.toml")]
    config: PathBuf,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Storage service: multipart uploads and static file serving.
    Files(ConfigArg),
    /// Metadata store: file records in SQLite.
    Metadata(ConfigArg),
    /// Client-facing gateway in front of the other two.
    Gateway(ConfigArg),
    /// All three services in one process.
    All(ConfigArg),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let shutdown = shutdown_notifier();
    match cli.command {
        Command::Files(args) => {
            let config = RuntimeConfig::load(&args.config)?;
            serve_files(config.files()?, shutdown).await
        }
        Command::Metadata(args) => {
            let config = RuntimeConfig::load(&args.config)?;
            serve_metadata(config.metadata()?, shutdown).await
        }
        Command::Gateway(args) => {
            let config = RuntimeConfig::load(&args.config)?;
            serve_gateway(config.gateway()?, shutdown).await
        }
        Command::All(args) => {
            let config = RuntimeConfig::load(&args.config)?;
            tokio::try_join!(
                serve_files(config.files()?, shutdown.clone()),
                serve_metadata(config.metadata()?, shutdown.clone()),
                serve_gateway(config.gateway()?, shutdown),
            )?;
            Ok(())
        }
    }
}

async fn serve_files(section: &FilesSection, shutdown: watch::Receiver<bool>) -> Result<()> {
    let store = DiskStore::open(&section.storage_root, section.max_file_bytes)
        .await
        .with_context(|| {
            format!(
                "failed to prepare storage root {}",
                section.storage_root.display()
            )
        })?;
    info!(
        storage_root = %section.storage_root.display(),
        max_file_bytes = section.max_file_bytes,
        "storage root ready"
    );
    let app = erpstore_files::build_router(store, section.max_request_bytes);
    serve("files", &section.bind, app, shutdown).await
}

async fn serve_metadata(section: &MetadataSection, shutdown: watch::Receiver<bool>) -> Result<()> {
    if let Some(dir) = section.database_dir() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create database directory {}", dir.display()))?;
    }

    let handle = MetadataHandle::open(section.to_metadata_config()).await;
    let app = erpstore_metadata::build_router(handle.clone());
    let served = serve("metadata", &section.bind, app, shutdown).await;
    handle.close().await;
    served
}

async fn serve_gateway(section: &GatewaySection, shutdown: watch::Receiver<bool>) -> Result<()> {
    let files = HttpFileServer::new(&section.file_server_url)
        .with_context(|| format!("invalid file_server_url {}", section.file_server_url))?;
    let metadata = HttpMetadataService::new(&section.metadata_url)
        .with_context(|| format!("invalid metadata_url {}", section.metadata_url))?;

    let state = AppState::new(Arc::new(files), Arc::new(metadata));
    let app = erpstore_gateway::build_router(state);
    serve("gateway", &section.bind, app, shutdown).await
}

async fn serve(
    service: &'static str,
    bind: &str,
    app: Router,
    mut shutdown: watch::Receiver<bool>,
) -> Result<()> {
    let socket: SocketAddr = bind
        .parse()
        .with_context(|| format!("invalid socket address {bind}"))?;

    let listener = tokio::net::TcpListener::bind(socket)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;

    info!(service, %bind, "erpstored listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown.wait_for(|stop| *stop).await;
        })
        .await
        .with_context(|| format!("{service} server failed"))?;
    info!(service, "stopped");
    Ok(())
}

/// Flips to `true` once on Ctrl-C or SIGTERM.
fn shutdown_notifier() -> watch::Receiver<bool> {
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        wait_for_signal().await;
        warn!("shutdown requested, draining connections");
        let _ = tx.send(true);
    });
    rx
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
