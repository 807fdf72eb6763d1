//! Marketplace Payments Engine - Main Entry Point

mod config;

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Import workspace crates
use config::{Config, LogFormat};
use marketplace_api_rpc::{server::RpcServerConfig, RpcHandler, RpcServer};
use marketplace_core::application::{
    ContractQueries, DepositPolicy, DepositPolicyEnforcer, PaymentTransactionCoordinator,
    RepositoryProfileDirectory, UnpaidJobAggregator,
};
use marketplace_core::port::time_provider::SystemTimeProvider;
use marketplace_infra_sqlite::{create_pool, run_migrations, SqliteMarketplaceRepository};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("marketplace=info"))
        .context("Failed to create env filter")?;

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json())
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty())
            .try_init(),
    }
    .context("Failed to install tracing subscriber")
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration and initialize logging
    let config = Config::from_env().context("Invalid configuration")?;
    init_logging(config.log_format)?;

    info!("Marketplace Payments Engine v{} starting...", VERSION);

    // 2. Open database (explicit lifecycle: closed on shutdown)
    if !config.is_in_memory() {
        if let Some(dir) = Path::new(&config.db_path).parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create database directory {}", dir.display()))?;
        }
    }

    info!(db_path = %config.db_path, "Initializing database...");

    let pool = create_pool(&config.db_path)
        .await
        .context("DB pool creation failed")?;
    run_migrations(&pool).await.context("Migration failed")?;

    // 3. Setup dependencies (DI wiring)
    let time_provider = Arc::new(SystemTimeProvider);
    let repo = Arc::new(SqliteMarketplaceRepository::new(pool.clone()));

    let handler = RpcHandler::new(
        Arc::new(RepositoryProfileDirectory::new(repo.clone())),
        ContractQueries::new(repo.clone()),
        UnpaidJobAggregator::new(repo.clone()),
        DepositPolicyEnforcer::new(repo.clone(), DepositPolicy::default()),
        PaymentTransactionCoordinator::new(repo.clone(), time_provider, DepositPolicy::default()),
    );

    // 4. Start JSON-RPC server
    let rpc_config = RpcServerConfig {
        host: config.rpc_host.clone(),
        port: config.rpc_port,
    };
    let (rpc_handle, addr) = RpcServer::new(rpc_config, handler)
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("RPC server start failed: {}", e))?;

    info!(addr = %addr, "System ready. Press Ctrl+C to shutdown");

    // 5. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 6. Graceful shutdown
    rpc_handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;
    rpc_handle.stopped().await;
    pool.close().await;

    info!("Shutdown complete.");

    Ok(())
}
