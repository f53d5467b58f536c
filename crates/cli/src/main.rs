use clap::Parser;
use holocron_domain::CliOverrides;
use holocron_jobs::{CacheSweepJob, JobRunner, StatisticsRecomputeJob};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "holocron")]
#[command(version)]
#[command(about = "Holocron - caching proxy for the swapi.tech Star Wars API")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Upstream API base URL
    #[arg(long)]
    upstream_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        upstream_url: cli.upstream_url.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Holocron v{}", env!("CARGO_PKG_VERSION"));

    // Dependency injection - cache, upstream client, use cases
    let services = di::Services::new(&config)?;

    let shutdown = CancellationToken::new();

    info!("Starting background jobs");
    JobRunner::new()
        .with_cache_sweep(
            CacheSweepJob::new(services.cache.clone())
                .with_interval(config.cache.sweep_interval_secs),
        )
        .with_statistics_recompute(
            StatisticsRecomputeJob::new(services.statistics.clone())
                .with_interval(config.statistics.recompute_interval_secs),
        )
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    let addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid bind address: {e}"))?;

    server::start_web_server(addr, services.state, &config, shutdown.clone()).await?;

    shutdown.cancel();
    info!("Server shutdown complete");
    Ok(())
}
