use holocron_domain::{CliOverrides, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    Ok(config)
}

pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if config.is_production() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    info!(
        level = %config.logging.level,
        environment = %config.server.environment,
        "Logging initialized"
    );
}
