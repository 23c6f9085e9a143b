use cnamescan_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logs the effective settings. Call once the subscriber is installed.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        concurrency = config.scan.concurrency,
        timeout_ms = config.scan.timeout_ms,
        retries = config.scan.retries,
        resolvers = config.scan.resolvers.len(),
        extra_signatures = config.scan.extra_signatures.len(),
        "Configuration loaded"
    );
}
