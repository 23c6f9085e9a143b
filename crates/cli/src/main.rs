//! # cnamescan
//!
//! Reads domains one per line, looks up their CNAME records and reports
//! targets that no longer resolve, flagging those hosted on services known
//! to allow subdomain takeover.

mod bootstrap;
mod di;

use anyhow::Context;
use bootstrap::{init_logging, load_config, log_config};
use clap::Parser;
use cnamescan_domain::CliOverrides;
use di::ScanServices;
use std::path::PathBuf;
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Exit status after an interrupted scan (128 + SIGINT).
const EXIT_INTERRUPTED: i32 = 130;

#[derive(Parser, Debug)]
#[command(name = "cnamescan")]
#[command(version)]
#[command(about = "Finds dangling CNAME records and subdomain takeover candidates")]
struct Cli {
    /// Number of concurrent workers [default: 20]
    #[arg(short = 'c', long)]
    concurrency: Option<usize>,

    /// Timeout per DNS operation, e.g. 500ms, 5s, 1m [default: 5s]
    #[arg(short = 't', long)]
    timeout: Option<String>,

    /// Extra attempts after a failed CNAME query [default: 2]
    #[arg(short = 'r', long)]
    retries: Option<u32>,

    /// Also print resolving CNAMEs and per-domain errors
    #[arg(short = 'v', long)]
    verbose: bool,

    /// TOML configuration file
    #[arg(long)]
    config: Option<String>,

    /// Read domains from this file instead of stdin
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error [default: warn]
    #[arg(long)]
    log_level: Option<String>,

    /// Resolver to query, as IP or IP:port (repeatable, replaces the
    /// built-in pool)
    #[arg(long = "resolver", value_name = "ADDR")]
    resolvers: Vec<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            concurrency: self.concurrency,
            timeout: self.timeout.clone(),
            retries: self.retries,
            verbose: self.verbose,
            resolvers: self.resolvers.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref(), cli.overrides())?;
    init_logging(&config);
    log_config(cli.config.as_deref(), &config);

    let runner = ScanServices::new(&config)?.into_runner();

    let shutdown = CancellationToken::new();
    let interrupt = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, stopping scan");
            interrupt.cancel();
        }
    });

    let runner = runner.with_cancellation(shutdown);
    let output = tokio::io::stdout();

    let summary = match cli.input {
        Some(path) => {
            let file = tokio::fs::File::open(&path)
                .await
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            runner.run(BufReader::new(file), output).await?
        }
        None => runner.run(BufReader::new(tokio::io::stdin()), output).await?,
    };

    info!(
        dispatched = summary.dispatched,
        processed = summary.processed,
        dangling = summary.dangling,
        takeover = summary.takeover,
        ok = summary.ok,
        "Scan complete"
    );

    if summary.cancelled {
        // A pending stdin read would otherwise hold up runtime shutdown
        std::process::exit(EXIT_INTERRUPTED);
    }

    Ok(())
}
