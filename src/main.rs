//! sqlrelay - applies a SQL migration file to a remote database over its HTTP RPC endpoint.

use sqlrelay::cli::Cli;
use sqlrelay::config::{Config, Target};
use sqlrelay::error::Result;
use sqlrelay::exec::{HttpExecutor, HttpExecutorConfig};
use sqlrelay::runner::Runner;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env before clap reads the environment-backed arguments
    let _ = dotenvy::dotenv();

    // Logs go to stderr; the migration report owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    let target = Target::resolve(cli.url.clone(), cli.key.clone(), cli.timeout, &config)?;
    info!("Target: {}", target.display_string());

    let executor = HttpExecutor::new(
        HttpExecutorConfig::new(&target.base_url, &target.service_key)
            .with_timeout(target.timeout_secs),
    )?;

    let runner = if cli.no_check {
        Runner::new(executor)
    } else {
        Runner::new(executor).with_fragment_check()
    };

    // Per-statement failures are counted in the summary, not surfaced as
    // errors: the exit code stays 0 unless the file itself cannot be read.
    runner.run_file(&cli.sql_file).await?;

    Ok(())
}
