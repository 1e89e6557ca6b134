//! Command-line argument parsing for sqlrelay.

use clap::Parser;
use std::path::PathBuf;

/// Applies a SQL migration file to a remote database over its HTTP RPC endpoint.
#[derive(Parser, Debug)]
#[command(name = "sqlrelay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the SQL file to apply
    #[arg(value_name = "SQL_FILE")]
    pub sql_file: PathBuf,

    /// Target base URL (e.g. https://myproject.supabase.co)
    #[arg(long, value_name = "URL", env = "SUPABASE_URL")]
    pub url: Option<String>,

    /// Service role key, sent as bearer token and apikey header
    #[arg(long, value_name = "KEY", env = "SUPABASE_SERVICE_ROLE_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip the per-statement parse check
    #[arg(long)]
    pub no_check: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::Config::default_path)
    }
}
