use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "portico",
    version,
    about = "A terminal client for a session-cookie account portal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Account API base URL.
    #[arg(long, value_name = "URL", env = "PORTICO_API_BASE_URL")]
    pub api_base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub request_timeout: Option<u64>,
}
