use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create config.toml file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Hostname or IP of the configuration server.
    #[arg(long)]
    pub server: Option<String>,
    /// Port of the configuration server.
    #[arg(long)]
    pub port: Option<u16>,
    /// Identity this client announces itself with.
    #[arg(long)]
    pub id: Option<String>,
    /// Path of the file the last known Redis master is persisted to.
    #[arg(long)]
    pub redis_master_file: Option<String>,
    /// Number of seconds between two heartbeats.
    #[arg(long)]
    pub heartbeat_interval: Option<u64>
}
