use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{info, warn};
use tokio::runtime::Builder;
use tokio::time::timeout;
use redis_failover_client::client::client::run_failover_client;
use redis_failover_client::common::common::setup_logging;
use redis_failover_client::config::structs::configuration::Configuration;
use redis_failover_client::redis::structs::redis_shim::RedisShim;
use redis_failover_client::structs::Cli;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config, args.config.as_str()) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    let config = config.merge_cli(&args);
    Configuration::validate(config.clone());
    let config = Arc::new(config);

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let (stop_tx, stop_rx) = tokio::sync::watch::channel(false);
            let client = tokio::spawn(run_failover_client::<RedisShim>(config.clone(), stop_rx));

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");

                    let _ = stop_tx.send(true);
                    match timeout(Duration::from_secs(5), client).await {
                        Ok(_) => info!("Client shutting down completed"),
                        Err(_) => warn!("Client did not stop in time, aborting")
                    }

                    Ok(())
                }
            }
        })
}
