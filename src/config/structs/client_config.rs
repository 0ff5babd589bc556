use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClientConfig {
    pub server: String,
    pub port: u16,
    pub client_id: String,
    pub redis_master_file: String,
    pub heartbeat_interval: u64,
    pub reconnect_interval: u64,
}
