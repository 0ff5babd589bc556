use serde::{Deserialize, Serialize};
use crate::config::structs::client_config::ClientConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub client: ClientConfig
}
