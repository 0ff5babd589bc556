use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use tokio::time::timeout;
use crate::redis::enums::replica_role::ReplicaRole;
use crate::redis::structs::redis_shim::RedisShim;
use crate::redis::traits::replica_probe::ReplicaProbe;

/// Upper bound for one probe round trip. A replica that cannot answer in
/// time counts as unreachable.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

impl RedisShim {
    /// Extracts the replication role from an `INFO replication` payload.
    pub fn role_from_info(info: &str) -> ReplicaRole {
        for line in info.lines() {
            if let Some(role) = line.trim().strip_prefix("role:") {
                return if role.trim() == "master" {
                    ReplicaRole::Master
                } else {
                    ReplicaRole::NotMaster
                };
            }
        }
        ReplicaRole::Unreachable
    }
}

#[async_trait]
impl ReplicaProbe for RedisShim {
    fn new(address: &str) -> Self {
        RedisShim { server: address.to_string() }
    }

    fn address(&self) -> &str {
        &self.server
    }

    async fn role(&self) -> ReplicaRole {
        let url = format!("redis://{}/", self.server);
        let client = match redis::Client::open(url.as_str()) {
            Ok(client) => client,
            Err(e) => {
                debug!("[REDIS] invalid replica address '{}': {}", self.server, e);
                return ReplicaRole::Unreachable;
            }
        };
        let mut connection = match timeout(PROBE_TIMEOUT, client.get_multiplexed_async_connection()).await {
            Ok(Ok(connection)) => connection,
            Ok(Err(e)) => {
                debug!("[REDIS] could not connect to replica '{}': {}", self.server, e);
                return ReplicaRole::Unreachable;
            }
            Err(_) => {
                debug!("[REDIS] connecting to replica '{}' timed out", self.server);
                return ReplicaRole::Unreachable;
            }
        };
        let info = match timeout(PROBE_TIMEOUT, redis::cmd("INFO").arg("replication").query_async::<String>(&mut connection)).await {
            Ok(Ok(info)) => info,
            Ok(Err(e)) => {
                debug!("[REDIS] INFO replication failed on '{}': {}", self.server, e);
                return ReplicaRole::Unreachable;
            }
            Err(_) => {
                debug!("[REDIS] INFO replication timed out on '{}'", self.server);
                return ReplicaRole::Unreachable;
            }
        };
        RedisShim::role_from_info(&info)
    }
}
