use async_trait::async_trait;
use crate::redis::enums::replica_role::ReplicaRole;

/// A live handle to one replica address plus the capability to ask for its
/// current role.
#[async_trait]
pub trait ReplicaProbe: Send + Sync {
    fn new(address: &str) -> Self where Self: Sized;

    fn address(&self) -> &str;

    async fn role(&self) -> ReplicaRole;

    async fn is_master(&self) -> bool {
        self.role().await == ReplicaRole::Master
    }
}
