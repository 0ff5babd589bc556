use crate::client::enums::master_reference::MasterReference;
use crate::redis::enums::replica_role::ReplicaRole;
use crate::redis::traits::replica_probe::ReplicaProbe;

impl<P: ReplicaProbe> MasterReference<P> {
    pub fn is_absent(&self) -> bool {
        matches!(self, MasterReference::Absent)
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            MasterReference::Absent => None,
            MasterReference::Present(probe) => Some(probe.address()),
        }
    }

    /// True only when a present reference positively probes as master.
    /// An unreachable replica does not count: it cannot veto anything.
    pub async fn confirmed_master(&self) -> bool {
        match self {
            MasterReference::Absent => false,
            MasterReference::Present(probe) => match probe.role().await {
                ReplicaRole::Master => true,
                ReplicaRole::NotMaster | ReplicaRole::Unreachable => false,
            },
        }
    }
}
