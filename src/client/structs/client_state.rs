use std::sync::Arc;
use crate::client::enums::master_reference::MasterReference;
use crate::config::structs::configuration::Configuration;
use crate::masterfile::structs::master_file::MasterFile;
use crate::redis::traits::replica_probe::ReplicaProbe;

/// All mutable protocol state of one client process.
///
/// Owned by exactly one task at a time (the writer of the current
/// connection), and handed back to the supervisor between connections, so
/// the fencing token keeps its floor across reconnects.
pub struct ClientState<P: ReplicaProbe> {
    pub config: Arc<Configuration>,
    pub url: String,
    /// Highest fencing token accepted so far; empty until the first one.
    pub current_token: String,
    pub current_master: MasterReference<P>,
    pub master_file: MasterFile,
}
