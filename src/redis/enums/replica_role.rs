/// Role a replica currently plays, as seen by a probe.
///
/// `Unreachable` covers every way of not getting an answer: connection
/// refused, timeouts, protocol errors. For invalidation decisions it is
/// treated like `NotMaster`: only a replica that positively confirms the
/// master role protects its client from invalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplicaRole {
    Master,
    NotMaster,
    Unreachable,
}
