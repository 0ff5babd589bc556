/// The client's belief about the current master replica.
///
/// An explicit two-state variant instead of an optional address, so the
/// guard conditions of the invalidation path are exhaustive matches rather
/// than nil checks.
#[derive(Debug)]
pub enum MasterReference<P> {
    /// No master is known.
    Absent,
    /// A master address was learned; its live role is probed on demand.
    Present(P),
}
