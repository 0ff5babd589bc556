//! Redis replica probing module.
//!
//! The fail-over protocol needs one question answered about a replica: is
//! this address currently acting as the writable master? The probe issues
//! `INFO replication` against the replica and maps the reported role (or the
//! failure to reach the replica at all) onto [`enums::replica_role::ReplicaRole`].
//!
//! The probe sits behind the [`traits::replica_probe::ReplicaProbe`] trait so
//! the protocol state machine can be exercised in tests without a live Redis.

/// Replica role enumeration.
pub mod enums;

/// Probe data structures.
pub mod structs;

/// Probe trait definitions.
pub mod traits;

/// Implementation blocks for the Redis probe.
pub mod impls;
