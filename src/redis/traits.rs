//! Probe trait definitions.

/// Trait implemented by anything that can report a replica's role.
pub mod replica_probe;
