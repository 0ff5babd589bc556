//! Persisted master state module.
//!
//! The client durably records the last adopted master address in a small
//! local file, so that a restarted process can resume with its previous
//! belief instead of an empty one. The dispatcher keeps this file
//! write-through consistent with the in-memory master reference: it is
//! written when a new master is adopted and cleared when the reference is
//! invalidated or cannot be confirmed at startup.

/// Master file data structure.
pub mod structs;

/// Implementation blocks for the master file.
pub mod impls;
