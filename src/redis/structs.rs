//! Probe data structures.

/// Redis-backed replica probe.
pub mod redis_shim;
