//! Implementation blocks for the Redis probe.

pub mod redis_shim;
