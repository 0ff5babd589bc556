//! # Redis Failover Client
//!
//! A resilient client for Redis master fail-over coordination, built with Rust
//! and Tokio.
//!
//! ## Overview
//!
//! A fleet of Redis-consuming processes must agree at all times on which
//! replica is the writable master. This crate implements the client half of
//! the coordination protocol: each client keeps one WebSocket connection to a
//! configuration server, answers liveness probes, and applies master switches
//! pushed by the server. Directives are fenced with a monotonically advancing
//! token so that stale or superseded coordinators can never roll a client
//! back to an old master.
//!
//! ## Features
//!
//! - **Fencing Tokens**: Lexicographically ordered tokens reject out-of-order
//!   and stale directives
//! - **Single-Writer State**: All protocol state is mutated by exactly one
//!   task per connection
//! - **Automatic Reconnection**: Unbounded retry loop with fixed backoff
//! - **Write-Through Persistence**: The last known master is mirrored to a
//!   local master file
//! - **Master Self-Protection**: A client whose Redis currently acts as
//!   master refuses invalidation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use redis_failover_client::client::client::run_failover_client;
//! use redis_failover_client::config::structs::configuration::Configuration;
//! use redis_failover_client::redis::structs::redis_shim::RedisShim;
//!
//! let config = Configuration::load_from_file(false, "config.toml")?;
//! let (stop_tx, stop_rx) = tokio::sync::watch::channel(false);
//! run_failover_client::<RedisShim>(Arc::new(config), stop_rx).await;
//! ```
//!
//! ## Modules
//!
//! - [`client`] - Connection supervisor, dispatcher and reader/writer tasks
//! - [`common`] - Shared utilities, error handling, and logging setup
//! - [`config`] - Configuration management and TOML parsing
//! - [`masterfile`] - Persisted master state (the master file)
//! - [`protocol`] - Wire message vocabulary and JSON codec
//! - [`redis`] - Redis replica role probing
//! - [`structs`] - CLI argument parsing

/// Connection supervisor, protocol dispatcher and reader/writer tasks.
///
/// Contains the fencing-token guard, the message dispatch state machine and
/// the per-connection task pair that keeps protocol state single-threaded.
pub mod client;

/// Common utilities and shared functionality.
///
/// Contains logging setup, client identity defaulting and the shared
/// error type used across modules.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// Persisted master state module.
///
/// Reads, writes, clears and validates the local master file that records
/// the last adopted master address between restarts.
pub mod masterfile;

/// Wire protocol module.
///
/// Defines the fixed message vocabulary exchanged with the configuration
/// server and its JSON text encoding.
pub mod protocol;

/// Redis replica probing module.
///
/// Provides the probe used to ask a replica whether it currently acts as
/// the writable master.
pub mod redis;

/// CLI argument parsing and common data structures.
pub mod structs;
