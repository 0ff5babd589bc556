//! Fail-over coordination client module.
//!
//! This module implements the client half of the master fail-over protocol:
//! the connection supervisor, the fencing-token guard, the message dispatch
//! state machine and the per-connection reader/writer task pair.
//!
//! # Architecture
//!
//! ```text
//!   ┌────────────┐   frames    ┌────────┐  bounded   ┌────────────────┐
//!   │ WebSocket  │ ──────────► │ Reader │ ─────────► │ Writer +       │
//!   │ connection │             │ task   │   queue    │ Dispatcher     │
//!   └────────────┘ ◄────────────────────────────────│ (owns state)   │
//!         ▲            replies / heartbeats          └────────────────┘
//!         │
//!   ┌─────┴──────┐
//!   │ Supervisor │  connect, retry with backoff, shutdown
//!   └────────────┘
//! ```
//!
//! One connection runs exactly two concurrent tasks. The reader only decodes
//! frames and forwards them; the writer is the single owner of the fencing
//! token and the master reference, so no protocol state ever needs a lock.
//! Token and master state outlive individual connections: a token accepted
//! on a previous connection remains the floor after a reconnect.

/// Client enumerations (errors, master reference).
pub mod enums;

/// Client data structures.
pub mod structs;

/// Implementation blocks for the client state machine.
pub mod impls;

/// Supervisor loop and reader task.
#[allow(clippy::module_inception)]
pub mod client;

/// WebSocket type aliases.
pub mod types;
