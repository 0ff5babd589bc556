//! Wire protocol module.
//!
//! The client and the configuration server exchange a fixed vocabulary of
//! JSON text messages over one WebSocket connection.
//!
//! # Message Vocabulary
//!
//! | name               | direction | fields            |
//! |--------------------|-----------|-------------------|
//! | heartbeat          | outbound  | id                |
//! | ping               | inbound   | token             |
//! | pong               | outbound  | id, token         |
//! | reconfigure        | inbound   | token, server     |
//! | invalidate         | inbound   | token             |
//! | client_started     | outbound  | id                |
//! | client_invalidated | outbound  | id, token         |
//!
//! Fields that are not meaningful for a message kind are left off the wire.
//! Message names outside the vocabulary decode to [`enums::message_name::MessageName::unknown`]
//! and are dropped by the dispatcher without ending the connection.

/// Message name enumeration.
pub mod enums;

/// Message structures.
pub mod structs;

/// Implementation blocks for protocol types.
pub mod impls;
