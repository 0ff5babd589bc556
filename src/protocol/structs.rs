//! Message structures.

/// The single wire message shape shared by all message kinds.
pub mod msg_content;
