//! Implementation blocks for protocol types.

pub mod message_name;
pub mod msg_content;
