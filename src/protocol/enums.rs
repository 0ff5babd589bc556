//! Protocol enumerations.

/// The fixed message vocabulary.
pub mod message_name;
