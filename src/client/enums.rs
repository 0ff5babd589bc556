//! Client enumerations.

/// Errors that end a connection and send the supervisor into retry.
pub mod client_error;

/// The client's belief about the current master.
pub mod master_reference;
