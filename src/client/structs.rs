//! Client data structures.

/// Protocol state owned by the writer task.
pub mod client_state;
