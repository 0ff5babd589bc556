//! Common data structures.

/// Plain string error used where no richer error type applies.
pub mod custom_error;
