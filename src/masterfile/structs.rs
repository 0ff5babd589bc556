//! Master file data structures.

/// Handle to the on-disk master file.
pub mod master_file;
