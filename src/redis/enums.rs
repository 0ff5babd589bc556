//! Redis enumerations.

/// Role a probed replica reports.
pub mod replica_role;
