//! Implementation blocks for the master file.

pub mod master_file;
