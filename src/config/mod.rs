//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the client
//! configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains:
//! - **log_level**: Verbosity of the console log output
//! - **client**: Core client settings (configuration server address, client
//!   identity, master file path, heartbeat and reconnect intervals)
//!
//! # Features
//!
//! - TOML file parsing with detailed error messages
//! - Default value generation via `--create-config`
//! - Command line overrides for every client setting
//!
//! # Example
//!
//! ```rust,ignore
//! use redis_failover_client::config::structs::configuration::Configuration;
//!
//! // Load configuration from file
//! let config = Configuration::load_from_file(false, "config.toml")?;
//! ```

/// Configuration enumerations (error kinds).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
