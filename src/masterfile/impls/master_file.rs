use std::path::Path;
use log::{error, info};
use crate::common::structs::custom_error::CustomError;

use crate::masterfile::structs::master_file::MasterFile;

impl MasterFile {
    pub fn new(path: &str) -> MasterFile {
        MasterFile { path: path.to_string() }
    }

    pub fn exists(&self) -> bool {
        Path::new(&self.path).exists()
    }

    /// Returns the stored master address, or an empty string when the file
    /// is missing, unreadable or holds nothing.
    pub fn read(&self) -> String {
        match std::fs::read_to_string(&self.path) {
            Ok(data) => data.trim().to_string(),
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    error!("[MASTERFILE] could not read master file '{}': {}", self.path, e);
                }
                String::new()
            }
        }
    }

    pub fn write(&self, server: &str) -> Result<(), std::io::Error> {
        std::fs::write(&self.path, server)
    }

    /// Clearing keeps the file in place but empties it, so a later read
    /// yields "no known master" rather than an error.
    pub fn clear(&self) -> Result<(), std::io::Error> {
        info!("[MASTERFILE] clearing master file '{}'", self.path);
        self.write("")
    }

    /// Rejects master files written by the obsolete multi-system format,
    /// which separated system name and address with a slash.
    pub fn verify(&self) -> Result<(), CustomError> {
        let server = self.read();
        if server.contains('/') || server.contains(char::is_whitespace) {
            return Err(CustomError::new(
                format!("master file '{}' contains obsolete data format: '{}'", self.path, server).as_str()
            ));
        }
        Ok(())
    }
}
