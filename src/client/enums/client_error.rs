use thiserror::Error;
use crate::common::structs::custom_error::CustomError;

/// Every variant is fatal for the current connection and nothing more: the
/// supervisor logs it, waits the reconnect interval and starts over.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Persistence error: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("Master file error: {0}")]
    MasterFile(String),
}

impl From<CustomError> for ClientError {
    fn from(e: CustomError) -> Self {
        ClientError::MasterFile(e.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_file_error_display() {
        let error = ClientError::MasterFile("obsolete data format".to_string());
        assert_eq!(format!("{}", error), "Master file error: obsolete data format");
    }

    #[test]
    fn test_custom_error_conversion() {
        let error: ClientError = CustomError::new("bad file").into();
        assert!(matches!(error, ClientError::MasterFile(_)));
    }

    #[test]
    fn test_persistence_error_from_io() {
        let error: ClientError = std::io::Error::other("disk gone").into();
        assert!(matches!(error, ClientError::Persistence(_)));
    }
}
