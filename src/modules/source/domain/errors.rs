use crate::shared::errors::AppError;
use thiserror::Error;

/// Why a single retrieval strategy gave up
///
/// These never escape the chain: the driver logs them and moves on to the
/// next strategy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RetrievalError {
    /// Request failed or answered with a non-success status
    #[error("Network error: {message}")]
    Network { message: String },

    /// Payload lacked the expected envelope or had malformed rows
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Payload parsed but produced no usable rows
    #[error("No usable rows in {source_name}")]
    EmptyResult { source_name: String },

    /// Local store could not be read
    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl RetrievalError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn empty(source_name: impl Into<String>) -> Self {
        Self::EmptyResult {
            source_name: source_name.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for RetrievalError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RetrievalError::parse(err.to_string())
        } else {
            RetrievalError::network(AppError::from(err).to_string())
        }
    }
}

impl From<serde_json::Error> for RetrievalError {
    fn from(err: serde_json::Error) -> Self {
        RetrievalError::parse(err.to_string())
    }
}

impl From<AppError> for RetrievalError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::StorageError(message) => RetrievalError::storage(message),
            AppError::SerializationError(message) => RetrievalError::parse(message),
            other => RetrievalError::network(other.to_string()),
        }
    }
}

pub type RetrievalResult<T> = Result<T, RetrievalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            RetrievalError::network("HTTP error! status: 404").to_string(),
            "Network error: HTTP error! status: 404"
        );
        assert_eq!(
            RetrievalError::empty("REPORTAN").to_string(),
            "No usable rows in REPORTAN"
        );
    }

    #[test]
    fn test_json_error_is_parse_error() {
        let err: RetrievalError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert!(matches!(err, RetrievalError::Parse { .. }));
    }

    #[test]
    fn test_app_storage_error_maps_to_storage() {
        let err: RetrievalError = AppError::StorageError("locked".to_string()).into();
        assert_eq!(err, RetrievalError::storage("locked"));
    }
}
