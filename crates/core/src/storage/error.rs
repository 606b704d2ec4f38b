use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Throttled: {0}")]
    Throttled(String),
    #[error("Service unavailable: {0}")]
    Unavailable(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Returns true when the same request could succeed if issued again.
    ///
    /// Throttling, transport failures and store-side outages are transient;
    /// malformed data and rejected requests are not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RepositoryError::ConnectionFailed(_)
                | RepositoryError::Throttled(_)
                | RepositoryError::Unavailable(_)
        )
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_repository_error_throttled_display() {
        let error = RepositoryError::Throttled("Throughput exceeded".to_string());
        assert_eq!(error.to_string(), "Throttled: Throughput exceeded");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("Table not found".to_string());
        assert_eq!(error.to_string(), "Query failed: Table not found");
    }

    #[test]
    fn test_repository_error_invalid_data_display() {
        let error = RepositoryError::InvalidData("Missing or invalid field: age".to_string());
        assert_eq!(error.to_string(), "Invalid data: Missing or invalid field: age");
    }

    #[test]
    fn test_retryable_classification() {
        assert!(RepositoryError::ConnectionFailed("reset".into()).is_retryable());
        assert!(RepositoryError::Throttled("slow down".into()).is_retryable());
        assert!(RepositoryError::Unavailable("internal error".into()).is_retryable());
        assert!(!RepositoryError::QueryFailed("denied".into()).is_retryable());
        assert!(!RepositoryError::InvalidData("bad age".into()).is_retryable());
    }
}
