use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepositoryError {
    /// Not-found error for a hero identifier.
    pub fn hero_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Hero",
            id: id.into(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::hero_not_found("abc-123");
        assert_eq!(error.to_string(), "Hero not found: abc-123");
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("dispatch failure".to_string());
        assert_eq!(error.to_string(), "Connection failed: dispatch failure");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("Table not found".to_string());
        assert_eq!(error.to_string(), "Query failed: Table not found");
    }

    #[test]
    fn test_repository_error_serialization_display() {
        let error = RepositoryError::Serialization("missing attribute: name".to_string());
        assert_eq!(
            error.to_string(),
            "Serialization error: missing attribute: name"
        );
    }
}
