use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
}

impl RepositoryError {
    /// Shorthand for a missing event.
    pub fn event_not_found(uid: impl Into<String>) -> Self {
        RepositoryError::NotFound {
            entity_type: "Event",
            id: uid.into(),
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
        let error = RepositoryError::event_not_found("sail-away@shipboard");
        assert_eq!(error.to_string(), "Event not found: sail-away@shipboard");
    }

    #[test]
    fn test_repository_error_already_exists_display() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "Event",
            id: "bingo".to_string(),
        };
        assert_eq!(error.to_string(), "Event already exists: bingo");
    }
}
