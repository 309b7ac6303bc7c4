use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shipboard_core::events::EventError;
use shipboard_core::storage::{
    event_error_to_status_code, repository_error_to_status_code, RepositoryError,
};

/// Application error type that wraps `anyhow::Error`.
///
/// Known core errors pick their own status code; anything else is a 500.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(repo_error)
        } else if let Some(event_error) = self.0.downcast_ref::<EventError>() {
            event_error_to_status_code(event_error)
        } else {
            return StatusCode::INTERNAL_SERVER_ERROR;
        };

        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(error = %self.0, "Application error");
        } else {
            tracing::warn!(status = %status_code, error = %self.0, "Request rejected");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_status() {
        let error = AppError::from(RepositoryError::event_not_found("missing"));
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_event_error_status() {
        let error = AppError::from(EventError::EmptyTitle);
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unknown_error_status() {
        let error = AppError(anyhow::anyhow!("boom"));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
