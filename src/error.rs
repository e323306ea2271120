// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse};

use crate::database::StoreError;

pub const NOT_FOUND_MESSAGE: &str = "Movie not found";
pub const INVALID_ROUTE_MESSAGE: &str = "INVALID ROUTE TRY AGAIN";

/// Failure outcomes of a request, each with a semantic HTTP status.
///
/// The body is always the plain-text message. Whether the semantic status
/// reaches the client is decided by the status policy layer, see
/// [`crate::middleware::status_policy`].
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    Validation(String),
    BadRequest(String),

    // 404 Not Found
    NotFound,
    InvalidRoute,

    // 500 Internal Server Error
    Store(StoreError),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::InvalidRoute => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-facing message
    pub fn message(&self) -> String {
        match self {
            ApiError::Validation(msg) | ApiError::BadRequest(msg) => msg.clone(),
            ApiError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            ApiError::InvalidRoute => INVALID_ROUTE_MESSAGE.to_string(),
            ApiError::Store(err) => err.to_string(),
        }
    }

    fn log(&self) {
        match self {
            ApiError::Validation(msg) | ApiError::BadRequest(msg) => tracing::info!("{}", msg),
            ApiError::NotFound => tracing::info!("{}", NOT_FOUND_MESSAGE),
            ApiError::InvalidRoute => tracing::debug!("{}", INVALID_ROUTE_MESSAGE),
            ApiError::Store(err) => tracing::error!("{}", err),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        self.log();
        (self.status_code(), self.message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_outcomes_to_semantic_statuses() {
        assert_eq!(ApiError::Validation("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::InvalidRoute.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Store(StoreError::ConfigMissing("DATABASE_URL")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_errors_surface_their_raw_message() {
        let err: ApiError = StoreError::ConfigMissing("DATABASE_URL").into();
        assert_eq!(err.message(), "Missing configuration: DATABASE_URL");
    }

    #[test]
    fn fixed_messages() {
        assert_eq!(ApiError::NotFound.to_string(), "Movie not found");
        assert_eq!(ApiError::InvalidRoute.to_string(), "INVALID ROUTE TRY AGAIN");
    }
}
