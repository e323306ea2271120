use crate::error::ApiError;

/// Catch-all for any path or method not routed elsewhere
pub async fn invalid_route() -> ApiError {
    ApiError::InvalidRoute
}
