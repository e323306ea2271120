use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};

/// Rewrites every 4xx/5xx response to 200 OK, leaving the body untouched.
///
/// Installed when `MOVIE_API_STATUS_CODES=legacy` (the default): clients of
/// this API tell failures apart by body text only. Redirects pass through.
pub async fn uniform_status_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        *response.status_mut() = StatusCode::OK;
    }
    response
}
