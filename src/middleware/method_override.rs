use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};

use crate::api::form;
use crate::api::schema::METHOD_OVERRIDE_KEY;
use crate::error::ApiError;
use crate::state::AppState;

/// Middleware that lets form clients send PUT/DELETE through POST.
///
/// A POST carrying `_method=<VERB>` in the query string, or in a form-encoded
/// body when the query has none, is re-dispatched as that verb. Must run
/// before routing.
pub async fn method_override_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if request.method() != Method::POST {
        return Ok(next.run(request).await);
    }

    let from_query = request
        .uri()
        .query()
        .and_then(|q| form::find_field(q.as_bytes(), METHOD_OVERRIDE_KEY));

    let (mut request, requested) = match from_query {
        Some(value) => (request, Some(value)),
        None if form::is_form_encoded(request.headers()) => {
            // Buffer the body to look inside it, then hand it on unchanged
            let (parts, body) = request.into_parts();
            let bytes = to_bytes(body, state.config.api.max_request_size_bytes)
                .await
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            let found = form::find_field(&bytes, METHOD_OVERRIDE_KEY);
            (Request::from_parts(parts, Body::from(bytes)), found)
        }
        None => (request, None),
    };

    if let Some(method) = requested.as_deref().and_then(parse_override) {
        tracing::debug!("Method override: POST {} -> {}", request.uri().path(), method);
        *request.method_mut() = method;
    }

    Ok(next.run(request).await)
}

fn parse_override(value: &str) -> Option<Method> {
    match value.trim().to_ascii_uppercase().as_str() {
        "GET" => Some(Method::GET),
        "POST" => Some(Method::POST),
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        "HEAD" => Some(Method::HEAD),
        "OPTIONS" => Some(Method::OPTIONS),
        _ => None,
    }
}
