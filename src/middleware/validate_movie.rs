use axum::{
    async_trait,
    body::to_bytes,
    extract::{FromRequest, Request},
};
use serde_json::Map;

use crate::api::{form, schema};
use crate::database::MovieFields;
use crate::error::ApiError;
use crate::state::AppState;

/// Extractor for create/update bodies: decodes the form and validates it
/// before the handler runs. Rejects with [`ApiError::Validation`] carrying
/// every violation.
///
/// Non-form bodies are treated as empty, so they fail with
/// `"movie" is required`.
#[derive(Debug)]
pub struct ValidMovie(pub MovieFields);

#[async_trait]
impl FromRequest<AppState> for ValidMovie {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let payload = if form::is_form_encoded(req.headers()) {
            let bytes = to_bytes(req.into_body(), state.config.api.max_request_size_bytes)
                .await
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            form::parse_nested(&bytes)
        } else {
            Map::new()
        };

        schema::validate_movie(&payload)
            .map(ValidMovie)
            .map_err(|violations| ApiError::Validation(violations.to_string()))
    }
}
