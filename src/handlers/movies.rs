use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Json, Response},
};

use crate::database::{Movie, MovieId};
use crate::error::ApiError;
use crate::middleware::ValidMovie;
use crate::state::AppState;

pub const DELETED_MESSAGE: &str = "Movie Deleted";

/// GET /movies - List every movie in store order
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, ApiError> {
    Ok(Json(state.store.find_all().await?))
}

/// GET /movies/:id - Show one movie
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    let id = parse_id(&id)?;
    state
        .store
        .find_by_id(&id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// POST /movies - Create a movie and redirect to it
pub async fn create(
    State(state): State<AppState>,
    ValidMovie(fields): ValidMovie,
) -> Result<Response, ApiError> {
    let id = state.store.insert_one(fields).await?;
    Ok(redirect_to_movie(&id))
}

/// PUT /movies/:id - Update a movie and redirect to it.
///
/// Redirects whether or not the movie exists; updating a missing id changes
/// nothing. A malformed id is reported as not found.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidMovie(fields): ValidMovie,
) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    state.store.update_by_id(&id, fields).await?;
    Ok(redirect_to_movie(&id))
}

/// DELETE /movies/:id - Delete a movie if it exists
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    let id = parse_id(&id)?;
    if state.store.find_by_id(&id).await?.is_none() {
        return Err(ApiError::NotFound);
    }
    state.store.delete_by_id(&id).await?;
    Ok(DELETED_MESSAGE)
}

/// Malformed ids cannot match any record, so they are reported as not found
/// instead of being sent to the store
fn parse_id(raw: &str) -> Result<MovieId, ApiError> {
    raw.parse().map_err(|_| {
        tracing::debug!("Malformed movie id '{}'", raw);
        ApiError::NotFound
    })
}

fn redirect_to_movie(id: &MovieId) -> Response {
    (StatusCode::FOUND, [(LOCATION, format!("/movies/{}", id))]).into_response()
}
