use axum::extract::State;

use crate::database::fixtures;
use crate::error::ApiError;
use crate::state::AppState;

pub const SEEDED_MESSAGE: &str = "Data has been seeded";

/// GET /seed - Insert the demo movies. Not deduplicated: every call appends.
pub async fn seed(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    let movies = fixtures::demo_movies();
    let count = movies.len();
    state.store.insert_many(movies).await?;
    tracing::info!("Seeded {} demo movies", count);
    Ok(SEEDED_MESSAGE)
}
