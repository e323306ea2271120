pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, MethodRouter},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::StatusCodeMode;
pub use crate::state::AppState;

/// Build the full HTTP application.
///
/// Routing happens inside an inner router mounted as the fallback service of
/// an outer one, so method override (an outer layer) is applied before the
/// route is chosen.
pub fn app(state: AppState) -> Router {
    let routes = Router::new()
        .route("/seed", get(handlers::seed).fallback(handlers::invalid_route))
        .route("/movies", movie_collection())
        .route("/movies/", movie_collection())
        .route("/movies/:id", movie_member())
        .fallback(handlers::invalid_route)
        .with_state(state.clone());

    let mut app = Router::new()
        .fallback_service(routes)
        .layer(from_fn_with_state(state.clone(), middleware::method_override_middleware));

    if state.config.api.status_codes == StatusCodeMode::Legacy {
        app = app.layer(from_fn(middleware::uniform_status_middleware));
    }
    if state.config.api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }
    app
}

fn movie_collection() -> MethodRouter<AppState> {
    use handlers::movies;

    get(movies::list)
        .post(movies::create)
        .fallback(handlers::invalid_route)
}

fn movie_member() -> MethodRouter<AppState> {
    use handlers::movies;

    get(movies::show)
        .put(movies::update)
        .delete(movies::destroy)
        .fallback(handlers::invalid_route)
}
