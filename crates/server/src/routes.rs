use axum::{extract::State, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::state::AppState;

pub mod users;

pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health { status: "ok", users: state.users.len().await })
}

/// Build the full application router: health probe plus the `/users` resource.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    // Collection paths answer with and without the trailing slash.
    let user_routes = Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        );

    // Compose: health probe, user resource, then CORS and tracing around everything
    Router::new()
        .route("/health", get(health))
        .merge(user_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // failures (5xx) at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
