use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        heroes::{
            create_hero, delete_hero, force_create_hero, get_hero, list_heroes, stream_heroes,
            update_hero,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        .route("/heroes", get(list_heroes).post(create_hero))
        .route("/heroes/items", get(stream_heroes))
        .route(
            "/heroes/{id}",
            get(get_hero)
                .post(force_create_hero)
                .put(update_hero)
                .delete(delete_hero),
        )
        .layer(cors);

    // Main application router
    Router::new()
        .route("/livez", get(livez))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
