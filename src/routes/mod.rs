use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppState;
use crate::handlers::health_check_handler;

pub mod article_route;
pub mod comment_route;
pub mod topic_route;

pub fn create_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .merge(article_route::article_routes())
        .merge(comment_route::comment_routes())
        .merge(topic_route::topic_routes())
        .route("/health", get(health_check_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Fully wired application, ready for `axum::serve` or `oneshot` in tests.
pub fn app(state: AppState) -> Router {
    create_routes().with_state(state)
}
