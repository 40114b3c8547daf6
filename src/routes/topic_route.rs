use axum::{routing::{get, put}, Router};

use crate::config::AppState;
use crate::handlers::topic_handler::*;

pub fn topic_routes() -> Router<AppState> {
    Router::new()
        .route("/topics", get(list_topics_handler).post(create_topic_handler))
        .route("/topics/{id}", put(update_topic_handler).delete(delete_topic_handler))
        .route("/topics/{id}/articles", get(list_topic_articles_handler))
}
