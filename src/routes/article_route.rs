use axum::{routing::{delete, get}, Router};

use crate::config::AppState;
use crate::handlers::article_handler::*;

pub fn article_routes() -> Router<AppState> {
    Router::new()
        .route("/articles", get(list_articles_handler).post(create_article_handler))
        .route(
            "/articles/{id}",
            get(get_article_handler)
                .put(update_article_handler)
                .delete(delete_article_handler),
        )
        .route(
            "/articles/{id}/topics",
            get(list_article_topics_handler).post(add_article_topic_handler),
        )
        .route("/articles/{id}/topics/{topic_id}", delete(remove_article_topic_handler))
}
