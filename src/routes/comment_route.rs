use axum::{routing::get, Router};

use crate::config::AppState;
use crate::handlers::comment_handler::*;

pub fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comments", get(list_comments_handler))
        .route(
            "/comments/{id}",
            get(get_comment_handler)
                .put(update_comment_handler)
                .delete(delete_comment_handler),
        )
        .route(
            "/articles/{id}/comments",
            get(list_article_comments_handler).post(create_comment_handler),
        )
}
