pub mod article_handler;
pub mod comment_handler;
pub mod topic_handler;

pub async fn health_check_handler() -> &'static str {
    "OK"
}
