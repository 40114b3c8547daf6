pub mod article_service;
pub mod comment_service;
pub mod topic_service;
