pub mod article_model;
pub mod comment_model;
pub mod topic_model;
