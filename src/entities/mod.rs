pub mod article;
pub mod article_topic;
pub mod comment;
pub mod topic;
