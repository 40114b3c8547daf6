pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;

pub use config::{AppState, Config};
pub use error::AppError;
