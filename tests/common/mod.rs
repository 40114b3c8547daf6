#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use blog_api::{db, routes, AppState};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Router over a fresh, migrated in-memory SQLite database.
pub async fn test_app() -> Router {
    let db = db::init_database("sqlite::memory:")
        .await
        .expect("in-memory database");
    routes::app(AppState { db })
}

/// Sends one request and returns the status plus the JSON body (`Value::Null` when empty).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

/// Creates an article and returns its id.
pub async fn create_article(app: &Router, title: &str, body: &str, author: &str) -> i64 {
    let (status, json) = post(
        app,
        "/articles",
        serde_json::json!({ "title": title, "body": body, "authorName": author }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json["id"].as_i64().unwrap()
}

/// Creates a comment on `article_id` and returns its id.
pub async fn create_comment(app: &Router, article_id: i64, body: &str, author: &str) -> i64 {
    let (status, json) = post(
        app,
        &format!("/articles/{article_id}/comments"),
        serde_json::json!({ "body": body, "authorName": author }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json["id"].as_i64().unwrap()
}
