mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_create_comment_uses_path_article() {
    let app = test_app().await;
    let target = create_article(&app, "target", "b", "a").await;
    let other = create_article(&app, "other", "b", "a").await;

    let (status, comment) = post(
        &app,
        &format!("/articles/{target}/comments"),
        json!({ "body": "nice", "authorName": "Alice", "articleId": other }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(comment["articleId"], target);
    assert_eq!(comment["body"], "nice");
    assert_eq!(comment["authorName"], "Alice");

    let (_, comments) = get(&app, &format!("/articles/{other}/comments")).await;
    assert_eq!(comments, json!([]));
}

#[tokio::test]
async fn test_create_comment_on_missing_article() {
    let app = test_app().await;

    let (status, _) = post(
        &app,
        "/articles/3/comments",
        json!({ "body": "orphan", "authorName": "Alice" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, comments) = get(&app, "/comments").await;
    assert_eq!(comments, json!([]));
}

#[tokio::test]
async fn test_list_comments_for_article() {
    let app = test_app().await;
    let first = create_article(&app, "first", "b", "a").await;
    let second = create_article(&app, "second", "b", "a").await;
    create_comment(&app, first, "one", "Alice").await;
    create_comment(&app, second, "two", "Alice").await;
    create_comment(&app, first, "three", "Bob").await;

    let (status, comments) = get(&app, &format!("/articles/{first}/comments")).await;
    assert_eq!(status, StatusCode::OK);
    let bodies: Vec<&str> = comments
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["body"].as_str().unwrap())
        .collect();
    assert_eq!(bodies, ["one", "three"]);

    let (status, _) = get(&app, "/articles/99/comments").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_filter_by_author_is_exact_match() {
    let app = test_app().await;
    let id = create_article(&app, "t", "b", "a").await;
    create_comment(&app, id, "one", "Alice").await;
    create_comment(&app, id, "two", "Alice Smith").await;
    create_comment(&app, id, "three", "alice").await;
    create_comment(&app, id, "four", "Alice").await;

    let (status, comments) = get(&app, "/comments?authorName=Alice").await;
    assert_eq!(status, StatusCode::OK);
    let bodies: Vec<&str> = comments
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["body"].as_str().unwrap())
        .collect();
    assert_eq!(bodies, ["one", "four"]);

    let (_, all) = get(&app, "/comments").await;
    assert_eq!(all.as_array().unwrap().len(), 4);

    let (_, none) = get(&app, "/comments?authorName=Nobody").await;
    assert_eq!(none, json!([]));
}

#[tokio::test]
async fn test_update_comment_keeps_article_link() {
    let app = test_app().await;
    let original = create_article(&app, "original", "b", "a").await;
    let other = create_article(&app, "other", "b", "a").await;
    let id = create_comment(&app, original, "draft", "Alice").await;

    let (status, updated) = put(
        &app,
        &format!("/comments/{id}"),
        json!({ "id": 500, "body": "edited", "authorName": "Bob", "articleId": other }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["body"], "edited");
    assert_eq!(updated["authorName"], "Bob");
    assert_eq!(updated["articleId"], original);

    let (_, comments) = get(&app, &format!("/articles/{original}/comments")).await;
    assert_eq!(comments, json!([updated]));
}

#[tokio::test]
async fn test_update_and_delete_missing_comment() {
    let app = test_app().await;

    let (status, _) = put(&app, "/comments/8", json!({ "body": "x", "authorName": "y" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = delete(&app, "/comments/8").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_comment_leaves_article() {
    let app = test_app().await;
    let article = create_article(&app, "t", "b", "a").await;
    let id = create_comment(&app, article, "bye", "Alice").await;

    let (status, body) = delete(&app, &format!("/comments/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);

    let (status, _) = delete(&app, &format!("/comments/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&app, &format!("/articles/{article}")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = test_app().await;
    let article = create_article(&app, "t", "b", "a").await;

    let (status, body) = post(
        &app,
        &format!("/articles/{article}/comments"),
        json!({ "body": 42 }),
    )
    .await;
    assert!(status.is_client_error());
    assert_eq!(body["code"], "INVALID_JSON");
}
