use axum::http::{Method, StatusCode, header::LOCATION};

mod support;

use support::{
    assert_error_response, body_with, error_fields, make_test_router, sample_body, send,
};

#[tokio::test]
async fn list_returns_only_the_articles_comments() {
    let (app, blog) = make_test_router();
    let article = blog.seed_article("Title1", "Content1");
    let other = blog.seed_article("Title2", "Content2");
    blog.seed_comment(&article, "Title1", "Content1");
    blog.seed_comment(&other, "Title2", "Content2");

    let resp = send(
        &app,
        Method::GET,
        &format!("/articles/{}/comments", i64::from(article.id)),
        None,
    )
    .await;

    assert_eq!(resp.status, StatusCode::OK);
    let comments = resp.json["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["article_id"], i64::from(article.id));
}

#[tokio::test]
async fn list_for_missing_article_returns_404() {
    let (app, _blog) = make_test_router();

    let resp = send(&app, Method::GET, "/articles/1/comments", None).await;

    assert_error_response(&resp, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn get_returns_the_comment() {
    let (app, blog) = make_test_router();
    let article = blog.seed_article("Title1", "Content1");
    let comment = blog.seed_comment(&article, "Title1", "Content1");

    let resp = send(
        &app,
        Method::GET,
        &format!(
            "/articles/{}/comments/{}",
            i64::from(article.id),
            i64::from(comment.id)
        ),
        None,
    )
    .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json["title"], "Title1");
    assert_eq!(resp.json["id"], i64::from(comment.id));
}

#[tokio::test]
async fn get_through_missing_article_returns_404() {
    let (app, blog) = make_test_router();
    let article = blog.seed_article("Title1", "Content1");
    blog.seed_comment(&article, "Title1", "Content1");

    let resp = send(&app, Method::GET, "/articles/2/comments/1", None).await;

    assert_error_response(&resp, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn get_missing_comment_returns_404() {
    let (app, blog) = make_test_router();
    let article = blog.seed_article("Title1", "Content1");
    blog.seed_comment(&article, "Title1", "Content1");

    let resp = send(&app, Method::GET, "/articles/1/comments/2", None).await;

    assert_error_response(&resp, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn get_comment_of_another_article_returns_404() {
    let (app, blog) = make_test_router();
    let first = blog.seed_article("Title1", "Content1");
    let second = blog.seed_article("Title2", "Content2");
    let comment = blog.seed_comment(&second, "Title1", "Content1");

    let resp = send(
        &app,
        Method::GET,
        &format!(
            "/articles/{}/comments/{}",
            i64::from(first.id),
            i64::from(comment.id)
        ),
        None,
    )
    .await;

    assert_error_response(&resp, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn create_returns_201_with_location() {
    let (app, blog) = make_test_router();
    let article = blog.seed_article("Title1", "Content1");

    let resp = send(
        &app,
        Method::POST,
        &format!("/articles/{}/comments", i64::from(article.id)),
        Some(sample_body(1)),
    )
    .await;

    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(resp.json["title"], "Title1");
    assert_eq!(resp.json["article_id"], i64::from(article.id));
    let id = resp.json["id"].as_i64().unwrap();
    assert_eq!(
        resp.headers.get(LOCATION).unwrap().to_str().unwrap(),
        format!("/articles/{}/comments/{id}", i64::from(article.id))
    );
    assert_eq!(blog.comment_count(), 1);
}

#[tokio::test]
async fn create_with_empty_title_returns_400_even_without_article() {
    let (app, blog) = make_test_router();

    let resp = send(
        &app,
        Method::POST,
        "/articles/1/comments",
        Some(body_with("", "Content1")),
    )
    .await;

    assert_error_response(&resp, StatusCode::BAD_REQUEST, "Bad Request");
    assert_eq!(error_fields(&resp), ["title"]);
    assert_eq!(blog.comment_count(), 0);
}

#[tokio::test]
async fn create_for_missing_article_returns_404() {
    let (app, _blog) = make_test_router();

    let resp = send(
        &app,
        Method::POST,
        "/articles/1/comments",
        Some(sample_body(1)),
    )
    .await;

    assert_error_response(&resp, StatusCode::NOT_FOUND, "Not Found");
}
