use super::{Created, created};
use crate::application::{
    commands::comments::CreateCommentCommand,
    dto::{CommentDto, CommentListDto},
    queries::comments::{GetCommentQuery, ListCommentsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, PathParams};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentRequest {
    #[serde(default)]
    #[schema(max_length = 120)]
    pub title: Option<String>,
    #[serde(default)]
    #[schema(max_length = 32_000)]
    pub content: Option<String>,
}

#[utoipa::path(
    get,
    path = "/articles/{id}/comments",
    params(("id" = i64, Path, description = "Owning article")),
    responses(
        (status = 200, description = "Comments of the article, oldest first.", body = CommentListDto),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    PathParams(article_id): PathParams<i64>,
) -> HttpResult<Json<CommentListDto>> {
    state
        .services
        .comment_queries
        .list_comments(ListCommentsQuery { article_id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/articles/{id}/comments/{comment_id}",
    params(
        ("id" = i64, Path, description = "Owning article"),
        ("comment_id" = i64, Path, description = "Comment identifier")
    ),
    responses(
        (status = 200, description = "The comment.", body = CommentDto),
        (status = 404, description = "No such article, or no such comment on it.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn get_comment(
    Extension(state): Extension<HttpState>,
    PathParams((article_id, id)): PathParams<(i64, i64)>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .comment_queries
        .get_comment(GetCommentQuery { article_id, id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/articles/{id}/comments",
    params(("id" = i64, Path, description = "Owning article")),
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment created.", body = CommentDto),
        (status = 400, description = "Invalid title or content.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    PathParams(article_id): PathParams<i64>,
    JsonBody(payload): JsonBody<CommentRequest>,
) -> HttpResult<Created<CommentDto>> {
    let command = CreateCommentCommand {
        article_id,
        title: payload.title.unwrap_or_default(),
        content: payload.content.unwrap_or_default(),
    };

    let comment = state
        .services
        .comment_commands
        .create_comment(command)
        .await
        .into_http()?;

    Ok(created(
        format!("/articles/{}/comments/{}", comment.article_id, comment.id),
        comment,
    ))
}
