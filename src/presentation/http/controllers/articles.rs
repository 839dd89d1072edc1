// src/presentation/http/controllers/articles.rs
use super::{Created, created};
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, ArticleListDto},
    queries::articles::{GetArticleByIdQuery, SearchArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, PathParams, QueryParams};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleSearchParams {
    /// Substring matched against article titles. Omit to list every article.
    #[serde(default)]
    pub search: Option<String>,
    /// Same as `search`; ignored when `search` is also given.
    #[serde(default)]
    pub title: Option<String>,
}

impl ArticleSearchParams {
    fn into_term(self) -> Option<String> {
        self.search.or(self.title)
    }
}

/// Body of `POST /articles` and `PUT /articles/{id}`.
///
/// Missing fields are treated as empty so they surface as field errors.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ArticleRequest {
    #[serde(default)]
    #[schema(max_length = 120)]
    pub title: Option<String>,
    #[serde(default)]
    #[schema(max_length = 32_000)]
    pub content: Option<String>,
}

#[utoipa::path(
    get,
    path = "/articles",
    params(ArticleSearchParams),
    responses(
        (status = 200, description = "Articles matching the search term.", body = ArticleListDto)
    ),
    tag = "Articles"
)]
pub async fn search_articles(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<ArticleSearchParams>,
) -> HttpResult<Json<ArticleListDto>> {
    state
        .services
        .article_queries
        .search_articles(SearchArticlesQuery {
            term: params.into_term(),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    PathParams(id): PathParams<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/articles",
    request_body = ArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid title or content.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<ArticleRequest>,
) -> HttpResult<Created<ArticleDto>> {
    let command = CreateArticleCommand {
        title: payload.title.unwrap_or_default(),
        content: payload.content.unwrap_or_default(),
    };

    let article = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok(created(format!("/articles/{}", article.id), article))
}

#[utoipa::path(
    put,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleDto),
        (status = 400, description = "Invalid title or content.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    PathParams(id): PathParams<i64>,
    JsonBody(payload): JsonBody<ArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title.unwrap_or_default(),
        content: payload.content.unwrap_or_default(),
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article and its comments deleted.", body = StatusResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    PathParams(id): PathParams<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}
