// src/presentation/http/routes.rs
use crate::config::{AppConfig, RateLimitConfig};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, comments},
    error::panic_response,
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::get,
};
use std::time::Duration;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Router settings that vary between deployments and tests.
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Empty or containing `*` allows any origin.
    pub allowed_origins: Vec<String>,
    pub rate_limit: Option<RateLimitConfig>,
}

impl RouterOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit: config.rate_limit(),
        }
    }
}

#[must_use]
pub fn build_router(state: HttpState) -> Router {
    build_router_with_options(state, RouterOptions::default())
}

#[must_use]
pub fn build_router_with_options(state: HttpState, options: RouterOptions) -> Router {
    let RouterOptions {
        allowed_origins,
        rate_limit,
    } = options;

    let mut router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/articles",
            get(articles::search_articles).post(articles::create_article),
        )
        .route(
            "/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route(
            "/articles/{id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/articles/{id}/comments/{comment_id}",
            get(comments::get_comment),
        );

    let governor = rate_limit.and_then(|limit| {
        let layer = rate_limit_layer(limit.replenish_interval_ms, limit.burst_size);
        if layer.is_none() {
            tracing::warn!(?limit, "invalid rate limit settings; rate limiting disabled");
        }
        layer
    });
    if let Some(layer) = governor {
        router = router.layer(layer);
    }

    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if allowed_origins.is_empty() || allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|_| tracing::warn!(%origin, "ignoring invalid CORS origin"))
                .ok()
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
