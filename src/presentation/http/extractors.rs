// src/presentation/http/extractors.rs
//! Extractors that reject with the JSON [`HttpError`] body instead of axum's
//! plain-text defaults.
use axum::extract::{FromRequest, FromRequestParts};

use super::error::HttpError;

#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct JsonBody<T>(pub T);

#[derive(Debug, Clone, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(HttpError))]
pub struct PathParams<T>(pub T);

#[derive(Debug, Clone, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(HttpError))]
pub struct QueryParams<T>(pub T);
