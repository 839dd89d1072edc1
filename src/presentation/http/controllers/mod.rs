// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod comments;

use axum::{
    Json,
    http::{HeaderName, StatusCode, header::LOCATION},
};

/// `201 Created` with a `Location` header pointing at the new resource.
pub type Created<T> = (StatusCode, [(HeaderName, String); 1], Json<T>);

pub(crate) const fn created<T>(location: String, body: T) -> Created<T> {
    (StatusCode::CREATED, [(LOCATION, location)], Json(body))
}
