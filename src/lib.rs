//! Minimal blogging backend: articles with nested comments over HTTP, stored
//! in `SQLite`.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
