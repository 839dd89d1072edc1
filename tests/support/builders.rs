// tests/support/builders.rs
use serde_json::{Value, json};

/// Request body shaped like the n-th generated sample: `Title{n}` / `Content{n}`.
pub fn sample_body(n: usize) -> Value {
    json!({ "title": format!("Title{n}"), "content": format!("Content{n}") })
}

pub fn body_with(title: impl Into<String>, content: impl Into<String>) -> Value {
    json!({ "title": title.into(), "content": content.into() })
}

pub fn text_of_len(len: usize) -> String {
    "a".repeat(len)
}
