use crate::domain::errors::{DomainError, DomainResult, ensure_bounded_text};

pub const COMMENT_TITLE_MAX_LEN: usize = 120;
pub const COMMENT_CONTENT_MAX_LEN: usize = 32_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(i64);

impl CommentId {
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] when `id` is not positive.
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "comment id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentTitle(String);

impl CommentTitle {
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] when the value is blank or too long.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        ensure_bounded_text(&value, "title", COMMENT_TITLE_MAX_LEN)?;
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentContent(String);

impl CommentContent {
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] when the value is blank or too long.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        ensure_bounded_text(&value, "content", COMMENT_CONTENT_MAX_LEN)?;
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}
