// tests/support/mocks/blog_store.rs
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crossblog::domain::article::{
    Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleTitle, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use crossblog::domain::comment::{
    Comment, CommentContent, CommentId, CommentReadRepository, CommentTitle,
    CommentWriteRepository, NewComment,
};
use crossblog::domain::errors::{DomainError, DomainResult};

#[derive(Default)]
struct BlogData {
    articles: BTreeMap<i64, Article>,
    comments: BTreeMap<i64, Comment>,
    next_article_id: i64,
    next_comment_id: i64,
}

/// Article and comment storage sharing one lock, so comment inserts can see
/// articles and article deletes cascade the way the database does.
#[derive(Default)]
pub struct InMemoryBlog {
    inner: Mutex<BlogData>,
}

impl InMemoryBlog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_article(&self, title: &str, content: &str) -> Article {
        self.seed_article_at(title, content, super::fixed_now())
    }

    pub fn seed_article_at(&self, title: &str, content: &str, created_at: DateTime<Utc>) -> Article {
        let mut data = self.inner.lock().unwrap();
        data.next_article_id += 1;
        let article = Article {
            id: ArticleId::new(data.next_article_id).unwrap(),
            title: ArticleTitle::new(title).unwrap(),
            content: ArticleContent::new(content).unwrap(),
            created_at,
        };
        let key = data.next_article_id;
        data.articles.insert(key, article.clone());
        drop(data);
        article
    }

    pub fn seed_comment(&self, article: &Article, title: &str, content: &str) -> Comment {
        let mut data = self.inner.lock().unwrap();
        data.next_comment_id += 1;
        let comment = Comment {
            id: CommentId::new(data.next_comment_id).unwrap(),
            article_id: article.id,
            title: CommentTitle::new(title).unwrap(),
            content: CommentContent::new(content).unwrap(),
            created_at: super::fixed_now(),
        };
        let key = data.next_comment_id;
        data.comments.insert(key, comment.clone());
        drop(data);
        comment
    }

    pub fn article_count(&self) -> usize {
        self.inner.lock().unwrap().articles.len()
    }

    pub fn comment_count(&self) -> usize {
        self.inner.lock().unwrap().comments.len()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryBlog {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut data = self.inner.lock().unwrap();
        data.next_article_id += 1;
        let stored = Article {
            id: ArticleId::new(data.next_article_id)?,
            title: article.title,
            content: article.content,
            created_at: article.created_at,
        };
        let key = data.next_article_id;
        data.articles.insert(key, stored.clone());
        drop(data);
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Option<Article>> {
        let mut data = self.inner.lock().unwrap();
        Ok(data.articles.get_mut(&i64::from(update.id)).map(|article| {
            article.title = update.title;
            article.content = update.content;
            article.clone()
        }))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<bool> {
        let mut data = self.inner.lock().unwrap();
        let removed = data.articles.remove(&i64::from(id)).is_some();
        if removed {
            data.comments.retain(|_, comment| comment.article_id != id);
        }
        drop(data);
        Ok(removed)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryBlog {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let data = self.inner.lock().unwrap();
        Ok(data.articles.get(&i64::from(id)).cloned())
    }

    async fn search(&self, term: Option<&str>) -> DomainResult<Vec<Article>> {
        let data = self.inner.lock().unwrap();
        let needle = term.map(str::to_lowercase);
        let mut found: Vec<Article> = data
            .articles
            .values()
            .filter(|article| {
                needle
                    .as_deref()
                    .is_none_or(|needle| article.title.as_str().to_lowercase().contains(needle))
            })
            .cloned()
            .collect();
        drop(data);
        found.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(found)
    }
}

#[async_trait]
impl CommentWriteRepository for InMemoryBlog {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut data = self.inner.lock().unwrap();
        if !data.articles.contains_key(&i64::from(comment.article_id)) {
            return Err(DomainError::NotFound("article not found".into()));
        }
        data.next_comment_id += 1;
        let stored = Comment {
            id: CommentId::new(data.next_comment_id)?,
            article_id: comment.article_id,
            title: comment.title,
            content: comment.content,
            created_at: comment.created_at,
        };
        let key = data.next_comment_id;
        data.comments.insert(key, stored.clone());
        drop(data);
        Ok(stored)
    }
}

#[async_trait]
impl CommentReadRepository for InMemoryBlog {
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let data = self.inner.lock().unwrap();
        Ok(data
            .comments
            .values()
            .filter(|comment| comment.article_id == article_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let data = self.inner.lock().unwrap();
        Ok(data.comments.get(&i64::from(id)).cloned())
    }
}
