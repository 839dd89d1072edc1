// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod blog_store;
pub mod failing;
pub mod time;
pub mod util;

pub use blog_store::InMemoryBlog;
pub use failing::{FailingArticleRepo, PanickingArticleRead};
pub use time::fixed_now;
pub use util::DummyClock;
