//! The fetch boundary list screens sit on top of.
//!
//! A [`PageFetcher`] turns a [`PageQuery`] into one page of rows. The real
//! implementation lives in the embedding application (an HTTP client
//! against the back-office API); this crate ships [`InMemoryFetcher`] for
//! tests and demos.

use std::sync::Arc;

use async_trait::async_trait;

use crate::pagination::{PageQuery, PageResult};

pub mod errors;
pub mod memory;

pub use errors::{FetchError, FetchResult};
pub use memory::InMemoryFetcher;

/// Supplies one page of rows for a list screen.
///
/// Fetches are idempotent reads; callers may issue any number of them
/// concurrently and are responsible for discarding overtaken results.
/// Timeouts, retries and transport concerns all live behind this trait.
#[async_trait]
pub trait PageFetcher<T>: Send + Sync
where
    T: Send,
{
    async fn fetch_page(&self, query: PageQuery) -> FetchResult<PageResult<T>>;
}

#[async_trait]
impl<T, F> PageFetcher<T> for Arc<F>
where
    T: Send,
    F: PageFetcher<T> + ?Sized,
{
    async fn fetch_page(&self, query: PageQuery) -> FetchResult<PageResult<T>> {
        (**self).fetch_page(query).await
    }
}

/// Row types that can be matched against an effective keyword.
///
/// Implementations match case-insensitively over whatever columns the
/// corresponding screen searches on.
pub trait KeywordMatch {
    fn matches_keyword(&self, keyword: &str) -> bool;
}
