//! In-memory fetcher backing tests and demo screens.

use async_trait::async_trait;

use crate::fetcher::{FetchResult, KeywordMatch, PageFetcher};
use crate::pagination::{PageQuery, PageResult};

/// Serves pages out of a fixed row set, filtering by keyword the way the
/// real API does.
#[derive(Debug, Clone)]
pub struct InMemoryFetcher<T> {
    rows: Vec<T>,
}

impl<T> InMemoryFetcher<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl<T> PageFetcher<T> for InMemoryFetcher<T>
where
    T: KeywordMatch + Clone + Send + Sync,
{
    async fn fetch_page(&self, query: PageQuery) -> FetchResult<PageResult<T>> {
        let filtered: Vec<&T> = match query.keyword.as_deref() {
            Some(keyword) => self
                .rows
                .iter()
                .filter(|row| row.matches_keyword(keyword))
                .collect(),
            None => self.rows.iter().collect(),
        };

        let total = filtered.len();
        let size = query.size.max(1);
        let start = query.page.saturating_mul(size).min(total);
        let end = (start + size).min(total);
        let content = filtered[start..end].iter().map(|&row| row.clone()).collect();

        Ok(PageResult::new(content, total as u64, &query))
    }
}
