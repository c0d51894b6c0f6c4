//! Stateful paged-list controller backing every table in the back office.
//!
//! The controller decouples "which page and keyword is the view on" from
//! "how that page is fetched". Any number of fetches may overlap when an
//! operator pages or types quickly; a request sequence number compared at
//! commit time guarantees the rows on screen always belong to the last
//! issued `(page, keyword)` pair, whatever order the responses arrive in.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::fetcher::{FetchResult, PageFetcher};
use crate::pagination::PageQuery;

/// Normalizes a raw search input: trimmed, absent when empty.
pub fn effective_keyword(raw: &str) -> Option<String> {
    Some(raw.trim().to_string()).filter(|s| !s.is_empty())
}

#[derive(Debug)]
struct ListState<T> {
    /// 1-based page shown to the view.
    page: usize,
    keyword: Option<String>,
    rows: Vec<T>,
    total_elements: u64,
    total_pages: usize,
    loading: bool,
    /// Monotonically increasing fetch counter; the staleness check.
    request_seq: u64,
}

impl<T> ListState<T> {
    fn new() -> Self {
        Self {
            page: 1,
            keyword: None,
            rows: Vec::new(),
            total_elements: 0,
            total_pages: 1,
            loading: false,
            request_seq: 0,
        }
    }
}

/// View-facing snapshot of a controller, taken under one lock.
#[derive(Debug, Clone)]
pub struct ListSnapshot<T> {
    pub page: usize,
    pub keyword: Option<String>,
    pub rows: Vec<T>,
    pub total_elements: u64,
    pub total_pages: usize,
    pub loading: bool,
}

/// Paged-list controller over a [`PageFetcher`].
///
/// Owned by exactly one list screen. All mutators take `&self`, so
/// overlapping calls from concurrent tasks are legal; the lock is never
/// held across an await.
pub struct ListController<T, F> {
    fetcher: F,
    page_size: usize,
    reset_page_on_keyword_change: bool,
    state: Mutex<ListState<T>>,
}

impl<T, F> ListController<T, F>
where
    T: Clone + Send,
    F: PageFetcher<T>,
{
    /// Creates an idle controller on page 1 with no keyword. No fetch is
    /// issued until the first [`reload`](Self::reload) or mutator call.
    pub fn new(fetcher: F, page_size: usize) -> Self {
        Self {
            fetcher,
            page_size,
            reset_page_on_keyword_change: true,
            state: Mutex::new(ListState::new()),
        }
    }

    /// Pre-sets the search keyword without issuing a fetch.
    #[must_use]
    pub fn keyword(self, raw: &str) -> Self {
        self.lock().keyword = effective_keyword(raw);
        self
    }

    /// Pre-sets the starting page without issuing a fetch.
    #[must_use]
    pub fn start_page(self, page: usize) -> Self {
        self.lock().page = page.max(1);
        self
    }

    /// Keeps the current page when the keyword changes instead of jumping
    /// back to page 1.
    #[must_use]
    pub fn keep_page_on_keyword_change(mut self) -> Self {
        self.reset_page_on_keyword_change = false;
        self
    }

    fn lock(&self) -> MutexGuard<'_, ListState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn page(&self) -> usize {
        self.lock().page
    }

    /// Latest accepted rows.
    pub fn rows(&self) -> Vec<T> {
        self.lock().rows.clone()
    }

    pub fn total_elements(&self) -> u64 {
        self.lock().total_elements
    }

    pub fn total_pages(&self) -> usize {
        self.lock().total_pages
    }

    /// True only while the most recently issued fetch is outstanding.
    pub fn loading(&self) -> bool {
        self.lock().loading
    }

    /// Effective keyword currently applied to the list.
    pub fn search_query(&self) -> Option<String> {
        self.lock().keyword.clone()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Consistent snapshot of the view-facing state.
    pub fn snapshot(&self) -> ListSnapshot<T> {
        let state = self.lock();
        ListSnapshot {
            page: state.page,
            keyword: state.keyword.clone(),
            rows: state.rows.clone(),
            total_elements: state.total_elements,
            total_pages: state.total_pages,
            loading: state.loading,
        }
    }

    /// Fetches the current `(page, keyword)` pair.
    ///
    /// Resolves once the request settles, but commits rows and totals only
    /// if the request is still the newest issued. A rejection propagates
    /// to the caller either way; an overtaken request must not flip
    /// `loading` back after a newer one has started.
    pub async fn reload(&self) -> FetchResult<()> {
        let (my_seq, query) = {
            let mut state = self.lock();
            state.request_seq += 1;
            state.loading = true;
            let query = PageQuery::for_ui_page(state.page, self.page_size, state.keyword.clone());
            (state.request_seq, query)
        };
        let query_page = query.page;

        let outcome = self.fetcher.fetch_page(query).await;

        let mut state = self.lock();
        if state.request_seq != my_seq {
            log::debug!(
                "Discarding overtaken response for page {query_page} (seq {my_seq}, current {})",
                state.request_seq
            );
            return outcome.map(|_| ());
        }

        state.loading = false;
        let page = outcome?;
        state.rows = page.content;
        state.total_elements = page.total_elements;
        state.total_pages = page.total_pages.max(1);
        Ok(())
    }

    /// Applies a new search input. The effective keyword is the trimmed
    /// string, absent when empty; a fetch is issued only when it actually
    /// changed, after the page reset (when enabled) has been applied.
    pub async fn set_keyword(&self, raw: &str) -> FetchResult<()> {
        let changed = {
            let mut state = self.lock();
            let keyword = effective_keyword(raw);
            if state.keyword == keyword {
                false
            } else {
                state.keyword = keyword;
                if self.reset_page_on_keyword_change {
                    state.page = 1;
                }
                true
            }
        };
        if changed { self.reload().await } else { Ok(()) }
    }

    /// Moves back one page, clamped to page 1. No-op (and no fetch) at the
    /// first page.
    pub async fn prev(&self) -> FetchResult<()> {
        let changed = {
            let mut state = self.lock();
            if state.page > 1 {
                state.page -= 1;
                true
            } else {
                false
            }
        };
        if changed { self.reload().await } else { Ok(()) }
    }

    /// Advances one page, clamped to the last known page count. No-op (and
    /// no fetch) at the last page.
    pub async fn next(&self) -> FetchResult<()> {
        let changed = {
            let mut state = self.lock();
            if state.page < state.total_pages.max(1) {
                state.page += 1;
                true
            } else {
                false
            }
        };
        if changed { self.reload().await } else { Ok(()) }
    }

    /// Jumps to an arbitrary page. No bounds are enforced here; the view
    /// is responsible for disabling out-of-range controls.
    pub async fn set_page(&self, page: usize) -> FetchResult<()> {
        let changed = {
            let mut state = self.lock();
            if state.page == page {
                false
            } else {
                state.page = page;
                true
            }
        };
        if changed { self.reload().await } else { Ok(()) }
    }
}
