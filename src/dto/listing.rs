use serde::Deserialize;

use crate::listing::ListSnapshot;
use crate::pagination::Paginated;

/// Query parameters accepted by every list screen.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListQuery {
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// 1-based page number requested by the user interface.
    pub page: Option<usize>,
}

/// Data required to render a list screen.
#[derive(Debug)]
pub struct PageData<T> {
    /// Rows with the windowed page strip.
    pub items: Paginated<T>,
    /// Total number of matching rows across all pages.
    pub total_elements: u64,
    /// Search query echoed back to the view when present.
    pub search_query: Option<String>,
}

impl<T> From<ListSnapshot<T>> for PageData<T> {
    fn from(snapshot: ListSnapshot<T>) -> Self {
        Self {
            items: Paginated::new(snapshot.rows, snapshot.page, snapshot.total_pages),
            total_elements: snapshot.total_elements,
            search_query: snapshot.keyword,
        }
    }
}
