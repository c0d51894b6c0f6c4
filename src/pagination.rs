//! Page query/result types shared with the REST API, plus the windowed
//! page strip list screens use to render their pagination controls.

use serde::{Deserialize, Serialize};

/// Default number of rows per list page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Outgoing page request. `page` is 0-based, as the API expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    pub page: usize,
    pub size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl PageQuery {
    /// Builds the query for a 1-based UI page, floored at the first page.
    pub fn for_ui_page(ui_page: usize, size: usize, keyword: Option<String>) -> Self {
        Self {
            page: ui_page.saturating_sub(1),
            size,
            keyword,
        }
    }
}

/// One page of rows as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    /// Always at least 1, even for an empty result set.
    pub total_pages: usize,
    pub size: usize,
    /// 0-based index of this page.
    pub number: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<bool>,
}

impl<T> PageResult<T> {
    /// Assembles a page for `query`, deriving the page count from the
    /// total row count.
    pub fn new(content: Vec<T>, total_elements: u64, query: &PageQuery) -> Self {
        let total_pages = total_pages_for(total_elements, query.size);
        Self {
            content,
            total_elements,
            total_pages,
            size: query.size,
            number: query.page,
            first: Some(query.page == 0),
            last: Some(query.page + 1 >= total_pages),
        }
    }

    pub fn empty(query: &PageQuery) -> Self {
        Self::new(Vec::new(), 0, query)
    }
}

/// Page count for a result set; at least 1 so callers never divide by zero.
pub fn total_pages_for(total_elements: u64, size: usize) -> usize {
    (total_elements as usize).div_ceil(size.max(1)).max(1)
}

/// Windowed strip of page numbers: both edges plus a window around the
/// current page, with `None` marking an elided gap.
fn page_window(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(total_pages + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(total_pages + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(total_pages.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=total_pages).map(Some));

    pages
}

/// Rows of a list screen together with the page strip to render below it.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = current_page.max(1);

        let pages = page_window(total_pages, current_page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page: current_page,
        }
    }
}
