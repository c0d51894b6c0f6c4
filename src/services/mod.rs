//! Per-screen loaders: gate by role, drive a list controller, shape the
//! outcome for the view.

use thiserror::Error;

use crate::dto::listing::{ListQuery, PageData};
use crate::fetcher::{FetchError, PageFetcher};
use crate::listing::ListController;

pub mod fleet;
pub mod orders;
pub mod settings;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Issues one fetch for the requested `(page, search)` pair and shapes the
/// settled controller state for the view.
pub(crate) async fn load_page<T, F>(
    fetcher: F,
    query: ListQuery,
    items_per_page: usize,
) -> ServiceResult<PageData<T>>
where
    T: Clone + Send,
    F: PageFetcher<T>,
{
    let controller = ListController::new(fetcher, items_per_page)
        .start_page(query.page.unwrap_or(1))
        .keyword(query.search.as_deref().unwrap_or_default());

    controller.reload().await.map_err(|err| {
        log::error!("Failed to load list page: {err}");
        ServiceError::from(err)
    })?;

    Ok(PageData::from(controller.snapshot()))
}
