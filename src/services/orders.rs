use crate::access::{MenuSection, Operator};
use crate::domain::container::Container;
use crate::domain::order::Order;
use crate::dto::listing::{ListQuery, PageData};
use crate::fetcher::PageFetcher;
use crate::models::config::OfficeConfig;
use crate::services::{ServiceError, ServiceResult, load_page};

/// Loads the orders list for the dispatch screen.
pub async fn load_orders_page<F>(
    fetcher: F,
    operator: &Operator,
    config: &OfficeConfig,
    query: ListQuery,
) -> ServiceResult<PageData<Order>>
where
    F: PageFetcher<Order>,
{
    if !MenuSection::Orders.visible_to(operator) {
        return Err(ServiceError::Unauthorized);
    }

    load_page(fetcher, query, config.items_per_page).await
}

/// Loads the containers list for the dispatch screen.
pub async fn load_containers_page<F>(
    fetcher: F,
    operator: &Operator,
    config: &OfficeConfig,
    query: ListQuery,
) -> ServiceResult<PageData<Container>>
where
    F: PageFetcher<Container>,
{
    if !MenuSection::Containers.visible_to(operator) {
        return Err(ServiceError::Unauthorized);
    }

    load_page(fetcher, query, config.items_per_page).await
}
