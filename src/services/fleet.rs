use crate::access::{MenuSection, Operator};
use crate::domain::driver::Driver;
use crate::domain::vehicle::Vehicle;
use crate::dto::listing::{ListQuery, PageData};
use crate::fetcher::PageFetcher;
use crate::models::config::OfficeConfig;
use crate::services::{ServiceError, ServiceResult, load_page};

/// Loads the drivers list for the fleet screen.
pub async fn load_drivers_page<F>(
    fetcher: F,
    operator: &Operator,
    config: &OfficeConfig,
    query: ListQuery,
) -> ServiceResult<PageData<Driver>>
where
    F: PageFetcher<Driver>,
{
    if !MenuSection::Drivers.visible_to(operator) {
        return Err(ServiceError::Unauthorized);
    }

    load_page(fetcher, query, config.items_per_page).await
}

/// Loads the vehicles list for the fleet screen.
pub async fn load_vehicles_page<F>(
    fetcher: F,
    operator: &Operator,
    config: &OfficeConfig,
    query: ListQuery,
) -> ServiceResult<PageData<Vehicle>>
where
    F: PageFetcher<Vehicle>,
{
    if !MenuSection::Vehicles.visible_to(operator) {
        return Err(ServiceError::Unauthorized);
    }

    load_page(fetcher, query, config.items_per_page).await
}
