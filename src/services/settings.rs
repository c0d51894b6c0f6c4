use crate::access::{MenuSection, Operator};
use crate::domain::role::Role;
use crate::domain::salary_formula::SalaryFormula;
use crate::dto::listing::{ListQuery, PageData};
use crate::fetcher::PageFetcher;
use crate::models::config::OfficeConfig;
use crate::services::{ServiceError, ServiceResult, load_page};

/// Loads the roles list for the administration screen.
pub async fn load_roles_page<F>(
    fetcher: F,
    operator: &Operator,
    config: &OfficeConfig,
    query: ListQuery,
) -> ServiceResult<PageData<Role>>
where
    F: PageFetcher<Role>,
{
    if !MenuSection::Roles.visible_to(operator) {
        return Err(ServiceError::Unauthorized);
    }

    load_page(fetcher, query, config.items_per_page).await
}

/// Loads the salary formulas list for the administration screen.
pub async fn load_salary_formulas_page<F>(
    fetcher: F,
    operator: &Operator,
    config: &OfficeConfig,
    query: ListQuery,
) -> ServiceResult<PageData<SalaryFormula>>
where
    F: PageFetcher<SalaryFormula>,
{
    if !MenuSection::SalaryFormulas.visible_to(operator) {
        return Err(ServiceError::Unauthorized);
    }

    load_page(fetcher, query, config.items_per_page).await
}
