use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{DriverEmail, DriverId, SalaryFormulaId};
use crate::fetcher::KeywordMatch;

/// Driver as shown on the drivers screen.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub email: Option<DriverEmail>,
    pub phone: Option<String>,
    pub license_no: String,
    /// Salary formula this driver is paid by, when assigned.
    pub salary_formula_id: Option<SalaryFormulaId>,
    pub hired_at: NaiveDate,
    pub active: bool,
}

impl KeywordMatch for Driver {
    fn matches_keyword(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.license_no.to_lowercase().contains(&needle)
            || self
                .email
                .as_ref()
                .is_some_and(|email| email.as_str().contains(&needle))
    }
}
