use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::types::SalaryFormulaId;
use crate::fetcher::KeywordMatch;

/// Driver salary formula as shown on the salary administration screen.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalaryFormula {
    pub id: SalaryFormulaId,
    pub name: String,
    /// Fixed monthly base.
    pub base_rate: Decimal,
    /// Paid per driven kilometre.
    pub per_km_rate: Decimal,
    /// Bonus as a percentage of freight revenue.
    pub bonus_percent: Decimal,
    pub effective_from: NaiveDate,
}

impl KeywordMatch for SalaryFormula {
    fn matches_keyword(&self, keyword: &str) -> bool {
        self.name.to_lowercase().contains(&keyword.to_lowercase())
    }
}
