use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{PlateNumber, VehicleId};
use crate::fetcher::KeywordMatch;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleStatus {
    Available,
    OnRoute,
    Maintenance,
}

/// Vehicle as shown on the vehicles screen.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: VehicleId,
    pub plate: PlateNumber,
    pub model: String,
    pub capacity_kg: u32,
    pub status: VehicleStatus,
    pub updated_at: NaiveDateTime,
}

impl KeywordMatch for Vehicle {
    fn matches_keyword(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.plate.as_str().to_lowercase().contains(&needle)
            || self.model.to_lowercase().contains(&needle)
    }
}
