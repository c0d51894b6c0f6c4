use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ContainerCode, ContainerId};
use crate::fetcher::KeywordMatch;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerStatus {
    Free,
    Loaded,
    InService,
}

/// Container as shown on the containers screen.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub id: ContainerId,
    pub code: ContainerCode,
    /// Nominal length in feet (20 or 40 in practice).
    pub size_ft: u16,
    pub status: ContainerStatus,
    /// Free-text current location (terminal, yard, vessel).
    pub location: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl KeywordMatch for Container {
    fn matches_keyword(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.code.as_str().to_lowercase().contains(&needle)
            || self
                .location
                .as_deref()
                .is_some_and(|location| location.to_lowercase().contains(&needle))
    }
}
