use serde::{Deserialize, Serialize};

use crate::domain::types::RoleId;
use crate::fetcher::KeywordMatch;

/// Back-office role as shown on the roles administration screen.
///
/// `permissions` holds the raw permission keys the API grants to the
/// role; interpreting them is [`crate::access`]'s job.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub description: Option<String>,
    pub permissions: Vec<String>,
}

impl KeywordMatch for Role {
    fn matches_keyword(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .is_some_and(|description| description.to_lowercase().contains(&needle))
    }
}
