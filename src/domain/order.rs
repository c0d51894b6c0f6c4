use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ContainerId, DriverId, OrderId, VehicleId};
use crate::fetcher::KeywordMatch;

/// Lifecycle of a transport order, as reported by the API.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Draft,
    Scheduled,
    InTransit,
    Delivered,
    Cancelled,
}

/// Transport order as shown on the orders screen.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub order_no: String,
    pub customer: String,
    pub origin: String,
    pub destination: String,
    pub status: OrderStatus,
    pub container_id: Option<ContainerId>,
    pub driver_id: Option<DriverId>,
    pub vehicle_id: Option<VehicleId>,
    pub freight_amount: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl KeywordMatch for Order {
    fn matches_keyword(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        [&self.order_no, &self.customer, &self.origin, &self.destination]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
