use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// A bookable platform service (ride, food delivery, courier, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub is_available: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Regency a tariff can be scoped to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Regency {
    pub id: String,
    pub name: String,
    pub province_id: String,
}
