use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: DbId,
    pub name: String,
    pub is_available: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
