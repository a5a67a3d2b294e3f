//! Admin accounts awaiting or holding dashboard access.

use serde::{Deserialize, Serialize};

use crate::filter::{FilterStatus, RowStatus};
use crate::types::{DbId, Uuid};

/// Review status of an admin account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminStatus {
    Submitted,
    Approved,
    Rejected,
    Pending,
}

impl FilterStatus for AdminStatus {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Pending => "pending",
        }
    }

    fn parse_value(s: &str) -> Option<Self> {
        match s {
            "submitted" => Some(Self::Submitted),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            "pending" => Some(Self::Pending),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    pub id: DbId,
    pub user_id: DbId,
    pub uuid: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub status: RowStatus<AdminStatus>,
    #[serde(default)]
    pub work_area_ids: Vec<String>,
    pub name: String,
    pub reject_notes: Option<Vec<String>>,
}
