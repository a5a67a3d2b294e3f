//! Wallet top-up requests reviewed by admins.

use serde::{Deserialize, Serialize};

use crate::filter::{FilterStatus, RowStatus};
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalletRequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl FilterStatus for WalletRequestStatus {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    fn parse_value(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Admin decision on a top-up request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopupDecision {
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletRequest {
    pub id: DbId,
    pub user_id: DbId,
    pub wallet_id: DbId,
    pub amount: f64,
    pub status: RowStatus<WalletRequestStatus>,
    pub description: String,
    pub admin_note: Option<String>,
    pub requested_at: Timestamp,
    pub processed_at: Option<Timestamp>,
    pub processed_by: Option<DbId>,
}

/// Body for the top-up decision endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct TopupDecisionRequest {
    pub status: TopupDecision,
    pub admin_note: String,
}
