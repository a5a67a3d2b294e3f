//! Driver accounts, their detail view, and their wallet ledger.

use serde::{Deserialize, Serialize};

use crate::envelope::Paginated;
use crate::filter::{FilterStatus, RowStatus};
use crate::types::{DbId, Timestamp, Uuid};

/// Review status of a driver registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    Submitted,
    Approved,
    Rejected,
    Pending,
}

impl FilterStatus for DriverStatus {
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

/// Row in the driver list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub uuid: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub full_name: String,
    pub phone_number: String,
    pub plate_number: String,
    pub status: RowStatus<DriverStatus>,
    #[serde(default)]
    pub reject_notes: Vec<serde_json::Value>,
    pub avg_rating: Option<f64>,
}

/// Full driver record returned by the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverDetail {
    pub user: DriverAccount,
    pub driver: DriverProfile,
    pub work_area: NamedRef<String>,
    pub summary: DriverActivity,
    pub rating: DriverRating,
    pub service: NamedRef<DbId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverAccount {
    pub uuid: Uuid,
    pub username: String,
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Registration profile of a driver, including document links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverProfile {
    pub uuid: Uuid,
    pub full_name: String,
    pub phone_number: String,
    pub address: String,
    pub domicile_url: Option<String>,
    pub ktp_number: String,
    pub ktp_url: Option<String>,
    pub selfie_with_ktp_url: Option<String>,
    pub date_of_birth: String,
    pub gender: String,
    pub work_area_id: String,
    pub plate_number: String,
    pub vehicle_brand: String,
    pub vehicle_model: String,
    pub vehicle_year: i32,
    pub vehicle_photo_url: Option<String>,
    pub stnk_url: Option<String>,
    pub license_number: Option<String>,
    pub service_id: DbId,
    pub image_url: Option<String>,
    pub joined_at: Timestamp,
    pub vehicle: Option<String>,
    pub color: String,
    pub skck_url: Option<String>,
    pub sim_number: Option<String>,
    pub sim_url: Option<String>,
    pub sim_expired_at: Option<Timestamp>,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub account_holder_name: Option<String>,
    pub referral_code: Option<String>,
    pub status: RowStatus<DriverStatus>,
    #[serde(default)]
    pub reject_notes: Vec<serde_json::Value>,
}

/// `{ id, name }` reference to a related entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedRef<Id> {
    pub id: Id,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DriverActivity {
    pub total_orders: u64,
    pub total_revenue: f64,
    pub total_distance: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DriverRating {
    pub average: f64,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalletTransactionType {
    Debit,
    Credit,
    Topup,
}

/// One entry in a driver's wallet ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletEntry {
    pub id: DbId,
    pub wallet_id: DbId,
    pub transaction_type: WalletTransactionType,
    pub amount: f64,
    pub balance_before: f64,
    pub balance_after: f64,
    pub reference_id: Option<String>,
    pub description: String,
    pub created_at: Timestamp,
}

/// Paginated wallet ledger plus the latest balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverWallet {
    pub last_balance: f64,
    #[serde(flatten)]
    pub page: Paginated<WalletEntry>,
}

/// Pagination query for the driver wallet ledger.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WalletPageQuery {
    pub page: u32,
    pub limit: u32,
}
