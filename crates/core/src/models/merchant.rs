//! Merchant accounts and the merchant registration wire types.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::filter::{FilterStatus, RowStatus};
use crate::types::{DbId, Uuid};

/// Lifecycle status of a merchant as reported by the admin list.
///
/// Merchants still mid-registration report the step they last completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MerchantStatus {
    Online,
    Offline,
    Approved,
    Rejected,
    Submitted,
    Pending,
    Step1,
    Step2,
    Step3,
    Step4,
    Step5,
}

impl FilterStatus for MerchantStatus {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Submitted => "submitted",
            Self::Pending => "pending",
            Self::Step1 => "step1",
            Self::Step2 => "step2",
            Self::Step3 => "step3",
            Self::Step4 => "step4",
            Self::Step5 => "step5",
        }
    }

    fn parse_value(s: &str) -> Option<Self> {
        match s {
            "online" => Some(Self::Online),
            "offline" => Some(Self::Offline),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            "submitted" => Some(Self::Submitted),
            "pending" => Some(Self::Pending),
            "step1" => Some(Self::Step1),
            "step2" => Some(Self::Step2),
            "step3" => Some(Self::Step3),
            "step4" => Some(Self::Step4),
            "step5" => Some(Self::Step5),
            _ => None,
        }
    }
}

/// Row in the admin merchant list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Merchant {
    pub uuid: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub store_name: String,
    pub category_id: Option<DbId>,
    pub category_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: RowStatus<MerchantStatus>,
    pub reject_notes: Option<Vec<String>>,
    pub avg_rating: Option<f64>,
}

/// Full merchant record from the admin detail endpoint.
///
/// Only the fields the console reads are typed; the rest is kept verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchantDetail {
    pub uuid: Uuid,
    #[serde(default)]
    pub store_name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub reject_notes: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Query for the nearby-merchant lookup.
#[derive(Debug, Clone, Serialize)]
pub struct NearbyMerchantQuery {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyMerchant {
    pub uuid: Uuid,
    pub store_name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub distance_km: Option<f64>,
}

// ---------------------------------------------------------------------------
// Registration wire types
// ---------------------------------------------------------------------------

/// Opening hours for one weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationHourItem {
    pub day: String,
    pub open_time: String,
    pub close_time: String,
    #[serde(default = "default_true")]
    pub is_open: bool,
}

fn default_true() -> bool {
    true
}

/// Step 1 body: creates the merchant and returns its uuid.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone_number: String,
    #[validate(length(min = 1))]
    pub work_area_id: String,
}

/// Merchant identity echoed by the step 1 endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisteredMerchant {
    #[serde(default)]
    pub uuid: Option<Uuid>,
}

/// `{ latitude, longitude }` pair; the backend rejects nulls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Step 2 body.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileRequest {
    pub merchant_uuid: Uuid,
    pub merchant_name: String,
    pub category_id: DbId,
    pub address: String,
    pub coordinate: Coordinate,
    pub contact_phone: String,
    pub operation_hours: Vec<OperationHourItem>,
}

/// Step 3 body; image fields carry uploaded file URLs.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentsRequest {
    pub merchant_uuid: Uuid,
    pub id_card_number: String,
    pub id_card_image: String,
    pub selfie_image: String,
    pub store_front_image: String,
    pub store_inside_image: String,
}

/// Step 4 body.
#[derive(Debug, Clone, Serialize)]
pub struct BankAccountRequest {
    pub merchant_uuid: Uuid,
    pub bank_code: String,
    pub account_number: String,
    pub account_holder_name: String,
}

/// Step 5 body, posted once per menu item.
#[derive(Debug, Clone, Serialize)]
pub struct MenuItemRequest {
    pub merchant_uuid: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub is_available: bool,
    pub image_url: String,
}

/// Step 6 body.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitOnboardingRequest {
    pub merchant_uuid: Uuid,
    pub declaration_agreement: bool,
    /// `YYYY-MM-DD`.
    pub submit_date: String,
}

/// Partially completed registration as stored by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaitingProfile {
    #[serde(default)]
    pub uuid: Option<Uuid>,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub category_id: Option<DbId>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub work_area_id: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub operation_hours: Option<Vec<OperationHourItem>>,
    #[serde(default)]
    pub id_card_number: Option<String>,
    #[serde(default)]
    pub id_card_image_url: Option<String>,
    #[serde(default)]
    pub selfie_image_url: Option<String>,
    #[serde(default)]
    pub store_front_image_url: Option<String>,
    #[serde(default)]
    pub store_inside_image_url: Option<String>,
    #[serde(default)]
    pub bank_code: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub account_holder_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
