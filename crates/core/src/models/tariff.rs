//! Per-regency service tariffs, incentives, and price previews.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::envelope::Paginated;
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TariffProvince {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TariffRegency {
    pub id: String,
    pub name: String,
    pub province: TariffProvince,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tariff {
    pub id: DbId,
    pub service_id: DbId,
    pub first_km: f64,
    pub first_km_price: f64,
    pub next_km_price: f64,
    pub driver_radius_km: f64,
    pub commission_percent: f64,
    pub max_distance_km: f64,
    #[serde(default)]
    pub incentive_fee: f64,
    #[serde(default)]
    pub has_incentive: bool,
    /// `None` for the platform-wide default tariff.
    pub regency: Option<TariffRegency>,
    pub incentive_expires_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Tariff list payload: some endpoints page, others return a flat array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TariffList {
    Paged(Paginated<Tariff>),
    Flat(Vec<Tariff>),
}

impl TariffList {
    /// Normalise to a page. A flat array becomes a single page holding
    /// every item.
    pub fn into_page(self, limit: u32) -> Paginated<Tariff> {
        match self {
            Self::Paged(page) => page,
            Self::Flat(items) => Paginated {
                total_items: items.len() as u64,
                total_pages: 1,
                current_page: 1,
                items_per_page: limit,
                items,
            },
        }
    }

    pub fn into_items(self) -> Vec<Tariff> {
        match self {
            Self::Paged(page) => page.items,
            Self::Flat(items) => items,
        }
    }
}

/// Filters for the admin tariff list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TariffQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regency_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegencyQuery {
    pub regency_id: String,
}

/// Create-or-update body for one tariff.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct TariffForm {
    pub service_id: DbId,
    #[validate(length(min = 1))]
    pub regency_id: String,
    #[validate(range(min = 0.0))]
    pub first_km: f64,
    #[validate(range(min = 0.0))]
    pub first_km_price: f64,
    #[validate(range(min = 0.0))]
    pub next_km_price: f64,
    #[validate(range(min = 0.0))]
    pub driver_radius_km: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub commission_percent: f64,
    #[validate(range(min = 0.0))]
    pub max_distance_km: f64,
}

/// Time-limited incentive fee on top of a tariff.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct IncentiveRequest {
    pub service_id: DbId,
    #[validate(length(min = 1))]
    pub regency_id: String,
    #[validate(range(min = 0.0))]
    pub amount: f64,
    #[validate(range(min = 1))]
    pub duration_hours: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PricingPreviewQuery {
    pub regency_id: String,
    pub distance_km: f64,
    pub service_id: DbId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingPreview {
    pub service_id: DbId,
    pub regency_id: String,
    pub distance_km: f64,
    pub base_price: f64,
    pub commission_fee: f64,
    pub incentive_fee: f64,
    pub incentive_expires_at: Option<Timestamp>,
    pub total_price: f64,
    pub tariff_used: String,
}
