//! Administrative regions: province → regency → district → village.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Province {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegencyOption {
    pub id: String,
    pub province_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct District {
    pub id: String,
    #[serde(default)]
    pub regency_id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Village {
    pub id: String,
    #[serde(default)]
    pub district_id: Option<String>,
    pub name: String,
}
