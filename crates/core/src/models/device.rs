//! Signed-in device sessions.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// One active login session, keyed by the access token's `jti`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub jti: String,
    #[serde(default)]
    pub device_name: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub last_active_at: Option<Timestamp>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    /// Set locally: this session belongs to the token in use.
    #[serde(default, skip_deserializing)]
    pub is_current: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FcmTokenUpdate {
    pub fcm_token: String,
}
