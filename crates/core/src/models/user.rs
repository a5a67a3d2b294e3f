//! Platform users and their per-role profiles.

use serde::{Deserialize, Serialize};

use crate::filter::RowStatus;
use crate::models::admin::AdminStatus;
use crate::models::driver::NamedRef;
use crate::types::{DbId, Timestamp, Uuid};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: DbId,
    pub uuid: Uuid,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDetail {
    pub id: DbId,
    pub uuid: Uuid,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub customer: Option<CustomerProfile>,
    #[serde(default)]
    pub driver: Option<serde_json::Value>,
    #[serde(default)]
    pub merchant: Option<serde_json::Value>,
    #[serde(default)]
    pub admin: Option<AdminProfile>,
    #[serde(default)]
    pub operator: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub id: DbId,
    #[serde(default)]
    pub loyalty_points: i64,
    #[serde(default)]
    pub total_ratings: i64,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminProfile {
    pub id: DbId,
    pub name: String,
    #[serde(default)]
    pub work_area: Vec<NamedRef<String>>,
    pub status: RowStatus<AdminStatus>,
    pub admin_type: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// Query for the admin user search. The backend names its page size
/// `per_page` here.
#[derive(Debug, Clone, Serialize)]
pub struct UserQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub page: u32,
    pub per_page: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_detail_with_admin_profile() {
        let detail: UserDetail = serde_json::from_value(json!({
            "id": 7,
            "uuid": "u-7",
            "username": "rina",
            "email": "rina@example.com",
            "roles": ["admin"],
            "customer": null,
            "driver": null,
            "merchant": null,
            "admin": {
                "id": 3,
                "name": "Rina",
                "work_area": [{ "id": "3171", "name": "Jakarta Selatan" }],
                "status": "approved",
                "admin_type": "regional",
                "created_at": "2026-02-01T00:00:00Z"
            },
            "operator": null
        }))
        .unwrap();
        let admin = detail.admin.unwrap();
        assert_eq!(admin.status.known(), Some(AdminStatus::Approved));
        assert_eq!(admin.work_area[0].name, "Jakarta Selatan");
        assert!(detail.customer.is_none());
    }

    #[test]
    fn user_query_uses_per_page() {
        let query = UserQuery { search: None, page: 2, per_page: 10 };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value, json!({ "page": 2, "per_page": 10 }));
    }
}
