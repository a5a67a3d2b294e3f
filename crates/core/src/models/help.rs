//! Help centre categories and FAQs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpCategory {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub id: DbId,
    pub category_id: DbId,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub category_slug: Option<String>,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub display_order: Option<i32>,
    #[serde(default)]
    pub is_active: Option<bool>,
    /// Search score, present only on search results.
    #[serde(default)]
    pub relevance: Option<f64>,
}

/// Create/update body for a help category.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct HelpCategoryInput {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub slug: String,
    pub icon: String,
    pub description: String,
    pub display_order: i32,
    pub is_active: bool,
}

/// Create/update body for a FAQ entry.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct FaqInput {
    pub category_id: DbId,
    #[validate(length(min = 1))]
    pub question: String,
    #[validate(length(min = 1))]
    pub answer: String,
    pub display_order: i32,
    pub is_active: bool,
}

/// Query for the FAQ list of one category.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FaqQuery {
    pub category_id: DbId,
}

/// Query for full-text help search.
#[derive(Debug, Clone, Serialize)]
pub struct HelpSearchQuery {
    pub q: String,
}
