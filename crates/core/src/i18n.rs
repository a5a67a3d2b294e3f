//! Console languages and translation lookup.
//!
//! Tables are embedded at compile time and addressed with dot paths such
//! as `"sidebar.dashboard"`. A path that does not resolve to a string
//! translates to itself.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

const EN_TABLE: &str = include_str!("../i18n/en.json");
const ID_TABLE: &str = include_str!("../i18n/id.json");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Id,
}

impl Language {
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s.trim() {
            "en" => Ok(Self::En),
            "id" => Ok(Self::Id),
            other => Err(CoreError::Validation(format!(
                "Unsupported language '{other}'. Must be one of: en, id"
            ))),
        }
    }

    /// Value for the `Accept-Language` header and for persistence.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Id => "id",
        }
    }

    fn table(self) -> &'static serde_json::Value {
        static EN: OnceLock<serde_json::Value> = OnceLock::new();
        static ID: OnceLock<serde_json::Value> = OnceLock::new();
        let (cell, raw) = match self {
            Self::En => (&EN, EN_TABLE),
            Self::Id => (&ID, ID_TABLE),
        };
        cell.get_or_init(|| serde_json::from_str(raw).unwrap_or(serde_json::Value::Null))
    }
}

/// Look up `path` in the table for `language`, falling back to `path`.
pub fn translate(language: Language, path: &str) -> String {
    let mut current = language.table();
    for key in path.split('.') {
        match current.get(key) {
            Some(next) => current = next,
            None => return path.to_string(),
        }
    }
    current
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_nested_path() {
        assert_eq!(translate(Language::En, "sidebar.dashboard"), "Dashboard");
        assert_eq!(translate(Language::Id, "sidebar.dashboard"), "Dasbor");
    }

    #[test]
    fn missing_path_falls_back_to_key() {
        assert_eq!(translate(Language::En, "sidebar.nope"), "sidebar.nope");
        assert_eq!(translate(Language::Id, "nope"), "nope");
    }

    #[test]
    fn non_leaf_path_falls_back_to_key() {
        assert_eq!(translate(Language::En, "sidebar"), "sidebar");
    }

    #[test]
    fn both_tables_parse() {
        assert!(Language::En.table().is_object());
        assert!(Language::Id.table().is_object());
    }

    #[test]
    fn language_parse() {
        assert_eq!(Language::parse("id").unwrap(), Language::Id);
        assert!(Language::parse("fr").is_err());
        assert_eq!(Language::default().as_str(), "en");
    }
}
