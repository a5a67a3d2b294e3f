//! List filter normalisation.
//!
//! List views expose a status dropdown whose first entry is the sentinel
//! `"all"`; an empty value means the same thing. Neither may reach the
//! backend as a query parameter.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;
use crate::types::{DEFAULT_PAGE_SIZE, FIRST_PAGE};

/// UI value meaning "no status filter applied".
pub const STATUS_ALL: &str = "all";

/// A closed set of status values a list can be filtered by.
pub trait FilterStatus: Copy + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    /// Wire value sent as the `status` query parameter.
    fn as_str(&self) -> &'static str;

    /// Parse a wire value, returning `None` for unknown strings.
    fn parse_value(s: &str) -> Option<Self>;
}

/// Status filter for a list view: either everything or one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        Self::All
    }
}

impl<S: FilterStatus> StatusFilter<S> {
    /// Parse a UI value. `"all"` and `""` both mean [`StatusFilter::All`].
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if raw.is_empty() || raw == STATUS_ALL {
            return Ok(Self::All);
        }
        S::parse_value(raw).map(Self::Only).ok_or_else(|| {
            CoreError::Validation(format!("Unknown status filter '{raw}'"))
        })
    }

    /// The `status` query parameter, absent for [`StatusFilter::All`].
    pub fn as_query(&self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Only(status) => Some(status.as_str()),
        }
    }

    /// UI value, with `"all"` for the sentinel.
    pub fn as_str(&self) -> &'static str {
        self.as_query().unwrap_or(STATUS_ALL)
    }
}

impl<S> From<S> for StatusFilter<S> {
    fn from(status: S) -> Self {
        Self::Only(status)
    }
}

/// Status as reported on a list row.
///
/// Rows keep statuses outside the known set verbatim so one unexpected
/// value does not fail the whole page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowStatus<S> {
    Known(S),
    Other(String),
}

impl<S: FilterStatus> RowStatus<S> {
    pub fn parse(raw: &str) -> Self {
        S::parse_value(raw)
            .map(Self::Known)
            .unwrap_or_else(|| Self::Other(raw.to_string()))
    }

    pub fn known(&self) -> Option<S> {
        match self {
            Self::Known(status) => Some(*status),
            Self::Other(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(status) => status.as_str(),
            Self::Other(raw) => raw,
        }
    }
}

impl<S: FilterStatus> From<S> for RowStatus<S> {
    fn from(status: S) -> Self {
        Self::Known(status)
    }
}

impl<S: FilterStatus> Serialize for RowStatus<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, S: FilterStatus> Deserialize<'de> for RowStatus<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Status type for lists that have no status filter at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoStatus {}

impl FilterStatus for NoStatus {
    fn as_str(&self) -> &'static str {
        match *self {}
    }

    fn parse_value(_s: &str) -> Option<Self> {
        None
    }
}

/// Normalise a search box value: an empty string means no search.
pub fn normalize_search(search: &str) -> Option<&str> {
    if search.is_empty() {
        None
    } else {
        Some(search)
    }
}

/// Query string for paginated list endpoints.
///
/// Absent filters are skipped entirely so the backend never sees
/// `status=all` or `search=`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl ListQuery {
    /// Build a query from raw filter state, applying sentinel normalisation.
    pub fn new<S: FilterStatus>(
        status: &StatusFilter<S>,
        search: &str,
        page: u32,
        limit: u32,
    ) -> Self {
        Self {
            status: status.as_query().map(str::to_string),
            search: normalize_search(search).map(str::to_string),
            page,
            limit,
        }
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            status: None,
            search: None,
            page: FIRST_PAGE,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::admin::AdminStatus;
    use assert_matches::assert_matches;

    #[test]
    fn all_sentinel_parses_to_all() {
        assert_eq!(
            StatusFilter::<AdminStatus>::parse("all").unwrap(),
            StatusFilter::All
        );
    }

    #[test]
    fn empty_string_parses_to_all() {
        assert_eq!(
            StatusFilter::<AdminStatus>::parse("").unwrap(),
            StatusFilter::All
        );
    }

    #[test]
    fn known_status_parses_to_only() {
        assert_eq!(
            StatusFilter::<AdminStatus>::parse("pending").unwrap(),
            StatusFilter::Only(AdminStatus::Pending)
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_matches!(
            StatusFilter::<AdminStatus>::parse("archived"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn all_has_no_query_value() {
        let filter: StatusFilter<AdminStatus> = StatusFilter::All;
        assert_eq!(filter.as_query(), None);
        assert_eq!(filter.as_str(), "all");
    }

    #[test]
    fn row_status_keeps_unknown_values() {
        let known: RowStatus<AdminStatus> = serde_json::from_value(serde_json::json!("pending")).unwrap();
        assert_eq!(known, RowStatus::Known(AdminStatus::Pending));
        assert_eq!(known.known(), Some(AdminStatus::Pending));

        let other: RowStatus<AdminStatus> = serde_json::from_value(serde_json::json!("suspended")).unwrap();
        assert_eq!(other, RowStatus::Other("suspended".to_string()));
        assert_eq!(other.known(), None);
        assert_eq!(serde_json::to_value(&other).unwrap(), "suspended");
    }

    #[test]
    fn search_normalisation() {
        assert_eq!(normalize_search(""), None);
        assert_eq!(normalize_search("budi"), Some("budi"));
    }

    #[test]
    fn list_query_skips_absent_filters() {
        let query = ListQuery::new(&StatusFilter::<AdminStatus>::All, "", 2, 25);
        let encoded = serde_json::to_value(&query).unwrap();
        let obj = encoded.as_object().unwrap();
        assert!(!obj.contains_key("status"));
        assert!(!obj.contains_key("search"));
        assert_eq!(obj["page"], 2);
        assert_eq!(obj["limit"], 25);
    }

    #[test]
    fn list_query_carries_present_filters() {
        let query = ListQuery::new(
            &StatusFilter::Only(AdminStatus::Rejected),
            "andi",
            1,
            10,
        );
        assert_eq!(query.status.as_deref(), Some("rejected"));
        assert_eq!(query.search.as_deref(), Some("andi"));
    }
}
