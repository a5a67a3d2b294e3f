/// Numeric primary keys as issued by the backend.
pub type DbId = i64;

/// Opaque string identifiers (`uuid` fields, region codes, token ids).
pub type Uuid = String;

/// Timestamps are passed through as the backend's ISO-8601 strings.
pub type Timestamp = String;

/// Default page size used by every paginated list view.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// First page number (pages are 1-based).
pub const FIRST_PAGE: u32 = 1;
