//! HTTP access to the ride-hailing backend.
//!
//! [`ApiClient`](http::ApiClient) adds auth and locale headers to every
//! request and turns 401/403 responses into [`AppEvent`](events::AppEvent)s.
//! One module under [`services`] per backend resource maps each endpoint to
//! a typed async function.

pub mod config;
pub mod error;
pub mod events;
pub mod http;
pub mod services;
pub mod session;
pub mod storage;

pub use config::ClientConfig;
pub use error::ApiError;
pub use events::{AppEvent, EventBus};
pub use http::ApiClient;
pub use session::Session;
