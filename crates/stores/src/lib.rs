//! State containers for the admin console.
//!
//! Each store owns plain state plus async operations that call the backend
//! through [`rideops_client`]. Setters never fetch; callers follow them
//! with an explicit `refresh`/`fetch`. [`AppContext`](context::AppContext)
//! builds one of each.

pub mod admin;
pub mod auth;
pub mod context;
pub mod device;
pub mod driver;
pub mod error;
pub mod forbidden;
pub mod help;
pub mod list;
pub mod merchant;
pub mod registration;
pub mod tariff;
pub mod ui;
pub mod user;
pub mod wallet;

pub use context::{AppContext, DashboardOverview};
pub use error::StoreError;
pub use list::ListStore;
