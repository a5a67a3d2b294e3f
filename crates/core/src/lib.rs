//! Domain types and pure rules for the ride-hailing admin console.
//!
//! Nothing in this crate performs I/O; the HTTP layer lives in
//! `rideops-client` and stateful views in `rideops-stores`.

pub mod envelope;
pub mod error;
pub mod filter;
pub mod i18n;
pub mod jwt;
pub mod models;
pub mod registration;
pub mod types;
