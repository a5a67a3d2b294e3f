//! Resource models mirroring the backend's JSON payloads.

pub mod account;
pub mod admin;
pub mod device;
pub mod driver;
pub mod file;
pub mod help;
pub mod merchant;
pub mod notification;
pub mod payment_method;
pub mod region;
pub mod service;
pub mod tariff;
pub mod user;
pub mod wallet;

/// Decision notes sent with approve/reject calls.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct DecisionNotes {
    pub notes: Vec<String>,
}

impl DecisionNotes {
    pub fn new(notes: Vec<String>) -> Self {
        Self { notes }
    }
}

/// Body for endpoints toggling an `is_available` flag.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct AvailabilityUpdate {
    pub is_available: bool,
}
