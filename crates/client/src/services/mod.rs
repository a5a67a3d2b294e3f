//! Typed wrappers over backend endpoints, one module per resource.
//!
//! Every function issues exactly one request (step 5 of merchant
//! registration is the caller's loop) and returns the decoded body.
//! Nothing here catches errors.

pub mod account;
pub mod admin;
pub mod auth;
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
