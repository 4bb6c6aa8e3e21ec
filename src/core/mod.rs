//! Core module - storage, authentication, and configuration

pub mod auth;
pub mod config;
pub mod store;

pub use auth::{AuthError, Session};
pub use config::Config;
pub use store::{Store, StoreError};
