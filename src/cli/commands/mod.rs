//! CLI command implementations

pub mod asset;
pub mod completions;
pub mod export;
pub mod init;
pub mod item;
pub mod user;
