//! Shared helper functions for CLI commands
//!
//! This module contains utility functions that are used across multiple
//! command modules to avoid code duplication.

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input, Password};
use miette::{miette, IntoDiagnostic, Result};

use crate::cli::{AuthOpts, GlobalOpts};
use crate::core::{Config, Session, Store};

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output. Counts chars,
/// not bytes, so multi-byte names survive intact.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let keep: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", keep)
    }
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Parse a user-supplied date in the same shape exports render it
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| miette!("invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_price(s: &str) -> Result<f64> {
    s.parse::<f64>()
        .map_err(|_| miette!("invalid price '{}'", s))
}

/// Treat blank flag values the same as absent ones
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Open the database resolved from --db, config, and the default filename.
/// Refuses to conjure a new database outside of `ait init`.
pub fn open_store(global: &GlobalOpts, config: &Config) -> Result<Store> {
    let path = config.database_path(global.db.as_deref());
    if !path.exists() {
        return Err(miette!(
            "No database found at '{}'. Run 'ait init' first.",
            path.display()
        ));
    }
    Store::open(&path).map_err(|e| miette!("{}", e))
}

/// Resolve credentials from flags/env, prompting for whatever is missing,
/// and log in.
pub fn authenticate<'a>(
    store: &'a Store,
    auth: &AuthOpts,
    config: &Config,
) -> Result<Session<'a>> {
    let username = match auth.username {
        Some(ref u) => u.clone(),
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Username")
            .default(config.username())
            .interact_text()
            .into_diagnostic()?,
    };

    let password = match auth.password {
        Some(ref p) => p.clone(),
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()
            .into_diagnostic()?,
    };

    store
        .login(&username, &password)
        .map_err(|e| miette!("{}", e))
}
