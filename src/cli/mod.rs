//! Command implementations

pub mod delete;
pub mod list;
pub mod manage;
pub mod new;

mod render;

use anyhow::{bail, Result};
use chrono::NaiveDate;

use crate::store::DATE_FORMAT;

/// Validate a `YYYY-MM-DD` date and return it in canonical form
pub fn parse_date(input: &str) -> Result<String> {
    match NaiveDate::parse_from_str(input.trim(), DATE_FORMAT) {
        Ok(date) => Ok(date.format(DATE_FORMAT).to_string()),
        Err(_) => bail!("Invalid date format: '{}' (expected YYYY-MM-DD)", input.trim()),
    }
}
