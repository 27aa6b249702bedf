//! Input plumbing: JSON files, piped stdin, and shared flag parsing.

use chrono::NaiveDate;
use heloc_core::types::DrawEvent;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::str::FromStr;

/// Read a JSON file and deserialise into a typed struct.
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let contents =
        fs::read_to_string(path).map_err(|e| format!("Failed to read '{}': {}", path, e))?;
    let value: T = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse '{}': {}", path, e))?;
    Ok(value)
}

/// Attempt to read JSON from stdin if data is being piped.
/// Returns None if stdin is a TTY (interactive).
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(trimmed)?;
    Ok(Some(value))
}

/// Parse a `--start-date YYYY-MM-DD` flag.
pub fn parse_date(raw: &str) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}': expected YYYY-MM-DD", raw).into())
}

/// Parse one `--draw MONTH:AMOUNT` flag into a typed event.
///
/// Months are 1-based as the user sees them in the schedule; a
/// malformed pair is an error, never an empty draw list.
pub fn parse_draw(raw: &str) -> Result<DrawEvent, Box<dyn std::error::Error>> {
    let (month_raw, amount_raw) = raw
        .split_once(':')
        .ok_or_else(|| format!("Invalid draw '{}': expected MONTH:AMOUNT", raw))?;
    let month: u32 = month_raw
        .trim()
        .parse()
        .map_err(|_| format!("Invalid draw month '{}': expected a positive integer", month_raw))?;
    if month == 0 {
        return Err(format!("Invalid draw '{}': months are numbered from 1", raw).into());
    }
    let amount = Decimal::from_str(amount_raw.trim())
        .map_err(|_| format!("Invalid draw amount '{}': expected a number", amount_raw))?;
    Ok(DrawEvent {
        period_index: month - 1,
        amount,
    })
}

/// Parse every `--draw` flag, surfacing the first failure.
pub fn parse_draws(raw: &[String]) -> Result<Vec<DrawEvent>, Box<dyn std::error::Error>> {
    raw.iter().map(|d| parse_draw(d)).collect()
}
