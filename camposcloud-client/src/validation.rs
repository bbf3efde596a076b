//! Pre-flight input checks. Every check here runs before a request is built.

use crate::error::{ClientError, Result};
use crate::params::MemorySize;
use serde_json::Number;

pub(crate) fn app_id(id: &str) -> Result<()> {
    non_empty(id, "appId", "Application ID (appId) must be a valid string.")
}

pub(crate) fn team_id(id: &str) -> Result<()> {
    non_empty(id, "teamId", "Team ID (teamId) must be a valid string.")
}

pub(crate) fn non_empty(value: &str, field: &'static str, message: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ClientError::validation(field, message));
    }
    Ok(())
}

/// Parse a memory size into a JSON number.
///
/// Zero is rejected along with non-numeric input: the platform treats a
/// zero allocation as "not provided".
pub(crate) fn memory(memory: &MemorySize) -> Result<Number> {
    let invalid = || {
        ClientError::validation("memoryMB", "Memory size (memoryMB) must be a valid number.")
    };

    let raw = memory.as_str().trim();

    if let Ok(value) = raw.parse::<u64>() {
        return match value {
            0 => Err(invalid()),
            value => Ok(Number::from(value)),
        };
    }
    if let Ok(value) = raw.parse::<i64>() {
        return match value {
            0 => Err(invalid()),
            value => Ok(Number::from(value)),
        };
    }

    match raw.parse::<f64>() {
        Ok(value) if value != 0.0 => Number::from_f64(value).ok_or_else(invalid),
        _ => Err(invalid()),
    }
}
