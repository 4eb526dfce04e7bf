//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.
//! Rules that depend on the current date or on other fields are left to the
//! domain layer.

use crate::domain::{EmployeeId, is_valid_email};
use chrono::{DateTime, NaiveDate, Utc};

/// Parse an employee id, accepting an optional leading `#`.
pub fn parse_employee_id(s: &str) -> Result<EmployeeId, String> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);

    match digits.parse::<u64>() {
        Ok(0) => Err("Employee ID must be at least 1".to_string()),
        Ok(id) => Ok(EmployeeId::new(id)),
        Err(_) => Err(format!(
            "Invalid employee ID: '{s}'. Expected a positive number (e.g., 42 or #42)"
        )),
    }
}

/// Reject blank text, returning it trimmed.
pub fn validate_non_blank(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("Value cannot be empty".to_string());
    }
    Ok(trimmed.to_string())
}

/// Validate an email address shape (`local@domain.tld`).
pub fn validate_email(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if !is_valid_email(trimmed) {
        return Err(format!(
            "Invalid email address: '{trimmed}'. Expected the form name@domain.tld"
        ));
    }
    Ok(trimmed.to_string())
}

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{}': {e}. Expected YYYY-MM-DD", s.trim()))
}

/// Parse an RFC 3339 timestamp, or a bare `YYYY-MM-DD` taken as midnight UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, String> {
    let s = s.trim();

    if let Ok(at) = DateTime::parse_from_rfc3339(s) {
        return Ok(at.with_timezone(&Utc));
    }

    parse_date(s)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            format!(
                "Invalid timestamp '{s}'. Expected RFC 3339 (2024-01-15T10:30:00Z) or YYYY-MM-DD"
            )
        })
}

/// Parse a salary, which must be a whole amount greater than zero.
pub fn parse_salary(s: &str) -> Result<u64, String> {
    let trimmed = s.trim().replace('_', "");
    let groups: Vec<&str> = trimmed.split('.').collect();

    // Dots are only accepted as thousands separators
    let well_grouped = groups.len() == 1
        || (matches!(groups[0].len(), 1..=3) && groups[1..].iter().all(|g| g.len() == 3));
    let cleaned = if well_grouped { groups.concat() } else { String::new() };

    match cleaned.parse::<u64>() {
        Ok(0) => Err("Salary must be greater than 0".to_string()),
        Ok(amount) => Ok(amount),
        Err(_) => Err(format!(
            "Invalid salary: '{}'. Expected a whole number (e.g., 3500000 or 3.500.000)",
            s.trim()
        )),
    }
}
