//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Success/Active:  green   (active status, completed actions)
//!   - Warning/Pending: yellow  (pending status, prompts)
//!   - Error/Inactive:  red     (inactive status, failures)
//!   - Info/Reference:  cyan    (employee IDs, current page)
//!   - Muted:           dimmed  (field labels, other page numbers)
//!   - Emphasis:        bold    (table headers, names)

use crate::domain::{STATUS_ACTIVE, STATUS_INACTIVE, STATUS_PENDING};
use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "warning" color (yellow) to text.
pub fn warning(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

/// Apply semantic "info" color (cyan) to text.
pub fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Color a status by its meaning; unknown statuses are left plain.
pub(crate) fn colorize_status(status: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return status.to_string();
    }
    match status {
        STATUS_ACTIVE => status.green().to_string(),
        STATUS_INACTIVE => status.red().to_string(),
        STATUS_PENDING => status.yellow().to_string(),
        _ => status.to_string(),
    }
}

/// Apply dimmed style to text (for labels/field names).
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Apply bold style to text (for headers).
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}
