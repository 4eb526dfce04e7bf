//! Error types for roster operations.

use crate::domain::EmployeeId;
use std::io;
use thiserror::Error;

/// The error type for roster operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No employee with the given id exists.
    #[error("Employee not found: {0}")]
    NotFound(EmployeeId),

    /// Input rejected before it reached the record collection.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Reasons an employee record, page request or sort field is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is missing or blank.
    #[error("{0} is required")]
    Required(&'static str),

    /// Email is not of the form `local@domain.tld`.
    #[error("invalid email address: '{0}'")]
    InvalidEmail(String),

    /// Birth date lies after today.
    #[error("birth date cannot be in the future: {0}")]
    BirthDateInFuture(chrono::NaiveDate),

    /// Basic salary must be greater than zero.
    #[error("basic salary must be greater than 0")]
    NonPositiveSalary,

    /// Page numbers start at 1.
    #[error("page must be at least 1, got {0}")]
    InvalidPage(usize),

    /// Page size must be positive.
    #[error("page size must be at least 1, got {0}")]
    InvalidPageSize(usize),

    /// Sort field name is not one of the sortable fields.
    #[error("unknown sort field '{0}'")]
    UnknownSortField(String),

    /// Every id up to `u64::MAX` has been handed out.
    #[error("no employee ids left to assign")]
    IdSpaceExhausted,

    /// Page size is not one of the configured choices.
    #[error("page size {size} is not offered (choose one of {options:?})")]
    PageSizeNotOffered {
        /// Requested page size
        size: usize,
        /// Page sizes the configuration allows
        options: Vec<usize>,
    },

    /// Sort order is neither ascending nor descending.
    #[error("unknown sort order '{0}' (expected asc or desc)")]
    UnknownSortOrder(String),
}

/// A specialized Result type for roster operations.
pub type Result<T> = std::result::Result<T, Error>;
