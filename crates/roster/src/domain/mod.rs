//! Domain types for employee records.
//!
//! This module contains the record types held by the store and the
//! validation rules applied to them before they enter the collection.

pub mod groups;
pub mod query;

pub use query::{PageRequest, PageResult, SearchCriteria, SortField, SortOrder};

use crate::error::ValidationError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status label for employees currently on staff.
pub const STATUS_ACTIVE: &str = "Active";

/// Status label for employees no longer on staff.
pub const STATUS_INACTIVE: &str = "Inactive";

/// Status label for employees awaiting onboarding.
pub const STATUS_PENDING: &str = "Pending";

/// Well-known status labels, in display order.
///
/// The status field is an open set; these are only the values offered by
/// default and produced by the sample data generator.
pub const KNOWN_STATUSES: [&str; 3] = [STATUS_ACTIVE, STATUS_INACTIVE, STATUS_PENDING];

/// Status filter value meaning "do not filter by status".
pub const ALL_STATUS: &str = "All Status";

/// Unique identifier for an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u64);

impl EmployeeId {
    /// Create a new employee ID
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric value
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EmployeeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// An employee record as held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Store-assigned identifier
    pub id: EmployeeId,

    /// Login name
    pub username: String,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Contact email
    pub email: String,

    /// Date of birth
    pub birth_date: NaiveDate,

    /// Monthly basic salary in whole currency units
    pub basic_salary: u64,

    /// Status label (see [`KNOWN_STATUSES`])
    pub status: String,

    /// Group label, usually one of the reference groups
    pub group: String,

    /// Free-form secondary date
    pub description: DateTime<Utc>,
}

impl Employee {
    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Build a stored record from creation data and an assigned id.
    pub(crate) fn from_new(id: EmployeeId, new: NewEmployee) -> Self {
        Self {
            id,
            username: new.username,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            birth_date: new.birth_date,
            basic_salary: new.basic_salary,
            status: new.status,
            group: new.group,
            description: new.description,
        }
    }

    /// Check the record against the same rules applied on creation.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&Fields::from(self), today())
    }
}

impl AsRef<Employee> for Employee {
    fn as_ref(&self) -> &Employee {
        self
    }
}

/// Data for creating a new employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    /// Login name
    pub username: String,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Contact email
    pub email: String,

    /// Date of birth
    pub birth_date: NaiveDate,

    /// Monthly basic salary
    pub basic_salary: u64,

    /// Status label
    pub status: String,

    /// Group label
    pub group: String,

    /// Free-form secondary date
    pub description: DateTime<Utc>,
}

impl NewEmployee {
    /// Validate the creation data.
    ///
    /// Rules: username, names, email, status and group must be non-blank;
    /// email must look like `local@domain.tld`; birth date must not be in
    /// the future; salary must be greater than zero.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_as_of(today())
    }

    /// Validate against an explicit "today" (used by tests and seeding).
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn validate_as_of(&self, today: NaiveDate) -> Result<(), ValidationError> {
        validate_fields(&Fields::from(self), today)
    }
}

/// Data for updating an existing employee.
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    /// New username (if updating)
    pub username: Option<String>,

    /// New first name (if updating)
    pub first_name: Option<String>,

    /// New last name (if updating)
    pub last_name: Option<String>,

    /// New email (if updating)
    pub email: Option<String>,

    /// New birth date (if updating)
    pub birth_date: Option<NaiveDate>,

    /// New basic salary (if updating)
    pub basic_salary: Option<u64>,

    /// New status (if updating)
    pub status: Option<String>,

    /// New group (if updating)
    pub group: Option<String>,

    /// New secondary date (if updating)
    pub description: Option<DateTime<Utc>>,
}

impl EmployeeUpdate {
    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrite every field present in the patch.
    pub fn apply_to(self, employee: &mut Employee) {
        if let Some(username) = self.username {
            employee.username = username;
        }
        if let Some(first_name) = self.first_name {
            employee.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            employee.last_name = last_name;
        }
        if let Some(email) = self.email {
            employee.email = email;
        }
        if let Some(birth_date) = self.birth_date {
            employee.birth_date = birth_date;
        }
        if let Some(basic_salary) = self.basic_salary {
            employee.basic_salary = basic_salary;
        }
        if let Some(status) = self.status {
            employee.status = status;
        }
        if let Some(group) = self.group {
            employee.group = group;
        }
        if let Some(description) = self.description {
            employee.description = description;
        }
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Borrowed view over the validated fields of either record type.
struct Fields<'a> {
    username: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    birth_date: NaiveDate,
    basic_salary: u64,
    status: &'a str,
    group: &'a str,
}

impl<'a> From<&'a Employee> for Fields<'a> {
    fn from(e: &'a Employee) -> Self {
        Self {
            username: &e.username,
            first_name: &e.first_name,
            last_name: &e.last_name,
            email: &e.email,
            birth_date: e.birth_date,
            basic_salary: e.basic_salary,
            status: &e.status,
            group: &e.group,
        }
    }
}

impl<'a> From<&'a NewEmployee> for Fields<'a> {
    fn from(e: &'a NewEmployee) -> Self {
        Self {
            username: &e.username,
            first_name: &e.first_name,
            last_name: &e.last_name,
            email: &e.email,
            birth_date: e.birth_date,
            basic_salary: e.basic_salary,
            status: &e.status,
            group: &e.group,
        }
    }
}

fn validate_fields(fields: &Fields<'_>, today: NaiveDate) -> Result<(), ValidationError> {
    require(fields.username, "username")?;
    require(fields.first_name, "first name")?;
    require(fields.last_name, "last name")?;
    require(fields.email, "email")?;
    if !is_valid_email(fields.email.trim()) {
        return Err(ValidationError::InvalidEmail(fields.email.to_string()));
    }
    if fields.birth_date > today {
        return Err(ValidationError::BirthDateInFuture(fields.birth_date));
    }
    if fields.basic_salary == 0 {
        return Err(ValidationError::NonPositiveSalary);
    }
    require(fields.status, "status")?;
    require(fields.group, "group")?;
    Ok(())
}

fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

/// Check the `local@domain.tld` shape.
///
/// Exactly one `@`, no whitespace, non-empty local part, and a domain with
/// at least one interior dot.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let last = domain.len().saturating_sub(1);
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < last)
}
