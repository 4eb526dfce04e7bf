//! Search criteria, paging and sorting types.

use super::{ALL_STATUS, Employee};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Maximum number of page links in a navigation window.
pub const DEFAULT_PAGE_WINDOW: usize = 5;

/// Filters applied to the record collection.
///
/// All criteria are optional and combine with AND. `None` and blank
/// strings impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    /// Case-insensitive substring of "first last"
    pub full_name: Option<String>,

    /// Case-insensitive substring of the email
    pub email: Option<String>,

    /// Case-insensitive substring of the group
    pub group: Option<String>,

    /// Case-insensitive exact status; [`ALL_STATUS`] disables the filter
    pub status: Option<String>,
}

impl SearchCriteria {
    /// Criteria that match every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// The status criterion if it actually constrains anything.
    pub(crate) fn effective_status(&self) -> Option<&str> {
        self.status
            .as_deref()
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case(ALL_STATUS))
    }
}

/// Field to sort a page by.
///
/// Each variant maps to one typed accessor, so unknown names are rejected
/// when parsed instead of comparing missing values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Employee id (numeric)
    Id,
    /// Username (lexicographic)
    Username,
    /// First name (lexicographic)
    FirstName,
    /// Last name (lexicographic)
    LastName,
    /// Email (lexicographic)
    Email,
    /// Birth date (chronological)
    BirthDate,
    /// Basic salary (numeric)
    BasicSalary,
    /// Status label (lexicographic)
    Status,
    /// Group label (lexicographic)
    Group,
    /// Secondary date (chronological)
    Description,
}

impl SortField {
    /// Every sortable field, in column order.
    pub const ALL: [SortField; 10] = [
        SortField::Id,
        SortField::Username,
        SortField::FirstName,
        SortField::LastName,
        SortField::Email,
        SortField::BirthDate,
        SortField::BasicSalary,
        SortField::Status,
        SortField::Group,
        SortField::Description,
    ];

    /// The camelCase name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Username => "username",
            SortField::FirstName => "firstName",
            SortField::LastName => "lastName",
            SortField::Email => "email",
            SortField::BirthDate => "birthDate",
            SortField::BasicSalary => "basicSalary",
            SortField::Status => "status",
            SortField::Group => "group",
            SortField::Description => "description",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ValidationError;

    /// Accepts camelCase, snake_case and kebab-case names, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "id" => Ok(SortField::Id),
            "username" => Ok(SortField::Username),
            "firstname" => Ok(SortField::FirstName),
            "lastname" => Ok(SortField::LastName),
            "email" => Ok(SortField::Email),
            "birthdate" => Ok(SortField::BirthDate),
            "basicsalary" | "salary" => Ok(SortField::BasicSalary),
            "status" => Ok(SortField::Status),
            "group" => Ok(SortField::Group),
            "description" => Ok(SortField::Description),
            _ => Err(ValidationError::UnknownSortField(s.to_string())),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest first
    #[default]
    Asc,
    /// Largest first
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            _ => Err(ValidationError::UnknownSortOrder(s.to_string())),
        }
    }
}

/// Which page to return and how to order it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// 1-based page number
    pub page: usize,

    /// Records per page
    pub page_size: usize,

    /// Sort field, `None` keeps insertion order
    pub sort_by: Option<SortField>,

    /// Sort direction
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl PageRequest {
    /// Unsorted request for the given page.
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size,
            sort_by: None,
            sort_order: SortOrder::Asc,
        }
    }

    /// Same request, sorted by `field` in `order`.
    #[must_use]
    pub fn sorted_by(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_by = Some(field);
        self.sort_order = order;
        self
    }

    /// Reject non-positive page numbers and page sizes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPage`] or
    /// [`ValidationError::InvalidPageSize`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.page == 0 {
            return Err(ValidationError::InvalidPage(self.page));
        }
        if self.page_size == 0 {
            return Err(ValidationError::InvalidPageSize(self.page_size));
        }
        Ok(())
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// One page of matching records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    /// Records on this page
    #[serde(rename = "data")]
    pub items: Vec<Employee>,

    /// Number of records matching the criteria before pagination
    pub total: usize,

    /// The requested page
    pub page: usize,

    /// The requested page size
    pub page_size: usize,
}

impl PageResult {
    /// Number of pages needed to show every matching record.
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }

    /// Page numbers for a navigation bar of up to `max_links` entries.
    ///
    /// The window is centred on the current page where possible and never
    /// extends past the last page.
    pub fn page_window(&self, max_links: usize) -> Vec<usize> {
        let total_pages = self.total_pages();
        let count = max_links.min(total_pages);
        if count == 0 {
            return Vec::new();
        }

        let last_start = total_pages - count + 1;
        let start = self.page.saturating_sub(count / 2).clamp(1, last_start);
        (start..start + count).collect()
    }
}
