//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation.

use chrono::{DateTime, NaiveDate, Utc};
use clap::Parser;

use super::types::StatusArg;
use super::validators::{
    parse_date, parse_employee_id, parse_salary, parse_timestamp, validate_email,
    validate_non_blank,
};
use crate::domain::{
    EmployeeId, EmployeeUpdate, NewEmployee, PageRequest, SearchCriteria, SortField, SortOrder,
};

/// Arguments for the `init` command
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite an existing `roster.yaml`
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `list` command
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Filter by full name (case-insensitive substring)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Filter by email (case-insensitive substring)
    #[arg(short, long)]
    pub email: Option<String>,

    /// Filter by group (case-insensitive substring)
    #[arg(short, long)]
    pub group: Option<String>,

    /// Filter by exact status ("All Status" matches every record)
    #[arg(short, long)]
    pub status: Option<String>,

    /// Page number, starting at 1
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Records per page, one of the configured page-size options
    /// (default from configuration)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Field to sort by (e.g., id, firstName, birthDate, basicSalary);
    /// insertion order when omitted
    #[arg(long)]
    pub sort_by: Option<SortField>,

    /// Sort direction
    #[arg(long, default_value = "asc")]
    pub order: SortOrder,
}

impl ListArgs {
    /// Search criteria described by the filter flags
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            full_name: self.name.clone(),
            email: self.email.clone(),
            group: self.group.clone(),
            status: self.status.clone(),
        }
    }

    /// Page request described by the paging and sorting flags
    pub fn page_request(&self, default_page_size: usize) -> PageRequest {
        let request = PageRequest::new(self.page, self.page_size.unwrap_or(default_page_size));
        match self.sort_by {
            Some(field) => request.sorted_by(field, self.order),
            None => request,
        }
    }
}

/// Arguments for the `show` command
#[derive(Parser, Debug, Clone)]
pub struct ShowArgs {
    /// Employee ID to display
    #[arg(value_parser = parse_employee_id)]
    pub id: EmployeeId,
}

/// Arguments for the `add` command
#[derive(Parser, Debug, Clone)]
pub struct AddArgs {
    /// Login name
    #[arg(short, long, value_parser = validate_non_blank)]
    pub username: String,

    /// Given name
    #[arg(long, value_parser = validate_non_blank)]
    pub first_name: String,

    /// Family name
    #[arg(long, value_parser = validate_non_blank)]
    pub last_name: String,

    /// Email address (name@domain.tld)
    #[arg(short, long, value_parser = validate_email)]
    pub email: String,

    /// Birth date (YYYY-MM-DD, not in the future)
    #[arg(short, long, value_parser = parse_date)]
    pub birth_date: NaiveDate,

    /// Basic salary in Rupiah (e.g., 3500000 or 3.500.000)
    #[arg(long, value_parser = parse_salary)]
    pub salary: u64,

    /// Employment status
    #[arg(short, long, value_enum, default_value_t = StatusArg::Active)]
    pub status: StatusArg,

    /// Group name (see `roster groups`)
    #[arg(short, long, value_parser = validate_non_blank)]
    pub group: String,

    /// Secondary date (RFC 3339 or YYYY-MM-DD; defaults to now)
    #[arg(short = 'D', long, value_parser = parse_timestamp)]
    pub description: Option<DateTime<Utc>>,
}

impl AddArgs {
    /// Build the record to create, stamping `now` when no date was given.
    pub fn to_new_employee(&self, now: DateTime<Utc>) -> NewEmployee {
        NewEmployee {
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            birth_date: self.birth_date,
            basic_salary: self.salary,
            status: self.status.into(),
            group: self.group.clone(),
            description: self.description.unwrap_or(now),
        }
    }
}

/// Arguments for the `update` command
#[derive(Parser, Debug, Clone)]
pub struct UpdateArgs {
    /// Employee ID to update
    #[arg(value_parser = parse_employee_id)]
    pub id: EmployeeId,

    /// New login name
    #[arg(short, long, value_parser = validate_non_blank)]
    pub username: Option<String>,

    /// New given name
    #[arg(long, value_parser = validate_non_blank)]
    pub first_name: Option<String>,

    /// New family name
    #[arg(long, value_parser = validate_non_blank)]
    pub last_name: Option<String>,

    /// New email address
    #[arg(short, long, value_parser = validate_email)]
    pub email: Option<String>,

    /// New birth date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub birth_date: Option<NaiveDate>,

    /// New basic salary
    #[arg(long, value_parser = parse_salary)]
    pub salary: Option<u64>,

    /// New status
    #[arg(short, long, value_enum)]
    pub status: Option<StatusArg>,

    /// New group
    #[arg(short, long, value_parser = validate_non_blank)]
    pub group: Option<String>,

    /// New secondary date (RFC 3339 or YYYY-MM-DD)
    #[arg(short = 'D', long, value_parser = parse_timestamp)]
    pub description: Option<DateTime<Utc>>,
}

impl UpdateArgs {
    /// Patch holding only the fields given on the command line
    pub fn to_update(&self) -> EmployeeUpdate {
        EmployeeUpdate {
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            birth_date: self.birth_date,
            basic_salary: self.salary,
            status: self.status.map(Into::into),
            group: self.group.clone(),
            description: self.description,
        }
    }
}

/// Arguments for the `delete` command
#[derive(Parser, Debug, Clone)]
pub struct DeleteArgs {
    /// Employee ID to delete
    #[arg(value_parser = parse_employee_id)]
    pub id: EmployeeId,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `groups` command
#[derive(Parser, Debug, Clone)]
pub struct GroupsArgs {
    /// Only show groups containing this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,
}
