//! Search criteria matching.

use crate::domain::{Employee, SearchCriteria};

/// Returns `true` if the employee satisfies every criterion that is set.
pub fn matches(employee: &Employee, criteria: &SearchCriteria) -> bool {
    if let Some(name) = present(criteria.full_name.as_deref()) {
        if !contains_ignore_case(&employee.full_name(), name) {
            return false;
        }
    }

    if let Some(email) = present(criteria.email.as_deref()) {
        if !contains_ignore_case(&employee.email, email) {
            return false;
        }
    }

    if let Some(group) = present(criteria.group.as_deref()) {
        if !contains_ignore_case(&employee.group, group) {
            return false;
        }
    }

    if let Some(status) = criteria.effective_status() {
        if employee.status.to_lowercase() != status.to_lowercase() {
            return false;
        }
    }

    true
}

/// Records matching `criteria`, in input order.
pub fn filter<'a>(records: &'a [Employee], criteria: &SearchCriteria) -> Vec<&'a Employee> {
    records
        .iter()
        .filter(|employee| matches(employee, criteria))
        .collect()
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
