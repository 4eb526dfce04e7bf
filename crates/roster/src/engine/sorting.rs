//! Field-based ordering of records.

use crate::domain::{Employee, SortField, SortOrder};
use std::cmp::Ordering;

/// Compare two employees on a single field in ascending order.
///
/// Numeric fields compare numerically, dates chronologically and text
/// fields lexicographically.
pub fn compare_by(field: SortField, a: &Employee, b: &Employee) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Username => a.username.cmp(&b.username),
        SortField::FirstName => a.first_name.cmp(&b.first_name),
        SortField::LastName => a.last_name.cmp(&b.last_name),
        SortField::Email => a.email.cmp(&b.email),
        SortField::BirthDate => a.birth_date.cmp(&b.birth_date),
        SortField::BasicSalary => a.basic_salary.cmp(&b.basic_salary),
        SortField::Status => a.status.cmp(&b.status),
        SortField::Group => a.group.cmp(&b.group),
        SortField::Description => a.description.cmp(&b.description),
    }
}

/// Sort records in place by `field`.
///
/// The sort is stable in both directions: descending reverses the
/// comparison, not the output, so records with equal keys keep their
/// input order.
pub fn sort_by_field<T: AsRef<Employee>>(records: &mut [T], field: SortField, order: SortOrder) {
    records.sort_by(|a, b| {
        let ordering = compare_by(field, a.as_ref(), b.as_ref());
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}
