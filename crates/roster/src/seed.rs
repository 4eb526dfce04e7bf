//! Sample data generation.
//!
//! The store starts out populated with generated employees so the list,
//! search and paging screens have something to show. Pass a fixed seed for
//! reproducible data.

use crate::domain::groups;
use crate::domain::{Employee, EmployeeId, KNOWN_STATUSES};
use chrono::{DateTime, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: [&str; 10] = [
    "John", "Jane", "Michael", "Sarah", "David", "Lisa", "Robert", "Emily", "James", "Maria",
];

const LAST_NAMES: [&str; 10] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez",
];

/// Earliest birth year produced.
const BIRTH_YEAR_START: i32 = 1980;

/// Number of distinct birth years produced.
const BIRTH_YEAR_SPAN: i32 = 30;

/// Smallest basic salary produced.
const SALARY_BASE: u64 = 3_000_000;

/// Width of the salary range above [`SALARY_BASE`].
const SALARY_SPREAD: u64 = 10_000_000;

/// Build the generator, seeded when `seed` is set.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generate `count` employees with ids `1..=count`.
///
/// Names, birth dates, salaries, statuses and groups are drawn at random;
/// usernames are `user{id}` and emails `first.last@company.com`. Groups
/// are drawn from `groups`, or the default list when it is empty. Every
/// record gets `now` as its secondary date.
pub fn sample_employees<R: Rng>(
    rng: &mut R,
    count: usize,
    groups: &[String],
    now: DateTime<Utc>,
) -> Vec<Employee> {
    let default_groups: Vec<String>;
    let groups: &[String] = if groups.is_empty() {
        default_groups = groups::default_groups();
        &default_groups
    } else {
        groups
    };

    (1..=count as u64)
        .map(|id| {
            let first_name = pick(rng, &FIRST_NAMES);
            let last_name = pick(rng, &LAST_NAMES);

            Employee {
                id: EmployeeId::new(id),
                username: format!("user{id}"),
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: format!(
                    "{}.{}@company.com",
                    first_name.to_lowercase(),
                    last_name.to_lowercase()
                ),
                birth_date: random_birth_date(rng),
                basic_salary: SALARY_BASE + rng.gen_range(0..SALARY_SPREAD),
                status: pick(rng, &KNOWN_STATUSES).to_string(),
                group: groups[rng.gen_range(0..groups.len())].clone(),
                description: now,
            }
        })
        .collect()
}

fn pick<'a, R: Rng>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

fn random_birth_date<R: Rng>(rng: &mut R) -> NaiveDate {
    let year = BIRTH_YEAR_START + rng.gen_range(0..BIRTH_YEAR_SPAN);
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=28);
    // Day 28 exists in every month
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::groups::{DEFAULT_GROUPS, default_groups};
    use chrono::{Datelike, TimeZone};
    use std::collections::HashSet;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn generates_sequential_ids() {
        let mut rng = rng_from_seed(Some(1));
        let employees = sample_employees(&mut rng, 100, &default_groups(), now());
        let ids: Vec<u64> = employees.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, (1..=100).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_same_data() {
        let a = sample_employees(&mut rng_from_seed(Some(42)), 20, &default_groups(), now());
        let b = sample_employees(&mut rng_from_seed(Some(42)), 20, &default_groups(), now());
        assert_eq!(a, b);
    }

    #[test]
    fn generated_records_are_valid() {
        let mut rng = rng_from_seed(Some(3));
        let today = now().date_naive();
        for employee in sample_employees(&mut rng, 200, &default_groups(), now()) {
            let salary = employee.basic_salary;
            assert!((SALARY_BASE..SALARY_BASE + SALARY_SPREAD).contains(&salary));
            assert!(employee.birth_date.year() >= BIRTH_YEAR_START);
            assert!(employee.birth_date < today);
            assert!(KNOWN_STATUSES.contains(&employee.status.as_str()));
            assert_eq!(employee.username, format!("user{}", employee.id));
            assert!(employee.validate().is_ok(), "{employee:?}");
        }
    }

    #[test]
    fn draws_from_given_groups() {
        let groups = vec!["Legal".to_string()];
        let employees = sample_employees(&mut rng_from_seed(Some(9)), 10, &groups, now());
        let seen: HashSet<&str> = employees.iter().map(|e| e.group.as_str()).collect();
        assert_eq!(seen, HashSet::from(["Legal"]));
    }

    #[test]
    fn empty_group_list_falls_back_to_defaults() {
        let employees = sample_employees(&mut rng_from_seed(Some(9)), 10, &[], now());
        assert!(employees
            .iter()
            .all(|e| DEFAULT_GROUPS.contains(&e.group.as_str())));
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(sample_employees(&mut rng_from_seed(None), 0, &[], now()).is_empty());
    }
}
