//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use chrono::{NaiveDate, TimeZone, Utc};
use roster::domain::groups::DEFAULT_GROUPS;
use roster::domain::{Employee, EmployeeId, KNOWN_STATUSES, NewEmployee, STATUS_ACTIVE};
use std::path::Path;
use std::process::{Command, Output, Stdio};
use std::io::Write;

/// Employee with predictable field values derived from `id`.
pub fn employee(id: u64, status: &str, group: &str) -> Employee {
    Employee {
        id: EmployeeId::new(id),
        username: format!("user{id}"),
        first_name: format!("First{id}"),
        last_name: format!("Last{id}"),
        email: format!("user{id}@company.com"),
        birth_date: NaiveDate::from_ymd_opt(1985, 1, 1).unwrap(),
        basic_salary: 3_000_000 + id * 1000,
        status: status.to_string(),
        group: group.to_string(),
        description: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

/// `count` records with ids `1..=count`, groups cycling through the
/// reference list and statuses cycling Active, Inactive, Pending.
pub fn reference_dataset(count: u64) -> Vec<Employee> {
    (1..=count)
        .map(|id| {
            let index = usize::try_from(id - 1).unwrap();
            employee(
                id,
                KNOWN_STATUSES[index % KNOWN_STATUSES.len()],
                DEFAULT_GROUPS[index % DEFAULT_GROUPS.len()],
            )
        })
        .collect()
}

/// A valid record ready for `create`.
pub fn new_employee(username: &str) -> NewEmployee {
    NewEmployee {
        username: username.to_string(),
        first_name: "Jane".to_string(),
        last_name: "Williams".to_string(),
        email: "jane.williams@company.com".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1992, 7, 19).unwrap(),
        basic_salary: 5_250_000,
        status: STATUS_ACTIVE.to_string(),
        group: "Operations".to_string(),
        description: Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap(),
    }
}

/// Run the roster binary in `dir` with colors and logging quiet.
pub fn run_roster_in_dir(dir: &Path, args: &[&str]) -> Output {
    run_roster_with_input(dir, args, "")
}

/// Run the roster binary in `dir`, feeding `input` on stdin.
pub fn run_roster_with_input(dir: &Path, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_roster"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start roster binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to run roster binary")
}

/// Write a small reproducible `roster.yaml` into `dir`.
pub fn write_config(dir: &Path, count: usize) {
    std::fs::write(
        dir.join("roster.yaml"),
        format!("seed:\n  count: {count}\n  rng-seed: 1\n"),
    )
    .expect("Failed to write roster.yaml");
}
