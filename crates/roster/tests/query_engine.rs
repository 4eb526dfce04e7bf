//! Integration tests for the query engine.
//!
//! Covers the reference 25-record scenario plus property tests for
//! filtering, sorting and pagination over generated collections.

use proptest::prelude::*;
use roster::domain::groups::DEFAULT_GROUPS;
use roster::domain::{
    ALL_STATUS, Employee, EmployeeId, EmployeeUpdate, KNOWN_STATUSES, PageRequest, STATUS_ACTIVE,
    SearchCriteria, SortField, SortOrder,
};
use roster::engine::{self, EmployeeStore, compare_by, matches};
use roster::error::{Error, ValidationError};
use rstest::rstest;
use std::cmp::Ordering;

mod common;
use common::{employee, reference_dataset};

fn everything(
    records: &[Employee],
    criteria: &SearchCriteria,
    field: Option<SortField>,
    order: SortOrder,
) -> Vec<Employee> {
    let mut request = PageRequest::new(1, records.len().max(1));
    if let Some(field) = field {
        request = request.sorted_by(field, order);
    }
    engine::query(records, criteria, &request).unwrap().items
}

fn ids(records: &[Employee]) -> Vec<u64> {
    records.iter().map(|e| e.id.get()).collect()
}

// ========== Reference Scenario ==========

#[test]
fn active_first_page_of_reference_dataset() {
    let records = reference_dataset(25);
    let criteria = SearchCriteria {
        status: Some(STATUS_ACTIVE.to_string()),
        ..SearchCriteria::default()
    };
    let request = PageRequest::new(1, 10).sorted_by(SortField::Id, SortOrder::Asc);

    let page = engine::query(&records, &criteria, &request).unwrap();

    // Every third record starting at 1 is Active
    assert_eq!(ids(&page.items), vec![1, 4, 7, 10, 13, 16, 19, 22, 25]);
    assert_eq!(page.total, 9);
    assert_eq!(page.total_pages(), 1);
    assert!(page.items.iter().all(|e| e.status == STATUS_ACTIVE));
}

#[test]
fn total_counts_matches_not_page() {
    let records = reference_dataset(25);
    let page = engine::query(&records, &SearchCriteria::all(), &PageRequest::new(2, 10)).unwrap();

    assert_eq!(page.total, 25);
    assert_eq!(ids(&page.items), (11..=20).collect::<Vec<_>>());
    assert_eq!(page.total_pages(), 3);
}

#[test]
fn page_past_the_end_is_empty() {
    let records = reference_dataset(25);
    let page = engine::query(&records, &SearchCriteria::all(), &PageRequest::new(4, 10)).unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total, 25);
}

#[test]
fn group_filter_is_substring_and_case_insensitive() {
    let records = reference_dataset(25);
    let criteria = SearchCriteria {
        group: Some("it ".to_string()),
        ..SearchCriteria::default()
    };

    let found = everything(&records, &criteria, None, SortOrder::Asc);
    // "IT Development" and "IT Support" are groups 0 and 1 of each cycle
    assert_eq!(ids(&found), vec![1, 2, 11, 12, 21, 22]);
}

#[test]
fn full_name_spans_first_and_last() {
    let records = vec![
        employee(1, "Active", "Sales"),
        employee(2, "Active", "Sales"),
        employee(12, "Active", "Sales"),
    ];
    let criteria = SearchCriteria {
        full_name: Some("first1 last1".to_string()),
        ..SearchCriteria::default()
    };

    assert_eq!(ids(&everything(&records, &criteria, None, SortOrder::Asc)), vec![1]);
}

#[test]
fn salary_sort_descending() {
    let records = reference_dataset(5);
    let sorted = everything(
        &records,
        &SearchCriteria::all(),
        Some(SortField::BasicSalary),
        SortOrder::Desc,
    );
    assert_eq!(ids(&sorted), vec![5, 4, 3, 2, 1]);
}

#[rstest]
#[case::zero_page(PageRequest::new(0, 10), ValidationError::InvalidPage(0))]
#[case::zero_size(PageRequest::new(1, 0), ValidationError::InvalidPageSize(0))]
fn invalid_page_request_rejected(#[case] request: PageRequest, #[case] expected: ValidationError) {
    let records = reference_dataset(3);
    let err = engine::query(&records, &SearchCriteria::all(), &request).unwrap_err();
    assert!(matches!(err, Error::Validation(e) if e == expected));
}

#[test]
fn unknown_sort_field_rejected() {
    assert_eq!(
        "favouriteColour".parse::<SortField>(),
        Err(ValidationError::UnknownSortField("favouriteColour".to_string()))
    );
}

// ========== Property Tests ==========

const FIRST_NAMES: [&str; 4] = ["Ana", "Budi", "Citra", "Dewi"];
const LAST_NAMES: [&str; 4] = ["Santoso", "Wijaya", "Smith", "Lee"];

prop_compose! {
    fn arb_employee()(
        first in 0..FIRST_NAMES.len(),
        last in 0..LAST_NAMES.len(),
        group in 0..DEFAULT_GROUPS.len(),
        status in 0..KNOWN_STATUSES.len(),
        salary in 1u64..5,
        year in 1980i32..1984,
        month in 1u32..3,
    ) -> Employee {
        let first_name = FIRST_NAMES[first];
        let last_name = LAST_NAMES[last];
        let mut e = employee(0, KNOWN_STATUSES[status], DEFAULT_GROUPS[group]);
        e.first_name = first_name.to_string();
        e.last_name = last_name.to_string();
        e.username = first_name.to_lowercase();
        e.email = format!("{}.{}@example.com", first_name.to_lowercase(), last_name.to_lowercase());
        e.basic_salary = salary * 1_000_000;
        e.birth_date = chrono::NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        e
    }
}

/// Collections with ids `1..=n` in insertion order.
fn arb_records() -> impl Strategy<Value = Vec<Employee>> {
    prop::collection::vec(arb_employee(), 0..40).prop_map(|mut records| {
        for (i, record) in records.iter_mut().enumerate() {
            record.id = EmployeeId::new(i as u64 + 1);
        }
        records
    })
}

fn arb_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec![
        "", "a", "AN", "smith", "dewi lee", "@example", "budi.w", "it", "sales", "xyz",
    ]))
    .prop_map(|s| s.map(str::to_string))
}

fn arb_status() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec![
        "Active", "inactive", "PENDING", "Retired", ALL_STATUS, "all status",
    ]))
    .prop_map(|s| s.map(str::to_string))
}

prop_compose! {
    fn arb_criteria()(
        full_name in arb_text(),
        email in arb_text(),
        group in arb_text(),
        status in arb_status(),
    ) -> SearchCriteria {
        SearchCriteria { full_name, email, group, status }
    }
}

fn arb_field() -> impl Strategy<Value = SortField> {
    prop::sample::select(SortField::ALL.to_vec())
}

/// One criteria value per field that is set in `criteria`.
fn single_field_criteria(criteria: &SearchCriteria) -> Vec<SearchCriteria> {
    let none = SearchCriteria::default;
    let mut singles = Vec::new();
    if criteria.full_name.is_some() {
        let full_name = criteria.full_name.clone();
        singles.push(SearchCriteria { full_name, ..none() });
    }
    if criteria.email.is_some() {
        let email = criteria.email.clone();
        singles.push(SearchCriteria { email, ..none() });
    }
    if criteria.group.is_some() {
        let group = criteria.group.clone();
        singles.push(SearchCriteria { group, ..none() });
    }
    if criteria.status.is_some() {
        let status = criteria.status.clone();
        singles.push(SearchCriteria { status, ..none() });
    }
    singles
}

proptest! {
    #[test]
    fn no_criteria_returns_everything(records in arb_records()) {
        let found = everything(&records, &SearchCriteria::all(), None, SortOrder::Asc);
        prop_assert_eq!(found, records);
    }

    #[test]
    fn filtering_is_conjunctive(records in arb_records(), criteria in arb_criteria()) {
        let singles = single_field_criteria(&criteria);
        let found = ids(&everything(&records, &criteria, None, SortOrder::Asc));

        let expected: Vec<u64> = records
            .iter()
            .filter(|e| singles.iter().all(|single| matches(e, single)))
            .map(|e| e.id.get())
            .collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn all_status_equals_no_status(records in arb_records(), criteria in arb_criteria()) {
        let without = SearchCriteria { status: None, ..criteria.clone() };
        let sentinel = SearchCriteria { status: Some(ALL_STATUS.to_string()), ..criteria };
        prop_assert_eq!(
            everything(&records, &sentinel, None, SortOrder::Asc),
            everything(&records, &without, None, SortOrder::Asc)
        );
    }

    #[test]
    fn sorting_is_stable(records in arb_records(), field in arb_field(), desc in any::<bool>()) {
        let order = if desc { SortOrder::Desc } else { SortOrder::Asc };
        let sorted = everything(&records, &SearchCriteria::all(), Some(field), order);

        for pair in sorted.windows(2) {
            let ordering = compare_by(field, &pair[0], &pair[1]);
            let expected_direction = if desc { Ordering::Greater } else { Ordering::Less };
            prop_assert!(ordering == Ordering::Equal || ordering == expected_direction);
            if ordering == Ordering::Equal {
                // Ids follow insertion order, so ties keep ascending ids
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn descending_is_reversed_ascending(records in arb_records(), field in arb_field()) {
        let asc = everything(&records, &SearchCriteria::all(), Some(field), SortOrder::Asc);
        let desc = everything(&records, &SearchCriteria::all(), Some(field), SortOrder::Desc);

        prop_assert_eq!(asc.len(), desc.len());
        for (a, d) in asc.iter().rev().zip(&desc) {
            prop_assert_eq!(compare_by(field, a, d), Ordering::Equal);
        }
    }

    #[test]
    fn pages_concatenate_to_full_sequence(
        records in arb_records(),
        criteria in arb_criteria(),
        field in arb_field(),
        page_size in 1usize..8,
    ) {
        let full = everything(&records, &criteria, Some(field), SortOrder::Asc);

        let request = PageRequest::new(1, page_size).sorted_by(field, SortOrder::Asc);
        let first = engine::query(&records, &criteria, &request).unwrap();
        prop_assert_eq!(first.total, full.len());

        let mut joined = Vec::new();
        for page in 1..=first.total_pages() {
            let request = PageRequest::new(page, page_size).sorted_by(field, SortOrder::Asc);
            let result = engine::query(&records, &criteria, &request).unwrap();
            prop_assert!(result.items.len() <= page_size);
            prop_assert!(!result.items.is_empty());
            joined.extend(result.items);
        }
        prop_assert_eq!(joined, full);

        let past = PageRequest::new(first.total_pages() + 1, page_size);
        prop_assert!(engine::query(&records, &criteria, &past).unwrap().items.is_empty());
    }

    #[test]
    fn create_assigns_greater_id_once(records in arb_records()) {
        let max_before = records.iter().map(|e| e.id.get()).max().unwrap_or(0);
        let mut store = EmployeeStore::with_records(records);

        let created = store.create(common::new_employee("fresh")).unwrap();
        prop_assert!(created.id.get() > max_before);

        let all = everything(store.records(), &SearchCriteria::all(), None, SortOrder::Asc);
        prop_assert_eq!(all.iter().filter(|e| e.id == created.id).count(), 1);
    }

    #[test]
    fn update_touches_only_patched_fields(
        records in arb_records(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!records.is_empty());
        let target = records[pick.index(records.len())].clone();
        let mut store = EmployeeStore::with_records(records.clone());

        let patch = EmployeeUpdate {
            basic_salary: Some(target.basic_salary + 1),
            ..Default::default()
        };
        let updated = store.update(target.id, patch).unwrap();

        prop_assert_eq!(updated.basic_salary, target.basic_salary + 1);
        let restored = Employee { basic_salary: target.basic_salary, ..updated };
        prop_assert_eq!(restored, target.clone());

        let others = |list: &[Employee]| -> Vec<Employee> {
            list.iter().filter(|e| e.id != target.id).cloned().collect()
        };
        prop_assert_eq!(others(&records), others(store.records()));
    }

    #[test]
    fn update_absent_id_changes_nothing(records in arb_records()) {
        let mut store = EmployeeStore::with_records(records.clone());
        let absent = EmployeeId::new(records.len() as u64 + 100);

        let result = store.update(absent, EmployeeUpdate {
            status: Some("Inactive".to_string()),
            ..Default::default()
        });
        prop_assert!(matches!(result, Err(Error::NotFound(id)) if id == absent));
        prop_assert_eq!(store.records(), records.as_slice());
    }

    #[test]
    fn delete_removes_exactly_one(records in arb_records(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!records.is_empty());
        let target = records[pick.index(records.len())].id;
        let mut store = EmployeeStore::with_records(records.clone());

        prop_assert!(store.delete(target));
        prop_assert_eq!(store.len(), records.len() - 1);
        prop_assert!(store.get(target).is_none());

        prop_assert!(!store.delete(target));
        prop_assert_eq!(store.len(), records.len() - 1);
    }
}
