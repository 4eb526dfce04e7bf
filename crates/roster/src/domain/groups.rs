//! Reference list of group names offered by selection inputs.
//!
//! Records are not checked against this list. It seeds the sample data
//! and backs the group picker; the CLI uses it to normalise the case of
//! typed group names.

/// Groups available when no configuration overrides them.
pub const DEFAULT_GROUPS: [&str; 10] = [
    "IT Development",
    "IT Support",
    "Human Resources",
    "Finance",
    "Marketing",
    "Sales",
    "Operations",
    "Customer Service",
    "Research & Development",
    "Quality Assurance",
];

/// Owned copy of [`DEFAULT_GROUPS`].
pub fn default_groups() -> Vec<String> {
    DEFAULT_GROUPS.iter().map(ToString::to_string).collect()
}

/// Groups whose name contains `search`, ignoring case.
///
/// A blank search returns the whole list. Otherwise the search text is
/// matched as typed, surrounding spaces included. Order is preserved.
pub fn search_groups<'a>(groups: &'a [String], search: &str) -> Vec<&'a str> {
    if search.trim().is_empty() {
        return groups.iter().map(String::as_str).collect();
    }

    let needle = search.to_lowercase();
    groups
        .iter()
        .map(String::as_str)
        .filter(|group| group.to_lowercase().contains(&needle))
        .collect()
}
