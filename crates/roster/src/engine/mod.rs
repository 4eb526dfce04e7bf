//! In-memory query engine: filter, sort, paginate.
//!
//! [`query`] is a pure function over a slice of records. It never mutates
//! its input and returns the same page for the same inputs. The owning
//! collection lives in [`store::EmployeeStore`].
//!
//! # Pipeline
//!
//! 1. Validate the page request (page and page size must be positive)
//! 2. Keep records matching every criterion that is set
//! 3. Stable-sort by the requested field, if any
//! 4. Slice out the requested page
//!
//! The returned total counts the records surviving step 2, so callers can
//! compute the number of pages.

pub mod filter;
pub mod sorting;
pub mod store;

use crate::domain::{Employee, PageRequest, PageResult, SearchCriteria};
use crate::error::Result;

pub use filter::matches;
pub use sorting::{compare_by, sort_by_field};
pub use store::EmployeeStore;

/// Answer a search over `records`.
///
/// # Errors
///
/// Returns `Error::Validation` if `page` or `page_size` is zero.
pub fn query(
    records: &[Employee],
    criteria: &SearchCriteria,
    request: &PageRequest,
) -> Result<PageResult> {
    request.validate()?;

    let mut matched = filter::filter(records, criteria);

    if let Some(field) = request.sort_by {
        sort_by_field(&mut matched, field, request.sort_order);
    }

    let total = matched.len();
    let items = paginate(&matched, request.page, request.page_size)
        .iter()
        .map(|employee| (*employee).clone())
        .collect();

    tracing::debug!(
        total,
        page = request.page,
        page_size = request.page_size,
        sort_by = ?request.sort_by,
        "query executed"
    );

    Ok(PageResult {
        items,
        total,
        page: request.page,
        page_size: request.page_size,
    })
}

/// The `page`-th (1-based) window of `page_size` items.
///
/// Returns an empty slice when the page starts past the end. A zero page
/// is treated as the first page; [`query`] rejects it before getting here.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
