//! Record store owning the employee collection.
//!
//! The store is the only place records are mutated. It is not thread-safe;
//! callers that share it wrap it in a lock (see `storage::in_memory`).

use super::query;
use crate::domain::{
    Employee, EmployeeId, EmployeeUpdate, NewEmployee, PageRequest, PageResult, SearchCriteria,
};
use crate::error::{Error, Result, ValidationError};

/// Ordered collection of employees plus id bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct EmployeeStore {
    /// Records in insertion order
    records: Vec<Employee>,

    /// Largest id ever held by this store.
    ///
    /// Only grows, so ids freed by `delete` are never handed out again.
    high_water: u64,
}

impl EmployeeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `records` in the given order.
    ///
    /// Ids are taken as-is; the next created record gets one more than the
    /// largest of them.
    pub fn with_records(records: Vec<Employee>) -> Self {
        let high_water = records.iter().map(|e| e.id.get()).max().unwrap_or(0);
        Self {
            records,
            high_water,
        }
    }

    /// All records in insertion order
    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate and append a new employee, assigning the next id.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if the record fails validation or no id
    /// is left to assign; the store is unchanged in that case.
    pub fn create(&mut self, new_employee: NewEmployee) -> Result<Employee> {
        new_employee.validate()?;

        let next = self
            .high_water
            .checked_add(1)
            .ok_or(ValidationError::IdSpaceExhausted)?;
        let id = EmployeeId::new(next);
        self.high_water = id.get();

        let employee = Employee::from_new(id, new_employee);
        self.records.push(employee.clone());

        tracing::debug!(id = %id, "employee created");
        Ok(employee)
    }

    /// Look up an employee by id
    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.records.iter().find(|e| e.id == id)
    }

    /// Apply a partial update to the employee with `id`.
    ///
    /// The patch is applied to a copy and validated before being written
    /// back, so a rejected patch leaves the stored record untouched.
    ///
    /// The whole merged record is validated, not just the patched fields.
    /// A record loaded through [`EmployeeStore::with_records`] that already
    /// breaks a rule must have that field fixed in the same patch.
    ///
    /// # Errors
    ///
    /// - `Error::NotFound` if no employee has this id
    /// - `Error::Validation` if the patched record is invalid
    pub fn update(&mut self, id: EmployeeId, patch: EmployeeUpdate) -> Result<Employee> {
        let slot = self
            .records
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(Error::NotFound(id))?;

        let mut updated = slot.clone();
        patch.apply_to(&mut updated);
        updated.validate()?;

        *slot = updated.clone();

        tracing::debug!(id = %id, "employee updated");
        Ok(updated)
    }

    /// Remove the employee with `id`.
    ///
    /// Returns `false` if there was no such employee.
    pub fn delete(&mut self, id: EmployeeId) -> bool {
        let Some(index) = self.records.iter().position(|e| e.id == id) else {
            return false;
        };

        self.records.remove(index);
        tracing::debug!(id = %id, "employee deleted");
        true
    }

    /// Run a search over the current records.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` for an invalid page request.
    pub fn query(&self, criteria: &SearchCriteria, request: &PageRequest) -> Result<PageResult> {
        query(&self.records, criteria, request)
    }
}
