//! In-memory storage backend.
//!
//! All data is held in RAM and **lost when the process exits**. The
//! [`EmployeeStore`] is wrapped in `Arc<Mutex<>>`; every trait call takes
//! the lock for one store operation, which gives callers the sequential
//! access the store requires.

use super::EmployeeStorage;
use crate::domain::{
    Employee, EmployeeId, EmployeeUpdate, NewEmployee, PageRequest, PageResult, SearchCriteria,
};
use crate::engine::EmployeeStore;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Store plus the reference data served next to it.
pub(crate) struct InMemoryStorageInner {
    /// Employee records
    store: EmployeeStore,

    /// Group reference list
    groups: Vec<String>,
}

/// Thread-safe in-memory storage.
pub(crate) type InMemoryStorage = Arc<Mutex<InMemoryStorageInner>>;

/// Create an in-memory storage instance around an existing store.
///
/// # Example
///
/// ```
/// use roster::engine::EmployeeStore;
/// use roster::storage::in_memory::new_in_memory_storage;
///
/// let storage = new_in_memory_storage(EmployeeStore::new(), vec!["Finance".to_string()]);
/// ```
pub fn new_in_memory_storage(
    store: EmployeeStore,
    groups: Vec<String>,
) -> Box<dyn EmployeeStorage> {
    Box::new(Arc::new(Mutex::new(InMemoryStorageInner { store, groups })))
}

#[async_trait]
impl EmployeeStorage for InMemoryStorage {
    async fn create(&mut self, employee: NewEmployee) -> Result<Employee> {
        let mut inner = self.lock().await;
        inner.store.create(employee)
    }

    async fn get(&self, id: EmployeeId) -> Result<Option<Employee>> {
        let inner = self.lock().await;
        Ok(inner.store.get(id).cloned())
    }

    async fn update(&mut self, id: EmployeeId, patch: EmployeeUpdate) -> Result<Employee> {
        let mut inner = self.lock().await;
        inner.store.update(id, patch)
    }

    async fn delete(&mut self, id: EmployeeId) -> Result<bool> {
        let mut inner = self.lock().await;
        Ok(inner.store.delete(id))
    }

    async fn query(&self, criteria: &SearchCriteria, request: &PageRequest) -> Result<PageResult> {
        let inner = self.lock().await;
        inner.store.query(criteria, request)
    }

    async fn groups(&self) -> Result<Vec<String>> {
        let inner = self.lock().await;
        Ok(inner.groups.clone())
    }
}
