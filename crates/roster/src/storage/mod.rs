//! Storage abstraction layer for roster.
//!
//! This module provides the async storage trait consumed by the CLI and a
//! factory that builds the configured backend:
//!
//! - **In-memory**: the seeded [`EmployeeStore`](crate::engine::EmployeeStore)
//!   behind a mutex
//! - **Simulated latency**: a wrapper that delays every call, to mimic a
//!   remote API in front of any backend
//!
//! # Architecture
//!
//! The query engine is synchronous. The trait is async so that callers are
//! written against the same contract a network-backed store would expose,
//! and so that artificial delay can be added without touching the engine.
//! The trait is object-safe, allowing dynamic dispatch via
//! `Box<dyn EmployeeStorage>`.
//!
//! # Example
//!
//! ```no_run
//! use roster::config::RosterConfig;
//! use roster::domain::{PageRequest, SearchCriteria};
//! use roster::storage::create_storage;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let storage = create_storage(&RosterConfig::default())?;
//!     let page = storage
//!         .query(&SearchCriteria::all(), &PageRequest::default())
//!         .await?;
//!     println!("{} employees", page.total);
//!     Ok(())
//! }
//! ```

use crate::config::RosterConfig;
use crate::domain::{
    Employee, EmployeeId, EmployeeUpdate, NewEmployee, PageRequest, PageResult, SearchCriteria,
};
use crate::engine::EmployeeStore;
use crate::error::Result;
use crate::seed;
use async_trait::async_trait;

pub mod in_memory;
pub mod latency;

pub use latency::{Latency, SimulatedLatency};

/// Core storage trait for employee records.
///
/// # Method Categories
///
/// - **CRUD**: `create`, `get`, `update`, `delete`
/// - **Queries**: `query`
/// - **Reference data**: `groups`
///
/// # Error Handling
///
/// - `NotFound`: `update` on an id that doesn't exist
/// - `Validation`: invalid record data or page request
///
/// `delete` and `get` report absence through their return value instead.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. The in-memory backend serializes
/// all calls through a single mutex, so each call observes a consistent
/// snapshot of the collection.
#[async_trait]
pub trait EmployeeStorage: Send + Sync {
    // ========== CRUD Operations ==========

    /// Create a new employee.
    ///
    /// Assigns an id greater than any id the store has held.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if the record fails validation.
    async fn create(&mut self, employee: NewEmployee) -> Result<Employee>;

    /// Get an employee by ID.
    ///
    /// Returns `None` if the employee doesn't exist.
    async fn get(&self, id: EmployeeId) -> Result<Option<Employee>>;

    /// Update an existing employee.
    ///
    /// Only fields present in `patch` are modified. Returns the updated
    /// employee.
    ///
    /// # Errors
    ///
    /// - `Error::NotFound` if the employee doesn't exist
    /// - `Error::Validation` if the patched record is invalid
    async fn update(&mut self, id: EmployeeId, patch: EmployeeUpdate) -> Result<Employee>;

    /// Delete an employee.
    ///
    /// Returns `false` if there was nothing to delete.
    async fn delete(&mut self, id: EmployeeId) -> Result<bool>;

    // ========== Queries ==========

    /// Filter, sort and paginate the collection.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` for a zero page or page size.
    async fn query(&self, criteria: &SearchCriteria, request: &PageRequest) -> Result<PageResult>;

    // ========== Reference Data ==========

    /// The group names offered by selection inputs.
    async fn groups(&self) -> Result<Vec<String>>;
}

/// Create the storage described by `config`.
///
/// Seeds an in-memory store with `config.seed.count` generated employees
/// and wraps it in [`SimulatedLatency`] when latency is enabled.
///
/// # Errors
///
/// Returns `Error::Config` if the configuration is inconsistent.
pub fn create_storage(config: &RosterConfig) -> Result<Box<dyn EmployeeStorage>> {
    config.validate()?;

    let mut rng = seed::rng_from_seed(config.seed.rng_seed);
    let records = seed::sample_employees(
        &mut rng,
        config.seed.count,
        &config.groups,
        chrono::Utc::now(),
    );
    tracing::debug!(count = records.len(), "seeded employee store");

    let storage = in_memory::new_in_memory_storage(
        EmployeeStore::with_records(records),
        config.groups.clone(),
    );

    if config.latency.enabled {
        let latency = Latency::from(&config.latency);
        tracing::debug!(?latency, "simulating storage latency");
        return Ok(Box::new(SimulatedLatency::new(storage, latency)));
    }

    Ok(storage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn trait_object_usage() {
        let storage: Box<dyn EmployeeStorage> = create_storage(&RosterConfig::default()).unwrap();
        let page = storage
            .query(&SearchCriteria::all(), &PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.total, RosterConfig::default().seed.count);
    }

    #[tokio::test]
    async fn seeded_ids_start_at_one() {
        let mut config = RosterConfig::default();
        config.seed.count = 5;
        config.seed.rng_seed = Some(7);

        let storage = create_storage(&config).unwrap();
        for id in 1..=5 {
            assert!(storage.get(EmployeeId::new(id)).await.unwrap().is_some());
        }
        assert!(storage.get(EmployeeId::new(6)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn groups_come_from_config() {
        let mut config = RosterConfig::default();
        config.groups = vec!["Legal".to_string(), "Audit".to_string()];
        config.seed.count = 3;

        let storage = create_storage(&config).unwrap();
        assert_eq!(storage.groups().await.unwrap(), config.groups);

        let page = storage
            .query(&SearchCriteria::all(), &PageRequest::default())
            .await
            .unwrap();
        assert!(page.items.iter().all(|e| config.groups.contains(&e.group)));
    }

    #[test]
    fn invalid_config_rejected() {
        let mut config = RosterConfig::default();
        config.paging.default_page_size = 0;
        assert!(create_storage(&config).is_err());
    }
}
