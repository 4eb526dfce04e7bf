//! Artificial latency around a storage backend.
//!
//! Wraps any [`EmployeeStorage`] and sleeps before delegating each call,
//! so a front end can be exercised against realistic response times
//! without the engine knowing about it.

use super::EmployeeStorage;
use crate::config::LatencyConfig;
use crate::domain::{
    Employee, EmployeeId, EmployeeUpdate, NewEmployee, PageRequest, PageResult, SearchCriteria,
};
use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Delay applied per operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Latency {
    /// Delay before `query`
    pub query: Duration,

    /// Delay before `get`
    pub get: Duration,

    /// Delay before `create`, `update` and `delete`
    pub mutate: Duration,
}

impl From<&LatencyConfig> for Latency {
    fn from(config: &LatencyConfig) -> Self {
        Self {
            query: Duration::from_millis(config.query_ms),
            get: Duration::from_millis(config.get_ms),
            mutate: Duration::from_millis(config.mutate_ms),
        }
    }
}

/// Storage wrapper that delays every call by the configured [`Latency`].
///
/// `groups` is served without delay, matching a reference list that is
/// normally cached by the client.
pub struct SimulatedLatency {
    inner: Box<dyn EmployeeStorage>,
    latency: Latency,
}

impl SimulatedLatency {
    /// Wrap `inner` with the given delays.
    pub fn new(inner: Box<dyn EmployeeStorage>, latency: Latency) -> Self {
        Self { inner, latency }
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[async_trait]
impl EmployeeStorage for SimulatedLatency {
    async fn create(&mut self, employee: NewEmployee) -> Result<Employee> {
        pause(self.latency.mutate).await;
        self.inner.create(employee).await
    }

    async fn get(&self, id: EmployeeId) -> Result<Option<Employee>> {
        pause(self.latency.get).await;
        self.inner.get(id).await
    }

    async fn update(&mut self, id: EmployeeId, patch: EmployeeUpdate) -> Result<Employee> {
        pause(self.latency.mutate).await;
        self.inner.update(id, patch).await
    }

    async fn delete(&mut self, id: EmployeeId) -> Result<bool> {
        pause(self.latency.mutate).await;
        self.inner.delete(id).await
    }

    async fn query(&self, criteria: &SearchCriteria, request: &PageRequest) -> Result<PageResult> {
        pause(self.latency.query).await;
        self.inner.query(criteria, request).await
    }

    async fn groups(&self) -> Result<Vec<String>> {
        self.inner.groups().await
    }
}
