//! Packing list repository port
//!
//! Write-side persistence of the packing list aggregate.
//! Adapters in the infrastructure layer implement this port using SQLite
//! or an in-memory map.

use async_trait::async_trait;
use domain::{PackingList, PackingListId};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for packing list persistence operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PackingListRepository: Send + Sync {
    /// Persist a new list
    ///
    /// The list is durably retrievable once this returns `Ok`. Storage
    /// enforces name uniqueness and reports a clash as
    /// `PackingListAlreadyExists`.
    async fn add(&self, list: &PackingList) -> Result<(), ApplicationError>;

    /// Load a list by id
    async fn get(&self, id: &PackingListId) -> Result<Option<PackingList>, ApplicationError>;

    /// Replace the stored state of an existing list
    async fn update(&self, list: &PackingList) -> Result<(), ApplicationError>;

    /// Delete a list and its items
    async fn delete(&self, id: &PackingListId) -> Result<(), ApplicationError>;
}
