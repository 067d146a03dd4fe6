//! Packing list read-side port
//!
//! Answers existence and lookup questions without loading aggregates.

use async_trait::async_trait;
use domain::PackingListId;
#[cfg(test)]
use mockall::automock;

use crate::dto::PackingListDto;
use crate::error::ApplicationError;
use crate::queries::SearchPackingLists;

/// Port for packing list queries
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PackingListReadService: Send + Sync {
    /// Check whether a list with this name exists (case-insensitive)
    async fn exists_by_name(&self, name: &str) -> Result<bool, ApplicationError>;

    /// Fetch a single list as a DTO
    async fn get(&self, id: &PackingListId) -> Result<Option<PackingListDto>, ApplicationError>;

    /// Find lists whose name contains the query fragment, ordered by name
    async fn search(
        &self,
        query: &SearchPackingLists,
    ) -> Result<Vec<PackingListDto>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn PackingListReadService) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn PackingListReadService>();
    }
}
