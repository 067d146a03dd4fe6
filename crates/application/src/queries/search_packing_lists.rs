use std::{fmt, sync::Arc};

use async_trait::async_trait;
use tracing::{debug, instrument};

use super::{QueryHandler, SearchPackingLists};
use crate::dto::PackingListDto;
use crate::error::ApplicationError;
use crate::ports::PackingListReadService;

/// Handler for [`SearchPackingLists`]
pub struct SearchPackingListsHandler {
    read_service: Arc<dyn PackingListReadService>,
}

impl fmt::Debug for SearchPackingListsHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchPackingListsHandler")
            .finish_non_exhaustive()
    }
}

impl SearchPackingListsHandler {
    #[must_use]
    pub fn new(read_service: Arc<dyn PackingListReadService>) -> Self {
        Self { read_service }
    }
}

#[async_trait]
impl QueryHandler<SearchPackingLists> for SearchPackingListsHandler {
    type Output = Vec<PackingListDto>;

    #[instrument(skip(self))]
    async fn handle(&self, query: SearchPackingLists) -> Result<Self::Output, ApplicationError> {
        let lists = self.read_service.search(&query).await?;
        debug!(count = lists.len(), "Search complete");
        Ok(lists)
    }
}
