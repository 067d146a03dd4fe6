use std::{fmt, sync::Arc};

use async_trait::async_trait;
use domain::PackingListId;
use tracing::instrument;

use super::{GetPackingList, QueryHandler};
use crate::dto::PackingListDto;
use crate::error::ApplicationError;
use crate::ports::PackingListReadService;

/// Handler for [`GetPackingList`]
pub struct GetPackingListHandler {
    read_service: Arc<dyn PackingListReadService>,
}

impl fmt::Debug for GetPackingListHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetPackingListHandler").finish_non_exhaustive()
    }
}

impl GetPackingListHandler {
    #[must_use]
    pub fn new(read_service: Arc<dyn PackingListReadService>) -> Self {
        Self { read_service }
    }
}

#[async_trait]
impl QueryHandler<GetPackingList> for GetPackingListHandler {
    type Output = Option<PackingListDto>;

    #[instrument(skip(self, query), fields(list_id = %query.id))]
    async fn handle(&self, query: GetPackingList) -> Result<Self::Output, ApplicationError> {
        let id = PackingListId::from_uuid(query.id)?;
        self.read_service.get(&id).await
    }
}
