//! Remove an item from a packing list

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use domain::PackingListId;
use tracing::{info, instrument};

use super::{CommandHandler, load_packing_list, log_events};
use crate::commands::RemovePackingItem;
use crate::error::ApplicationError;
use crate::ports::PackingListRepository;

/// Handler for [`RemovePackingItem`]
pub struct RemovePackingItemHandler {
    repository: Arc<dyn PackingListRepository>,
}

impl fmt::Debug for RemovePackingItemHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemovePackingItemHandler")
            .finish_non_exhaustive()
    }
}

impl RemovePackingItemHandler {
    #[must_use]
    pub fn new(repository: Arc<dyn PackingListRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CommandHandler<RemovePackingItem> for RemovePackingItemHandler {
    #[instrument(skip(self, command), fields(list_id = %command.list_id, item = %command.name))]
    async fn handle(&self, command: RemovePackingItem) -> Result<(), ApplicationError> {
        let id = PackingListId::from_uuid(command.list_id)?;

        let mut list = load_packing_list(self.repository.as_ref(), id).await?;
        list.remove_item(&command.name)?;
        self.repository.update(&list).await?;

        info!("Item removed");
        log_events(list.take_events());
        Ok(())
    }
}
