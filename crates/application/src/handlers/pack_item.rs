//! Mark an item on a list as packed

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use domain::PackingListId;
use tracing::{debug, instrument};

use super::{CommandHandler, load_packing_list, log_events};
use crate::commands::PackItem;
use crate::error::ApplicationError;
use crate::ports::PackingListRepository;

/// Handler for [`PackItem`]
pub struct PackItemHandler {
    repository: Arc<dyn PackingListRepository>,
}

impl fmt::Debug for PackItemHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackItemHandler").finish_non_exhaustive()
    }
}

impl PackItemHandler {
    #[must_use]
    pub fn new(repository: Arc<dyn PackingListRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CommandHandler<PackItem> for PackItemHandler {
    #[instrument(skip(self, command), fields(list_id = %command.list_id, item = %command.name))]
    async fn handle(&self, command: PackItem) -> Result<(), ApplicationError> {
        let id = PackingListId::from_uuid(command.list_id)?;

        let mut list = load_packing_list(self.repository.as_ref(), id).await?;
        list.pack_item(&command.name)?;
        self.repository.update(&list).await?;

        debug!(
            packed = list.packed_count(),
            total = list.items().len(),
            "Item packed"
        );
        log_events(list.take_events());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use domain::DomainError;

    use super::*;
    use crate::handlers::test_support::stored_list;
    use crate::ports::MockPackingListRepository;

    #[tokio::test]
    async fn packs_item() {
        let id = PackingListId::new();
        let mut repository = MockPackingListRepository::new();
        repository
            .expect_get()
            .returning(move |_| Ok(Some(stored_list(id))));
        repository
            .expect_update()
            .withf(|list| {
                list.item("Hat").is_some_and(|i| i.is_packed())
                    && list.item("Socks").is_some_and(|i| !i.is_packed())
            })
            .times(1)
            .returning(|_| Ok(()));

        let handler = PackItemHandler::new(Arc::new(repository));
        let result = handler
            .handle(PackItem {
                list_id: id.as_uuid(),
                name: "Hat".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn missing_item_is_reported() {
        let id = PackingListId::new();
        let mut repository = MockPackingListRepository::new();
        repository
            .expect_get()
            .returning(move |_| Ok(Some(stored_list(id))));
        repository.expect_update().never();

        let handler = PackItemHandler::new(Arc::new(repository));
        let result = handler
            .handle(PackItem {
                list_id: id.as_uuid(),
                name: "Umbrella".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::PackingItemNotFound(name))) if name == "Umbrella"
        ));
    }
}
