//! Add an item to an existing packing list

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use domain::{PackingItem, PackingListId};
use tracing::{info, instrument};

use super::{CommandHandler, load_packing_list, log_events};
use crate::commands::AddPackingItem;
use crate::error::ApplicationError;
use crate::ports::PackingListRepository;

/// Handler for [`AddPackingItem`]
pub struct AddPackingItemHandler {
    repository: Arc<dyn PackingListRepository>,
}

impl fmt::Debug for AddPackingItemHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddPackingItemHandler").finish_non_exhaustive()
    }
}

impl AddPackingItemHandler {
    #[must_use]
    pub fn new(repository: Arc<dyn PackingListRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CommandHandler<AddPackingItem> for AddPackingItemHandler {
    #[instrument(skip(self, command), fields(list_id = %command.list_id, item = %command.name))]
    async fn handle(&self, command: AddPackingItem) -> Result<(), ApplicationError> {
        let id = PackingListId::from_uuid(command.list_id)?;
        let item = PackingItem::new(&command.name, command.quantity)?;

        let mut list = load_packing_list(self.repository.as_ref(), id).await?;
        list.add_item(item)?;
        self.repository.update(&list).await?;

        info!(quantity = command.quantity, "Item added");
        log_events(list.take_events());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use domain::DomainError;
    use uuid::Uuid;

    use super::*;
    use crate::handlers::test_support::stored_list;
    use crate::ports::MockPackingListRepository;

    fn command(list_id: Uuid, name: &str) -> AddPackingItem {
        AddPackingItem {
            list_id,
            name: name.to_string(),
            quantity: 2,
        }
    }

    #[tokio::test]
    async fn adds_item_and_updates() {
        let id = PackingListId::new();
        let mut repository = MockPackingListRepository::new();
        repository
            .expect_get()
            .times(1)
            .returning(move |_| Ok(Some(stored_list(id))));
        repository
            .expect_update()
            .withf(|list| {
                list.items().len() == 3
                    && list.item("Scarf").is_some_and(|i| i.quantity() == 2)
            })
            .times(1)
            .returning(|_| Ok(()));

        let handler = AddPackingItemHandler::new(Arc::new(repository));
        let result = handler.handle(command(id.as_uuid(), "Scarf")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn unknown_list_is_not_found() {
        let mut repository = MockPackingListRepository::new();
        repository.expect_get().times(1).returning(|_| Ok(None));
        repository.expect_update().never();

        let handler = AddPackingItemHandler::new(Arc::new(repository));
        let result = handler.handle(command(Uuid::new_v4(), "Scarf")).await;

        assert!(matches!(
            result,
            Err(ApplicationError::PackingListNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn duplicate_item_is_rejected() {
        let id = PackingListId::new();
        let mut repository = MockPackingListRepository::new();
        repository
            .expect_get()
            .returning(move |_| Ok(Some(stored_list(id))));
        repository.expect_update().never();

        let handler = AddPackingItemHandler::new(Arc::new(repository));
        let result = handler.handle(command(id.as_uuid(), "Hat")).await;

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::PackingItemAlreadyExists { .. }))
        ));
    }

    #[tokio::test]
    async fn zero_quantity_fails_before_loading() {
        let mut repository = MockPackingListRepository::new();
        repository.expect_get().never();

        let handler = AddPackingItemHandler::new(Arc::new(repository));
        let mut cmd = command(Uuid::new_v4(), "Scarf");
        cmd.quantity = 0;
        let result = handler.handle(cmd).await;

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::InvalidPackingItemQuantity(0)))
        ));
    }
}
