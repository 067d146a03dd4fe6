//! Delete a packing list

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use domain::PackingListId;
use tracing::{info, instrument};

use super::{CommandHandler, load_packing_list};
use crate::commands::RemovePackingList;
use crate::error::ApplicationError;
use crate::ports::PackingListRepository;

/// Handler for [`RemovePackingList`]
pub struct RemovePackingListHandler {
    repository: Arc<dyn PackingListRepository>,
}

impl fmt::Debug for RemovePackingListHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemovePackingListHandler")
            .finish_non_exhaustive()
    }
}

impl RemovePackingListHandler {
    #[must_use]
    pub fn new(repository: Arc<dyn PackingListRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CommandHandler<RemovePackingList> for RemovePackingListHandler {
    #[instrument(skip(self, command), fields(list_id = %command.id))]
    async fn handle(&self, command: RemovePackingList) -> Result<(), ApplicationError> {
        let id = PackingListId::from_uuid(command.id)?;

        let list = load_packing_list(self.repository.as_ref(), id).await?;
        self.repository.delete(&id).await?;

        info!(name = %list.name(), "Packing list removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::handlers::test_support::stored_list;
    use crate::ports::MockPackingListRepository;

    #[tokio::test]
    async fn deletes_existing_list() {
        let id = PackingListId::new();
        let mut repository = MockPackingListRepository::new();
        repository
            .expect_get()
            .returning(move |_| Ok(Some(stored_list(id))));
        repository
            .expect_delete()
            .withf(move |deleted| *deleted == id)
            .times(1)
            .returning(|_| Ok(()));

        let handler = RemovePackingListHandler::new(Arc::new(repository));
        let result = handler
            .handle(RemovePackingList { id: id.as_uuid() })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn unknown_list_is_not_found() {
        let mut repository = MockPackingListRepository::new();
        repository.expect_get().returning(|_| Ok(None));
        repository.expect_delete().never();

        let handler = RemovePackingListHandler::new(Arc::new(repository));
        let result = handler
            .handle(RemovePackingList { id: Uuid::new_v4() })
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::PackingListNotFound { .. })
        ));
    }
}
