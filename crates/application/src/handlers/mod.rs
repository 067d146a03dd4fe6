//! Command handlers
//!
//! Each handler owns its collaborators as `Arc<dyn Port>` and is safe to
//! share across tasks.

mod add_packing_item;
mod create_packing_list_with_items;
mod pack_item;
mod remove_packing_item;
mod remove_packing_list;

use async_trait::async_trait;
use domain::{PackingList, PackingListEvent, PackingListId};
use tracing::debug;

pub use add_packing_item::AddPackingItemHandler;
pub use create_packing_list_with_items::{
    CreatePackingListWithItemsHandler, DEFAULT_WEATHER_TIMEOUT,
};
pub use pack_item::PackItemHandler;
pub use remove_packing_item::RemovePackingItemHandler;
pub use remove_packing_list::RemovePackingListHandler;

use crate::error::ApplicationError;
use crate::ports::PackingListRepository;

/// Handles one kind of command
#[async_trait]
pub trait CommandHandler<C: Send + 'static>: Send + Sync {
    /// Execute the command
    async fn handle(&self, command: C) -> Result<(), ApplicationError>;
}

/// Load a list or fail with `PackingListNotFound`
pub(crate) async fn load_packing_list(
    repository: &dyn PackingListRepository,
    id: PackingListId,
) -> Result<PackingList, ApplicationError> {
    repository
        .get(&id)
        .await?
        .ok_or(ApplicationError::PackingListNotFound { id })
}

/// Emit drained aggregate events as debug records
pub(crate) fn log_events(events: Vec<PackingListEvent>) {
    for event in events {
        debug!(event = event.name(), list_id = %event.list_id(), "Domain event");
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use domain::{
        Gender, Localization, PackingItem, PackingList, PackingListFactory, PackingListId,
        PackingListName, Temperature, TravelDays,
    };
    use mockall::mock;

    mock! {
        pub Factory {}

        impl PackingListFactory for Factory {
            fn create_with_default_items(
                &self,
                id: PackingListId,
                name: PackingListName,
                days: TravelDays,
                gender: Gender,
                temperature: Temperature,
                localization: Localization,
            ) -> PackingList;
        }
    }

    /// A stored list with two items, neither packed
    pub fn stored_list(id: PackingListId) -> PackingList {
        PackingList::reconstitute(
            id,
            PackingListName::new("MyList").unwrap(),
            TravelDays::new(10).unwrap(),
            Gender::Female,
            Temperature::new(12.0).unwrap(),
            Localization::new("Warsaw", "Poland").unwrap(),
            vec![
                PackingItem::new("Hat", 1).unwrap(),
                PackingItem::new("Socks", 7).unwrap(),
            ],
            chrono::Utc::now(),
        )
    }
}
