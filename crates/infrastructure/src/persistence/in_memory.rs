//! In-memory packing list store
//!
//! Serves as both repository and read service over one shared map.

use std::collections::HashMap;

use application::{
    ApplicationError, PackingListDto, SearchPackingLists,
    ports::{PackingListReadService, PackingListRepository},
};
use async_trait::async_trait;
use domain::{PackingList, PackingListId};
use parking_lot::RwLock;
use tracing::{debug, instrument};

/// Thread-safe in-memory store
#[derive(Debug, Default)]
pub struct InMemoryPackingListStore {
    lists: RwLock<HashMap<PackingListId, PackingList>>,
}

impl InMemoryPackingListStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored lists
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.read().is_empty()
    }

    fn name_taken(
        lists: &HashMap<PackingListId, PackingList>,
        name: &str,
        except: Option<PackingListId>,
    ) -> bool {
        let name = name.trim().to_lowercase();
        lists
            .values()
            .any(|l| Some(l.id()) != except && l.name().as_str().to_lowercase() == name)
    }

    fn snapshot(list: &PackingList) -> PackingList {
        let mut stored = list.clone();
        stored.take_events();
        stored
    }
}

#[async_trait]
impl PackingListRepository for InMemoryPackingListStore {
    #[instrument(skip(self, list), fields(list_id = %list.id()))]
    async fn add(&self, list: &PackingList) -> Result<(), ApplicationError> {
        let mut lists = self.lists.write();
        if Self::name_taken(&lists, list.name().as_str(), None) {
            return Err(ApplicationError::PackingListAlreadyExists {
                name: list.name().as_str().to_string(),
            });
        }
        if lists.contains_key(&list.id()) {
            return Err(ApplicationError::Internal(format!(
                "Packing list id {} is already stored",
                list.id()
            )));
        }
        lists.insert(list.id(), Self::snapshot(list));
        debug!("Stored packing list");
        Ok(())
    }

    async fn get(&self, id: &PackingListId) -> Result<Option<PackingList>, ApplicationError> {
        Ok(self.lists.read().get(id).cloned())
    }

    #[instrument(skip(self, list), fields(list_id = %list.id()))]
    async fn update(&self, list: &PackingList) -> Result<(), ApplicationError> {
        let mut lists = self.lists.write();
        if !lists.contains_key(&list.id()) {
            return Err(ApplicationError::PackingListNotFound { id: list.id() });
        }
        if Self::name_taken(&lists, list.name().as_str(), Some(list.id())) {
            return Err(ApplicationError::PackingListAlreadyExists {
                name: list.name().as_str().to_string(),
            });
        }
        lists.insert(list.id(), Self::snapshot(list));
        Ok(())
    }

    async fn delete(&self, id: &PackingListId) -> Result<(), ApplicationError> {
        self.lists
            .write()
            .remove(id)
            .map(|_| ())
            .ok_or(ApplicationError::PackingListNotFound { id: *id })
    }
}

#[async_trait]
impl PackingListReadService for InMemoryPackingListStore {
    async fn exists_by_name(&self, name: &str) -> Result<bool, ApplicationError> {
        Ok(Self::name_taken(&self.lists.read(), name, None))
    }

    async fn get(&self, id: &PackingListId) -> Result<Option<PackingListDto>, ApplicationError> {
        Ok(self.lists.read().get(id).map(PackingListDto::from))
    }

    async fn search(
        &self,
        query: &SearchPackingLists,
    ) -> Result<Vec<PackingListDto>, ApplicationError> {
        let mut found: Vec<PackingListDto> = self
            .lists
            .read()
            .values()
            .filter(|l| query.matches(l.name().as_str()))
            .map(PackingListDto::from)
            .collect();
        found.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then(a.id.cmp(&b.id))
        });
        Ok(found)
    }
}
