//! SQLite packing list repository
//!
//! Implements `PackingListRepository`. Writes run inside a transaction on a
//! blocking thread.

use std::sync::Arc;

use application::{ApplicationError, ports::PackingListRepository};
use async_trait::async_trait;
use chrono::Utc;
use domain::{PackingList, PackingListId};
use rusqlite::params;
use tokio::task;
use tracing::{debug, instrument};

use super::connection::ConnectionPool;
use super::error::{internal, map_write_error};
use super::rows::{find_list, write_items};

/// SQLite-based packing list repository
#[derive(Debug, Clone)]
pub struct SqlitePackingListRepository {
    pool: Arc<ConnectionPool>,
}

impl SqlitePackingListRepository {
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PackingListRepository for SqlitePackingListRepository {
    #[instrument(skip(self, list), fields(list_id = %list.id(), name = %list.name()))]
    async fn add(&self, list: &PackingList) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let list = list.clone();

        task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(internal)?;
            let name = list.name().as_str().to_string();

            let tx = conn.transaction().map_err(internal)?;
            tx.execute(
                "INSERT INTO packing_lists
                    (id, name, days, gender, temperature, city, country, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
                params![
                    list.id().to_string(),
                    name,
                    list.days().value(),
                    list.gender().as_str(),
                    list.temperature().celsius(),
                    list.localization().city(),
                    list.localization().country(),
                    list.created_at().to_rfc3339(),
                ],
            )
            .map_err(|e| map_write_error(e, &name))?;
            write_items(&tx, &list).map_err(internal)?;
            tx.commit().map_err(internal)?;

            debug!(items = list.items().len(), "Saved packing list");
            Ok(())
        })
        .await
        .map_err(internal)?
    }

    #[instrument(skip(self), fields(list_id = %id))]
    async fn get(&self, id: &PackingListId) -> Result<Option<PackingList>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let id = *id;

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(internal)?;
            find_list(&conn, &id)
        })
        .await
        .map_err(internal)?
    }

    #[instrument(skip(self, list), fields(list_id = %list.id()))]
    async fn update(&self, list: &PackingList) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let list = list.clone();

        task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(internal)?;
            let name = list.name().as_str().to_string();

            let tx = conn.transaction().map_err(internal)?;
            let updated = tx
                .execute(
                    "UPDATE packing_lists
                     SET name = ?2, days = ?3, gender = ?4, temperature = ?5,
                         city = ?6, country = ?7, updated_at = ?8
                     WHERE id = ?1",
                    params![
                        list.id().to_string(),
                        name,
                        list.days().value(),
                        list.gender().as_str(),
                        list.temperature().celsius(),
                        list.localization().city(),
                        list.localization().country(),
                        Utc::now().to_rfc3339(),
                    ],
                )
                .map_err(|e| map_write_error(e, &name))?;

            if updated == 0 {
                return Err(ApplicationError::PackingListNotFound { id: list.id() });
            }

            write_items(&tx, &list).map_err(internal)?;
            tx.commit().map_err(internal)?;

            debug!(items = list.items().len(), "Updated packing list");
            Ok(())
        })
        .await
        .map_err(internal)?
    }

    #[instrument(skip(self), fields(list_id = %id))]
    async fn delete(&self, id: &PackingListId) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let id = *id;

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(internal)?;
            let deleted = conn
                .execute("DELETE FROM packing_lists WHERE id = ?1", [id.to_string()])
                .map_err(internal)?;

            if deleted == 0 {
                return Err(ApplicationError::PackingListNotFound { id });
            }
            debug!("Deleted packing list");
            Ok(())
        })
        .await
        .map_err(internal)?
    }
}
