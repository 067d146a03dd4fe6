//! SQLite read side for packing lists

use std::sync::Arc;

use application::{
    ApplicationError, PackingListDto, SearchPackingLists, ports::PackingListReadService,
};
use async_trait::async_trait;
use domain::PackingListId;
use tokio::task;
use tracing::{debug, instrument};

use super::connection::ConnectionPool;
use super::error::internal;
use super::rows::{LIST_COLUMNS, ListRow, find_list, hydrate};

/// SQLite-based packing list queries
#[derive(Debug, Clone)]
pub struct SqlitePackingListReadService {
    pool: Arc<ConnectionPool>,
}

impl SqlitePackingListReadService {
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PackingListReadService for SqlitePackingListReadService {
    #[instrument(skip(self))]
    async fn exists_by_name(&self, name: &str) -> Result<bool, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let name = name.trim().to_string();

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(internal)?;
            conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM packing_lists WHERE name = ?1)",
                [&name],
                |row| row.get(0),
            )
            .map_err(internal)
        })
        .await
        .map_err(internal)?
    }

    #[instrument(skip(self), fields(list_id = %id))]
    async fn get(&self, id: &PackingListId) -> Result<Option<PackingListDto>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let id = *id;

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(internal)?;
            Ok(find_list(&conn, &id)?.as_ref().map(PackingListDto::from))
        })
        .await
        .map_err(internal)?
    }

    #[instrument(skip(self))]
    async fn search(
        &self,
        query: &SearchPackingLists,
    ) -> Result<Vec<PackingListDto>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let query = query.clone();

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(internal)?;
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {LIST_COLUMNS} FROM packing_lists
                     ORDER BY name COLLATE NOCASE, id"
                ))
                .map_err(internal)?;

            // SQLite lower() only folds ASCII, so matching happens here
            let rows = stmt
                .query_map([], ListRow::from_row)
                .map_err(internal)?
                .filter(|row| row.as_ref().map_or(true, |r| query.matches(r.name())))
                .collect::<Result<Vec<_>, _>>()
                .map_err(internal)?;

            let lists = rows
                .into_iter()
                .map(|row| hydrate(&conn, row).map(|list| PackingListDto::from(&list)))
                .collect::<Result<Vec<_>, _>>()?;

            debug!(count = lists.len(), "Searched packing lists");
            Ok(lists)
        })
        .await
        .map_err(internal)?
    }
}
