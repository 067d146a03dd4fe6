//! Row mapping between SQLite and the packing list aggregate

use chrono::{DateTime, Utc};
use domain::{
    Gender, Localization, PackingItem, PackingList, PackingListId, PackingListName, Temperature,
    TravelDays,
};
use rusqlite::{Connection, OptionalExtension, Row, Transaction, params};

use application::ApplicationError;

use super::error::internal;

pub(crate) const LIST_COLUMNS: &str =
    "id, name, days, gender, temperature, city, country, created_at";

/// Raw `packing_lists` row
pub(crate) struct ListRow {
    id: String,
    name: String,
    days: u32,
    gender: String,
    temperature: f64,
    city: String,
    country: String,
    created_at: String,
}

impl ListRow {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            days: row.get(2)?,
            gender: row.get(3)?,
            temperature: row.get(4)?,
            city: row.get(5)?,
            country: row.get(6)?,
            created_at: row.get(7)?,
        })
    }

    pub(crate) fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Rebuild the aggregate; stored values that no longer validate are
    /// reported as corruption
    fn into_list(self, items: Vec<PackingItem>) -> Result<PackingList, ApplicationError> {
        let corrupt = |e: &dyn std::fmt::Display| {
            ApplicationError::Internal(format!("Corrupt packing list row {}: {e}", self.id))
        };

        let id = PackingListId::parse(&self.id).map_err(|e| corrupt(&e))?;
        let name = PackingListName::new(&self.name).map_err(|e| corrupt(&e))?;
        let days = TravelDays::new(self.days).map_err(|e| corrupt(&e))?;
        let gender: Gender = self.gender.parse().map_err(|e| corrupt(&e))?;
        let temperature = Temperature::new(self.temperature).map_err(|e| corrupt(&e))?;
        let localization = Localization::new(&self.city, &self.country).map_err(|e| corrupt(&e))?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| corrupt(&e))?
            .with_timezone(&Utc);

        Ok(PackingList::reconstitute(
            id,
            name,
            days,
            gender,
            temperature,
            localization,
            items,
            created_at,
        ))
    }
}

fn load_items(conn: &Connection, list_id: &str) -> Result<Vec<PackingItem>, ApplicationError> {
    let mut stmt = conn
        .prepare(
            "SELECT name, quantity, is_packed FROM packing_items
             WHERE list_id = ?1 ORDER BY position",
        )
        .map_err(internal)?;

    let rows = stmt
        .query_map([list_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, u32>(1)?,
                row.get::<_, bool>(2)?,
            ))
        })
        .map_err(internal)?;

    rows.map(|row| {
        let (name, quantity, is_packed) = row.map_err(internal)?;
        PackingItem::with_packed(&name, quantity, is_packed).map_err(|e| {
            ApplicationError::Internal(format!("Corrupt packing item on list {list_id}: {e}"))
        })
    })
    .collect()
}

/// Attach items to a list row and rebuild the aggregate
pub(crate) fn hydrate(conn: &Connection, row: ListRow) -> Result<PackingList, ApplicationError> {
    let items = load_items(conn, row.id())?;
    row.into_list(items)
}

/// Load a single list with its items
pub(crate) fn find_list(
    conn: &Connection,
    id: &PackingListId,
) -> Result<Option<PackingList>, ApplicationError> {
    let row = conn
        .query_row(
            &format!("SELECT {LIST_COLUMNS} FROM packing_lists WHERE id = ?1"),
            [id.to_string()],
            ListRow::from_row,
        )
        .optional()
        .map_err(internal)?;

    row.map(|row| hydrate(conn, row)).transpose()
}

/// Replace all items of a list, preserving order as positions
pub(crate) fn write_items(tx: &Transaction<'_>, list: &PackingList) -> rusqlite::Result<()> {
    let list_id = list.id().to_string();
    tx.execute("DELETE FROM packing_items WHERE list_id = ?1", [&list_id])?;

    let mut stmt = tx.prepare(
        "INSERT INTO packing_items (list_id, position, name, quantity, is_packed)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;
    for (position, item) in (0_i64..).zip(list.items()) {
        stmt.execute(params![
            list_id,
            position,
            item.name(),
            item.quantity(),
            item.is_packed()
        ])?;
    }
    Ok(())
}
