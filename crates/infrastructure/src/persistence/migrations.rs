//! Database migrations
//!
//! Schema versions are applied in order and recorded in `schema_version`.
//! Each migration runs in its own transaction.
//!
//! ## Adding New Migrations
//!
//! 1. Add a `migrate_vN` function
//! 2. Append it to `MIGRATIONS`

use rusqlite::Connection;
use tracing::{debug, error, info};

use super::connection::DatabaseError;

type Migration = fn(&Connection) -> Result<(), DatabaseError>;

/// Ordered migrations; index + 1 is the version
const MIGRATIONS: &[(&str, Migration)] = &[
    ("packing lists", migrate_v1),
    ("list update timestamps", migrate_v2),
];

/// Current schema version
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const SCHEMA_VERSION: i32 = MIGRATIONS.len() as i32;

/// Run all pending migrations
pub fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    let current_version = get_schema_version(conn)?;

    if current_version >= SCHEMA_VERSION {
        debug!(version = current_version, "Database schema is up to date");
        return Ok(());
    }

    info!(
        from_version = current_version,
        to_version = SCHEMA_VERSION,
        "Running database migrations"
    );

    for (version, (description, migrate)) in (1..).zip(MIGRATIONS) {
        if version <= current_version {
            continue;
        }
        conn.execute_batch("BEGIN")?;
        let outcome = migrate(conn).and_then(|()| set_schema_version(conn, version));
        match outcome {
            Ok(()) => conn.execute_batch("COMMIT")?,
            Err(e) => {
                error!(version, description, error = %e, "Migration failed");
                conn.execute_batch("ROLLBACK")?;
                return Err(DatabaseError::Migration(format!(
                    "V{version:03} ({description}): {e}"
                )));
            },
        }
    }

    info!(version = SCHEMA_VERSION, "Database migrations complete");
    Ok(())
}

/// Get current schema version
pub fn get_schema_version(conn: &Connection) -> Result<i32, DatabaseError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        )",
        [],
    )?;

    let version = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM schema_version", [])?;
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// V001: lists and their ordered items
fn migrate_v1(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(
        "
        CREATE TABLE packing_lists (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL COLLATE NOCASE UNIQUE,
            days INTEGER NOT NULL CHECK (days BETWEEN 1 AND 100),
            gender TEXT NOT NULL CHECK (gender IN ('male', 'female')),
            temperature REAL NOT NULL,
            city TEXT NOT NULL,
            country TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE packing_items (
            list_id TEXT NOT NULL REFERENCES packing_lists(id) ON DELETE CASCADE,
            position INTEGER NOT NULL,
            name TEXT NOT NULL,
            quantity INTEGER NOT NULL CHECK (quantity >= 1),
            is_packed INTEGER NOT NULL DEFAULT 0,
            PRIMARY KEY (list_id, position),
            UNIQUE (list_id, name)
        );
        ",
    )?;
    Ok(())
}

/// V002: track the last write to a list
fn migrate_v2(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(
        "
        ALTER TABLE packing_lists ADD COLUMN updated_at TEXT;
        UPDATE packing_lists SET updated_at = created_at;
        ",
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_exists(conn: &Connection, name: &str) -> bool {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [name],
            |row| row.get::<_, i64>(0),
        )
        .unwrap()
            > 0
    }

    #[test]
    fn migrations_create_tables() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        assert!(table_exists(&conn, "packing_lists"));
        assert!(table_exists(&conn, "packing_items"));
        assert_eq!(get_schema_version(&conn).unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn upgrade_from_v1_backfills_updated_at() {
        let conn = Connection::open_in_memory().unwrap();
        get_schema_version(&conn).unwrap();
        migrate_v1(&conn).unwrap();
        set_schema_version(&conn, 1).unwrap();
        conn.execute(
            "INSERT INTO packing_lists (id, name, days, gender, temperature, city, country, created_at)
             VALUES ('a', 'Trip', 3, 'male', 20.0, 'Rome', 'Italy', '2024-01-01T00:00:00Z')",
            [],
        )
        .unwrap();

        run_migrations(&conn).unwrap();

        let updated_at: String = conn
            .query_row("SELECT updated_at FROM packing_lists", [], |row| row.get(0))
            .unwrap();
        assert_eq!(updated_at, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn list_names_are_unique_ignoring_case() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        let insert = "INSERT INTO packing_lists (id, name, days, gender, temperature, city, country, created_at)
                      VALUES (?1, ?2, 3, 'male', 20.0, 'Rome', 'Italy', '2024-01-01T00:00:00Z')";

        conn.execute(insert, ["a", "MyList"]).unwrap();
        let err = conn.execute(insert, ["b", "mylist"]).unwrap_err();
        assert!(err.to_string().contains("UNIQUE"));
    }
}
