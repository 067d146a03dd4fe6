//! Database connection management
//!
//! SQLite connection pooling via r2d2. Every pooled connection gets the same
//! PRAGMAs, so foreign keys hold on all of them.

use std::path::Path;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::DatabaseConfig;

/// Database errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Failed to create database directory: {0}")]
    Directory(#[from] std::io::Error),
}

/// SQLite connection pool type alias
pub type ConnectionPool = Pool<SqliteConnectionManager>;

const FILE_PRAGMAS: &str = "
    PRAGMA foreign_keys = ON;
    PRAGMA journal_mode = WAL;
    PRAGMA synchronous = NORMAL;
    PRAGMA busy_timeout = 5000;
";

const MEMORY_PRAGMAS: &str = "PRAGMA foreign_keys = ON;";

fn init_file_connection(conn: &mut Connection) -> rusqlite::Result<()> {
    conn.execute_batch(FILE_PRAGMAS)
}

fn init_memory_connection(conn: &mut Connection) -> rusqlite::Result<()> {
    conn.execute_batch(MEMORY_PRAGMAS)
}

/// Create a new connection pool and bring the schema up to date
///
/// An in-memory database lives inside a single connection, so the pool is
/// capped at one connection for `:memory:`.
pub fn create_pool(config: &DatabaseConfig) -> Result<ConnectionPool, DatabaseError> {
    info!(path = %config.path, max_connections = config.max_connections, "Creating database connection pool");

    let (manager, max_size) = if config.is_in_memory() {
        (
            SqliteConnectionManager::memory().with_init(init_memory_connection),
            1,
        )
    } else {
        if let Some(parent) = Path::new(&config.path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        (
            SqliteConnectionManager::file(&config.path).with_init(init_file_connection),
            config.max_connections.max(1),
        )
    };

    let pool = Pool::builder().max_size(max_size).build(manager)?;

    if config.run_migrations {
        let conn = pool.get()?;
        crate::persistence::migrations::run_migrations(&conn)?;
    }

    debug!("Database connection pool created successfully");
    Ok(pool)
}
