//! Persistence module
//!
//! SQLite storage for packing lists plus an in-memory store.

pub mod connection;
mod error;
mod in_memory;
pub mod migrations;
mod packing_list_read_service;
mod packing_list_repository;
mod rows;

pub use connection::{ConnectionPool, DatabaseError, create_pool};
pub use in_memory::InMemoryPackingListStore;
pub use packing_list_read_service::SqlitePackingListReadService;
pub use packing_list_repository::SqlitePackingListRepository;
