//! Application layer - Use cases and orchestration
//!
//! Contains commands, command and query handlers, read-side DTOs and the
//! port definitions the infrastructure layer implements.

pub mod commands;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod ports;
pub mod queries;

pub use commands::*;
pub use dto::{LocalizationDto, PackingItemDto, PackingListDto};
pub use error::ApplicationError;
pub use handlers::*;
pub use ports::*;
pub use queries::*;
