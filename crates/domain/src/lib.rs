//! Domain layer for PackIT
//!
//! Contains the packing list aggregate, its value objects, domain events,
//! the default-item policies and the factory that applies them.
//! This layer has no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod events;
pub mod factory;
pub mod policies;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use events::PackingListEvent;
pub use factory::{DefaultPackingListFactory, PackingListFactory};
pub use policies::{PackingItemsPolicy, PolicyData};
pub use value_objects::*;
