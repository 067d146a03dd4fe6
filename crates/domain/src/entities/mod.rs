//! Domain entities - Objects with identity and lifecycle

mod packing_list;

pub use packing_list::PackingList;
