//! Value Objects - Immutable, identity-less domain primitives

mod gender;
mod localization;
mod packing_item;
mod packing_list_id;
mod packing_list_name;
mod temperature;
mod travel_days;

pub use gender::Gender;
pub use localization::Localization;
pub use packing_item::PackingItem;
pub use packing_list_id::PackingListId;
pub use packing_list_name::PackingListName;
pub use temperature::Temperature;
pub use travel_days::TravelDays;
