pub mod entities;
pub mod normalize;
pub mod value_objects;

pub use entities::{FoodItem, ItemSource};
pub use normalize::{normalize_record, normalize_records};
