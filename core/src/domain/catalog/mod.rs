pub mod allergen;
pub mod entities;
pub mod value_objects;
pub mod vocabulary;

pub use allergen::Allergen;
pub use entities::*;
pub use vocabulary::canonical_tag;
