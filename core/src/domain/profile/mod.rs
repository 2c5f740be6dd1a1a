pub mod builder;
pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use builder::{build_profile, build_profile_from_sources, derive_profile};
pub use entities::*;
pub use ports::*;
pub use value_objects::*;
