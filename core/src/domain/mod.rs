pub mod catalog;
pub mod common;
pub mod food_item;
pub mod health;
pub mod intake;
pub mod nutrition;
pub mod profile;
pub mod safety;
pub mod sync;
