pub mod db;
pub mod intake;
pub mod nutrition;
pub mod profile;
pub mod sync;
