pub mod catalog;
pub mod health;
pub mod intake;
pub mod nutrition;
pub mod profile;
pub mod safety;
pub mod server;
pub mod sync;

#[cfg(test)]
pub mod test;
