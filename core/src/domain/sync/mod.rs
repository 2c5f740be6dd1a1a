pub mod entities;
pub mod ports;

pub use entities::PendingWrite;
pub use ports::PendingSyncQueue;
