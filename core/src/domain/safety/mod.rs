pub mod aggregator;
pub mod classifier;
pub mod entities;
pub mod ports;
pub mod services;

pub use aggregator::{partition, sort_by_severity, summarize};
pub use classifier::classify;
pub use entities::*;
