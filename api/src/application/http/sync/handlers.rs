pub mod flush_pending_writes;
