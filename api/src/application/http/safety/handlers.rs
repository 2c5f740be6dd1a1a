pub mod classify_item;
pub mod evaluate_items;
pub mod evaluate_records;
pub mod partition_items;
