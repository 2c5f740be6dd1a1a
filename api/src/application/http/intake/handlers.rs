pub mod delete_intake;
pub mod get_daily_summary;
pub mod log_intake;
