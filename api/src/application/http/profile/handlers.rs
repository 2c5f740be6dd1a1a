pub mod get_profile;
pub mod get_restrictions;
pub mod preview_profile;
pub mod save_profile;
