pub mod lookup_food;
pub mod search_foods;
