pub mod condition;
pub mod matched;
pub mod symptom;
pub mod user_data;
