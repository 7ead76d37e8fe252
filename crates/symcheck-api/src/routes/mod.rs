pub mod assessments;
pub mod conditions;
pub mod health;
pub mod suggestions;
pub mod symptoms;
