//! Domain Layer
//!
//! Entities shared with the remote meal service.

mod assignment;
mod cost;
mod meal_type;
mod pantry;

pub use assignment::{weekday_label, MealAssignment};
pub use cost::MonthCost;
pub use meal_type::MealType;
pub use pantry::PantryItem;
