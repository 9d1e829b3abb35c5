pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;

pub use error::{PlanError, Result};
pub use models::{FitnessGoal, Ingredient, Macros, Meal, MealPlan, ShoppingItem};
