mod meal;
mod plan;

pub use meal::{FitnessGoal, Ingredient, Macros, Meal};
pub use plan::{MealPlan, PlanTotals, ShoppingItem};
