use serde::{Deserialize, Serialize};

use crate::models::{Macros, Meal};

/// A shopping-list entry: one distinct ingredient merged across the plan.
///
/// `cost` is the sum of the ingredient's cost over every occurrence in the
/// plan. `meals` lists the names of the meals using it, first-use order,
/// deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub name: String,
    pub quantity: String,
    pub cost: f64,
    pub meals: Vec<String>,
}

/// Aggregate cost and macro totals for a set of meals.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlanTotals {
    pub total_cost: f64,
    pub total_macros: Macros,
}

/// The complete generated plan: the one externally visible payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    pub meals: Vec<Meal>,
    pub total_cost: f64,
    pub total_macros: Macros,
    pub shopping_list: Vec<ShoppingItem>,
}

impl MealPlan {
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
