use rand::Rng;

use crate::catalog::Catalog;
use crate::models::{FitnessGoal, MealPlan};
use crate::planner::{aggregate, allocate, build_shopping_list, weekly_protein_need};

/// Assemble a full meal plan: allocate meals under the weekly budget, then
/// derive cost/macro totals and the shopping list.
///
/// Performs no input validation; callers check that budget and weight are
/// positive. A non-positive budget degrades to an empty plan with zero
/// totals rather than an error.
pub fn generate(
    rng: &mut impl Rng,
    catalog: &Catalog,
    goal: FitnessGoal,
    weekly_budget: f64,
    weight_kg: f64,
) -> MealPlan {
    let protein_target = weekly_protein_need(goal, weight_kg);
    let meals = allocate(rng, catalog, goal, weekly_budget, protein_target);
    let totals = aggregate(&meals);
    let shopping_list = build_shopping_list(&meals);

    MealPlan {
        meals,
        total_cost: totals.total_cost,
        total_macros: totals.total_macros,
        shopping_list,
    }
}
