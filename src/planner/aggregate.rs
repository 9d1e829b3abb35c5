use crate::models::{Macros, Meal, PlanTotals};

/// Sum cost and macro totals over a list of meals.
///
/// Total cost comes from each meal's `cost` field, not from its
/// ingredients. Empty input yields zero totals.
pub fn aggregate(meals: &[Meal]) -> PlanTotals {
    let total_cost = meals.iter().map(|m| m.cost).sum();
    let total_macros = meals
        .iter()
        .fold(Macros::default(), |acc, m| acc + m.macros);

    PlanTotals {
        total_cost,
        total_macros,
    }
}
