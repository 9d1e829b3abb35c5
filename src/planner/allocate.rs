use rand::Rng;

use crate::catalog::Catalog;
use crate::models::{FitnessGoal, Meal};
use crate::planner::constants::*;

/// Allocate up to a week of meals for a goal under a weekly budget.
///
/// `weekly_protein_target` is part of the contract for reporting and future
/// selection logic; the current algorithm fits meals by cost only.
pub fn allocate(
    rng: &mut impl Rng,
    catalog: &Catalog,
    goal: FitnessGoal,
    weekly_budget: f64,
    weekly_protein_target: f64,
) -> Vec<Meal> {
    allocate_from(
        rng,
        catalog.templates_for(goal),
        weekly_budget,
        weekly_protein_target,
    )
}

/// Greedy budget-fitting over an explicit template list.
///
/// Each of up to `MEALS_PER_WEEK` iterations samples a template uniformly,
/// jitters its baseline cost by a factor in [0.9, 1.1), and appends it if
/// the running cost stays within budget. When the sampled meal would
/// overshoot, the templates are rescanned cheapest-first by unjittered
/// baseline cost (stable, so catalog order breaks ties) and the first one
/// that still fits is taken at its baseline cost. Iterations where nothing
/// fits contribute no meal, so the result may be shorter than a full week,
/// or empty for an infeasible budget.
pub fn allocate_from(
    rng: &mut impl Rng,
    templates: &[Meal],
    weekly_budget: f64,
    _weekly_protein_target: f64,
) -> Vec<Meal> {
    let mut selected = Vec::new();
    if templates.is_empty() {
        return selected;
    }

    let mut running_cost = 0.0;

    for i in 0..MEALS_PER_WEEK {
        let template = &templates[rng.gen_range(0..templates.len())];
        let jitter = rng.gen_range(COST_JITTER_MIN..COST_JITTER_MAX);
        let adjusted_cost = (template.cost * jitter).round();

        if running_cost + adjusted_cost > weekly_budget {
            // Fall back to the cheapest template that still fits, at its
            // unjittered baseline cost.
            let mut by_cost: Vec<&Meal> = templates.iter().collect();
            by_cost.sort_by(|a, b| a.cost.total_cmp(&b.cost));

            if let Some(cheaper) = by_cost
                .into_iter()
                .find(|t| running_cost + t.cost <= weekly_budget)
            {
                running_cost += cheaper.cost;
                selected.push(plan_entry(cheaper, i, cheaper.cost));
            }
            continue;
        }

        running_cost += adjusted_cost;
        selected.push(plan_entry(template, i, adjusted_cost));

        if selected.len() >= MEALS_PER_WEEK {
            break;
        }
    }

    selected
}

/// Copy a template into a plan entry with a per-iteration id and the cost
/// actually charged against the budget.
fn plan_entry(template: &Meal, iteration: usize, cost: f64) -> Meal {
    let mut entry = template.clone();
    entry.id = format!("meal-{}", iteration + 1);
    entry.cost = cost;
    entry
}
