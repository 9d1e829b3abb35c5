use rand::SeedableRng;
use rand::rngs::StdRng;

use budget_meal_planner_rs::catalog::Catalog;
use budget_meal_planner_rs::models::{FitnessGoal, Macros, Meal};
use budget_meal_planner_rs::planner::{
    MEALS_PER_WEEK, allocate, allocate_from, daily_protein_need, weekly_protein_need,
};

fn template(id: &str, name: &str, cost: f64) -> Meal {
    Meal {
        id: id.to_string(),
        name: name.to_string(),
        ingredients: vec![],
        macros: Macros::default(),
        cost,
        instructions: vec![],
    }
}

#[test]
fn test_templates_nonempty_with_nonnegative_costs() {
    let catalog = Catalog::builtin();
    for goal in FitnessGoal::all() {
        let templates = catalog.templates_for(goal);
        assert!(!templates.is_empty(), "{} has no templates", goal);
        for meal in templates {
            assert!(meal.cost >= 0.0, "{} has negative cost", meal.id);
        }
    }
}

#[test]
fn test_allocation_bounded_by_fourteen_meals() {
    let catalog = Catalog::builtin();
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        for goal in FitnessGoal::all() {
            let meals = allocate(&mut rng, &catalog, goal, 100_000.0, 1000.0);
            assert!(
                meals.len() <= MEALS_PER_WEEK,
                "seed {} goal {}: {} meals",
                seed,
                goal,
                meals.len()
            );
        }
    }
}

#[test]
fn test_allocation_never_exceeds_budget() {
    let catalog = Catalog::builtin();
    let budgets = [0.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 2000.0];

    for seed in 0..300 {
        let mut rng = StdRng::seed_from_u64(seed);
        for goal in FitnessGoal::all() {
            for &budget in &budgets {
                let meals = allocate(&mut rng, &catalog, goal, budget, 1000.0);
                let total: f64 = meals.iter().map(|m| m.cost).sum();
                assert!(
                    total <= budget,
                    "seed {} goal {} budget {}: total cost {}",
                    seed,
                    goal,
                    budget,
                    total
                );
            }
        }
    }
}

#[test]
fn test_allocated_meals_are_copies_with_fresh_ids() {
    let catalog = Catalog::builtin();
    let mut rng = StdRng::seed_from_u64(17);
    let meals = allocate(&mut rng, &catalog, FitnessGoal::Bulk, 100_000.0, 1120.0);

    assert_eq!(meals.len(), MEALS_PER_WEEK);
    for meal in &meals {
        assert!(meal.id.starts_with("meal-"), "unexpected id {}", meal.id);
        // Catalog template ids are untouched.
        assert!(
            catalog
                .templates_for(FitnessGoal::Bulk)
                .iter()
                .all(|t| t.id != meal.id)
        );
    }
}

#[test]
fn test_fallback_charges_baseline_cost_and_breaks_ties_by_list_order() {
    // The cheap templates cost 10.4, so a jittered pick always rounds to a
    // whole number (9, 10, or 11). A selected cost of exactly 10.4 can
    // therefore only come from the fallback path charging the unjittered
    // baseline. Two templates share that cost; the stable cheapest-first
    // rescan must keep list order and pick the earlier one.
    let templates = vec![
        template("pricey", "Pricey", 30.0),
        template("first-cheap", "First Cheap", 10.4),
        template("second-cheap", "Second Cheap", 10.4),
    ];

    let mut saw_fallback = false;

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let meals = allocate_from(&mut rng, &templates, 10.4, 0.0);

        // Whatever gets sampled first, exactly one meal fits: a cheap
        // template directly, or First Cheap via fallback substitution.
        assert_eq!(meals.len(), 1, "seed {}: expected exactly one meal", seed);

        let meal = &meals[0];
        if meal.cost == 10.4 {
            saw_fallback = true;
            assert_eq!(
                meal.name, "First Cheap",
                "seed {}: tie must resolve to the earlier template",
                seed
            );
        } else {
            assert!(
                meal.cost == 9.0 || meal.cost == 10.0,
                "seed {}: jittered cost {} is not a rounded value",
                seed,
                meal.cost
            );
        }
    }

    assert!(saw_fallback, "no seed exercised the fallback path");
}

#[test]
fn test_protein_need_rule() {
    assert_eq!(daily_protein_need(FitnessGoal::Bulk, 80.0), 160.0);
    assert_eq!(daily_protein_need(FitnessGoal::Fit, 70.0), 105.0);
    assert_eq!(
        daily_protein_need(FitnessGoal::from_label("unknown"), 75.0),
        90.0
    );
    assert_eq!(weekly_protein_need(FitnessGoal::Fit, 70.0), 735.0);
}
