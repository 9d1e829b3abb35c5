use crate::catalog::Catalog;
use crate::models::{FitnessGoal, MealPlan};
use crate::planner::{daily_protein_need, weekly_protein_need};

/// Display a generated meal plan: meals, totals, and shopping list.
pub fn display_meal_plan(plan: &MealPlan, goal: FitnessGoal, weekly_budget: f64, weight_kg: f64) {
    if plan.is_empty() {
        println!("No meals fit the weekly budget of {:.2}.", weekly_budget);
        return;
    }

    println!();
    println!("=== Meal Plan ({}) ===", goal);
    println!();

    let max_name_len = plan.meals.iter().map(|m| m.name.len()).max().unwrap_or(10);

    for (i, meal) in plan.meals.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} - {:>6.2} | P:{:.0}g C:{:.0}g F:{:.0}g {:.0} kcal",
            i + 1,
            meal.name,
            meal.cost,
            meal.macros.protein,
            meal.macros.carbs,
            meal.macros.fat,
            meal.macros.calories,
            width = max_name_len
        );
    }

    let protein_target = weekly_protein_need(goal, weight_kg);

    println!();
    println!("--- Summary ---");
    println!("Meals: {}", plan.meals.len());
    println!(
        "Total cost: {:.2} / {:.2} budget",
        plan.total_cost, weekly_budget
    );
    println!(
        "Macros: P:{:.0}g C:{:.0}g F:{:.0}g {:.0} kcal",
        plan.total_macros.protein,
        plan.total_macros.carbs,
        plan.total_macros.fat,
        plan.total_macros.calories
    );
    println!(
        "Weekly protein: {:.0}g of {:.0}g target",
        plan.total_macros.protein, protein_target
    );

    display_shopping_list(plan);
}

fn display_shopping_list(plan: &MealPlan) {
    if plan.shopping_list.is_empty() {
        return;
    }

    println!();
    println!("=== Shopping List ({} items) ===", plan.shopping_list.len());
    println!();

    let max_name_len = plan
        .shopping_list
        .iter()
        .map(|i| i.name.len())
        .max()
        .unwrap_or(10);

    for item in &plan.shopping_list {
        println!(
            "  {:<width$} {:>6.2}  ({})",
            item.name,
            item.cost,
            item.meals.join(", "),
            width = max_name_len
        );
    }

    let list_total: f64 = plan.shopping_list.iter().map(|i| i.cost).sum();
    println!();
    println!("Shopping list total: {:.2}", list_total);
    println!();
}

/// Display the template set for one goal, or for all goals.
pub fn display_catalog(catalog: &Catalog, goal: Option<FitnessGoal>) {
    let goals: Vec<FitnessGoal> = match goal {
        Some(g) => vec![g],
        None => FitnessGoal::all().to_vec(),
    };

    for goal in goals {
        let templates = catalog.templates_for(goal);
        println!();
        println!("=== {} ({} templates) ===", goal, templates.len());
        println!();

        for meal in templates {
            println!(
                "  {} [{}] - {:.2} | P:{:.0}g C:{:.0}g F:{:.0}g {:.0} kcal",
                meal.name,
                meal.id,
                meal.cost,
                meal.macros.protein,
                meal.macros.carbs,
                meal.macros.fat,
                meal.macros.calories
            );
            for ing in &meal.ingredients {
                println!("      {} ({}) - {:.2}", ing.name, ing.quantity, ing.cost);
            }
        }
    }
    println!();
}

/// Display daily and weekly protein need for a goal and weight.
pub fn display_protein_need(goal: FitnessGoal, weight_kg: f64) {
    println!(
        "Daily protein need ({}, {:.1} kg): {:.0}g",
        goal,
        weight_kg,
        daily_protein_need(goal, weight_kg)
    );
    println!(
        "Weekly protein need: {:.0}g",
        weekly_protein_need(goal, weight_kg)
    );
}
