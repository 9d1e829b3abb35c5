use std::path::{Path, PathBuf};

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use budget_meal_planner_rs::catalog::{Catalog, load_catalog, save_catalog};
use budget_meal_planner_rs::cli::{CatalogCommand, Cli, Command};
use budget_meal_planner_rs::error::Result;
use budget_meal_planner_rs::interface::{
    collect_plan_inputs, display_catalog, display_meal_plan, display_protein_need,
    prompt_goal, prompt_weight, write_shopping_csv,
};
use budget_meal_planner_rs::models::FitnessGoal;
use budget_meal_planner_rs::planner::generate;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            goal,
            budget,
            weight,
            seed,
            catalog,
            json,
            shopping_csv,
        } => cmd_plan(goal, budget, weight, seed, catalog, json, shopping_csv),
        Command::Catalog { action } => match action {
            CatalogCommand::List { goal, catalog } => cmd_catalog_list(goal, catalog),
            CatalogCommand::Export { path } => cmd_catalog_export(&path),
        },
        Command::Protein { goal, weight } => cmd_protein(goal, weight),
    }
}

/// Generate and display a weekly meal plan.
fn cmd_plan(
    goal: Option<FitnessGoal>,
    budget: Option<f64>,
    weight: Option<f64>,
    seed: Option<u64>,
    catalog_path: Option<PathBuf>,
    json: bool,
    shopping_csv: Option<PathBuf>,
) -> Result<()> {
    let catalog = resolve_catalog(catalog_path.as_deref())?;
    let (goal, budget, weight) = collect_plan_inputs(goal, budget, weight)?;

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let plan = generate(&mut rng, &catalog, goal, budget, weight);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_meal_plan(&plan, goal, budget, weight);
    }

    if let Some(path) = shopping_csv {
        write_shopping_csv(&path, &plan.shopping_list)?;
        println!("Wrote shopping list to {}", path.display());
    }

    Ok(())
}

/// List catalog templates.
fn cmd_catalog_list(goal: Option<FitnessGoal>, catalog_path: Option<PathBuf>) -> Result<()> {
    let catalog = resolve_catalog(catalog_path.as_deref())?;
    display_catalog(&catalog, goal);
    Ok(())
}

/// Write the built-in catalog to a JSON file.
fn cmd_catalog_export(path: &Path) -> Result<()> {
    let catalog = Catalog::builtin();
    save_catalog(path, &catalog)?;
    println!("Wrote built-in catalog to {}", path.display());
    Ok(())
}

/// Show protein needs for a goal and weight.
fn cmd_protein(goal: Option<FitnessGoal>, weight: Option<f64>) -> Result<()> {
    let goal = match goal {
        Some(g) => g,
        None => prompt_goal()?,
    };
    let weight = match weight {
        Some(w) => w,
        None => prompt_weight()?,
    };

    display_protein_need(goal, weight);
    Ok(())
}

fn resolve_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(p) => load_catalog(p),
        None => Ok(Catalog::builtin()),
    }
}
