use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::FitnessGoal;

/// BudgetMealPlanner — weekly meal plans under a grocery budget, with a
/// deduplicated shopping list.
#[derive(Parser, Debug)]
#[command(name = "budget_meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a weekly meal plan.
    Plan {
        /// Fitness goal. Prompted interactively when omitted.
        #[arg(short, long, value_enum)]
        goal: Option<FitnessGoal>,

        /// Weekly grocery budget. Prompted interactively when omitted.
        #[arg(short, long)]
        budget: Option<f64>,

        /// Body weight in kg. Prompted interactively when omitted.
        #[arg(short, long)]
        weight: Option<f64>,

        /// RNG seed for a reproducible plan.
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a custom catalog JSON file.
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Print the plan as JSON instead of tables.
        #[arg(long)]
        json: bool,

        /// Write the shopping list to a CSV file.
        #[arg(long)]
        shopping_csv: Option<PathBuf>,
    },

    /// Inspect or export the meal template catalog.
    Catalog {
        #[command(subcommand)]
        action: CatalogCommand,
    },

    /// Show daily and weekly protein need for a goal and weight.
    Protein {
        #[arg(short, long, value_enum)]
        goal: Option<FitnessGoal>,

        #[arg(short, long)]
        weight: Option<f64>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// List templates, optionally for a single goal.
    List {
        #[arg(long, value_enum)]
        goal: Option<FitnessGoal>,

        /// Path to a custom catalog JSON file.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Write the built-in catalog to a JSON file.
    Export { path: PathBuf },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            goal: None,
            budget: None,
            weight: None,
            seed: None,
            catalog: None,
            json: false,
            shopping_csv: None,
        }
    }
}
