use dialoguer::{Input, Select};

use crate::error::{PlanError, Result};
use crate::models::FitnessGoal;

/// Prompt for a fitness goal.
pub fn prompt_goal() -> Result<FitnessGoal> {
    let goals = FitnessGoal::all();
    let labels: Vec<&str> = goals.iter().map(|g| g.label()).collect();

    let selection = Select::new()
        .with_prompt("What is your fitness goal?")
        .items(&labels)
        .default(2) // healthy
        .interact()?;

    Ok(goals[selection])
}

/// Prompt for the weekly grocery budget. Must be a finite positive number.
pub fn prompt_budget() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("What is your weekly grocery budget?")
        .interact_text()?;

    let budget: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))?;

    validate_positive(budget, "budget")?;
    Ok(budget)
}

/// Prompt for body weight in kilograms.
pub fn prompt_weight() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("What is your body weight in kg?")
        .default("75".to_string())
        .interact_text()?;

    let weight: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))?;

    validate_positive(weight, "weight")?;
    Ok(weight)
}

/// Resolve plan inputs, prompting for anything not supplied on the command
/// line. This is the validation boundary: the planner itself accepts any
/// numbers and degrades gracefully, so bad values are rejected here.
pub fn collect_plan_inputs(
    goal: Option<FitnessGoal>,
    budget: Option<f64>,
    weight: Option<f64>,
) -> Result<(FitnessGoal, f64, f64)> {
    let goal = match goal {
        Some(g) => g,
        None => prompt_goal()?,
    };

    let budget = match budget {
        Some(b) => {
            validate_positive(b, "budget")?;
            b
        }
        None => prompt_budget()?,
    };

    let weight = match weight {
        Some(w) => {
            validate_positive(w, "weight")?;
            w
        }
        None => prompt_weight()?,
    };

    Ok((goal, budget, weight))
}

fn validate_positive(value: f64, what: &str) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PlanError::InvalidInput(format!(
            "{} must be a positive number, got {}",
            what, value
        )));
    }
    Ok(())
}
