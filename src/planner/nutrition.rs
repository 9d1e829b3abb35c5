use crate::models::FitnessGoal;
use crate::planner::constants::*;

/// Daily protein coefficient for a goal, in grams per kg of body weight.
pub fn protein_per_kg(goal: FitnessGoal) -> f64 {
    match goal {
        FitnessGoal::Fit => PROTEIN_PER_KG_FIT,
        FitnessGoal::Bulk => PROTEIN_PER_KG_BULK,
        FitnessGoal::Healthy => PROTEIN_PER_KG_HEALTHY,
    }
}

/// Daily protein need in grams for a goal and body weight in kg.
pub fn daily_protein_need(goal: FitnessGoal, weight_kg: f64) -> f64 {
    protein_per_kg(goal) * weight_kg
}

/// Weekly protein need in grams.
pub fn weekly_protein_need(goal: FitnessGoal, weight_kg: f64) -> f64 {
    daily_protein_need(goal, weight_kg) * DAYS_PER_WEEK
}
