use std::fmt;
use std::ops::{Add, AddAssign};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Fitness goal driving both the protein rule and the catalog subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FitnessGoal {
    Fit,
    Bulk,
    Healthy,
}

impl FitnessGoal {
    /// Parse a free-form label, falling back to `Healthy` for anything
    /// unrecognized. Matching is case-insensitive.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "fit" => FitnessGoal::Fit,
            "bulk" => FitnessGoal::Bulk,
            _ => FitnessGoal::Healthy,
        }
    }

    pub fn all() -> [FitnessGoal; 3] {
        [FitnessGoal::Fit, FitnessGoal::Bulk, FitnessGoal::Healthy]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FitnessGoal::Fit => "fit",
            FitnessGoal::Bulk => "bulk",
            FitnessGoal::Healthy => "healthy",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Macro-nutrient totals in grams, calories in kcal. Additive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub calories: f64,
}

impl Macros {
    pub fn new(protein: f64, carbs: f64, fat: f64, calories: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
            calories,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.protein >= 0.0 && self.carbs >= 0.0 && self.fat >= 0.0 && self.calories >= 0.0
    }
}

impl Add for Macros {
    type Output = Macros;

    fn add(self, rhs: Macros) -> Macros {
        Macros {
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
            calories: self.calories + rhs.calories,
        }
    }
}

impl AddAssign for Macros {
    fn add_assign(&mut self, rhs: Macros) {
        *self = *self + rhs;
    }
}

/// A single ingredient line within a meal.
///
/// The quantity is a free-form display string ("200g", "1", "2 cloves"),
/// not a structured unit. Identity for shopping-list merging is the
/// lowercased name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
    pub cost: f64,
}

impl Ingredient {
    /// Canonical key for shopping-list lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A meal: either a catalog template or a selected plan entry.
///
/// `cost` is authoritative for budgeting and may diverge from the sum of
/// ingredient costs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    pub macros: Macros,
    pub cost: f64,
    pub instructions: Vec<String>,
}

impl Meal {
    /// Basic validation: non-negative costs and macros.
    pub fn is_valid(&self) -> bool {
        self.cost >= 0.0 && self.macros.is_valid() && self.ingredients.iter().all(|i| i.cost >= 0.0)
    }
}
