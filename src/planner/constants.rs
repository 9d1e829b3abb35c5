/// Meals per plan week: lunch and dinner for 7 days.
pub const MEALS_PER_WEEK: usize = 14;

/// Days covered by one plan.
pub const DAYS_PER_WEEK: f64 = 7.0;

/// Cost jitter range applied to a sampled template's baseline cost.
pub const COST_JITTER_MIN: f64 = 0.9;
pub const COST_JITTER_MAX: f64 = 1.1;

/// Protein coefficients in grams per kilogram of body weight per day.
pub const PROTEIN_PER_KG_FIT: f64 = 1.5;
pub const PROTEIN_PER_KG_BULK: f64 = 2.0;
pub const PROTEIN_PER_KG_HEALTHY: f64 = 1.2;
