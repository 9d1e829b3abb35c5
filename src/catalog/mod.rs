mod persistence;
mod templates;

pub use persistence::{load_catalog, save_catalog};

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::{FitnessGoal, Meal};

/// Goal-indexed collection of meal templates.
///
/// Template `cost` fields are baselines; the allocator applies a randomized
/// variation on top of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub fit: Vec<Meal>,
    pub bulk: Vec<Meal>,
    pub healthy: Vec<Meal>,
}

impl Catalog {
    /// The built-in template set: four meals per goal.
    pub fn builtin() -> Self {
        Self {
            fit: templates::fit_templates(),
            bulk: templates::bulk_templates(),
            healthy: templates::healthy_templates(),
        }
    }

    /// Templates eligible for a goal, in catalog order. Never fails.
    pub fn templates_for(&self, goal: FitnessGoal) -> &[Meal] {
        match goal {
            FitnessGoal::Fit => &self.fit,
            FitnessGoal::Bulk => &self.bulk,
            FitnessGoal::Healthy => &self.healthy,
        }
    }

    /// Validate that every goal has templates and all of them are sane.
    pub fn validate(&self) -> Result<()> {
        for goal in FitnessGoal::all() {
            let templates = self.templates_for(goal);
            if templates.is_empty() {
                return Err(PlanError::EmptyCatalog(goal.to_string()));
            }
            for meal in templates {
                if !meal.is_valid() {
                    return Err(PlanError::InvalidInput(format!(
                        "template '{}' has negative cost or macros",
                        meal.id
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_nonempty_per_goal() {
        let catalog = Catalog::builtin();
        for goal in FitnessGoal::all() {
            assert!(!catalog.templates_for(goal).is_empty());
        }
    }

    #[test]
    fn test_builtin_validates() {
        assert!(Catalog::builtin().validate().is_ok());
    }

    #[test]
    fn test_builtin_costs_nonnegative() {
        let catalog = Catalog::builtin();
        for goal in FitnessGoal::all() {
            for meal in catalog.templates_for(goal) {
                assert!(meal.cost >= 0.0, "{} has negative cost", meal.id);
                for ing in &meal.ingredients {
                    assert!(ing.cost >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_empty_goal_fails_validation() {
        let mut catalog = Catalog::builtin();
        catalog.bulk.clear();
        assert!(matches!(
            catalog.validate(),
            Err(PlanError::EmptyCatalog(_))
        ));
    }
}
