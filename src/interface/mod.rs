pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_shopping_csv;
pub use prompts::{collect_plan_inputs, prompt_budget, prompt_goal, prompt_weight};
pub use render::{display_catalog, display_meal_plan, display_protein_need};
