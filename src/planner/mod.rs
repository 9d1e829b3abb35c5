pub mod aggregate;
pub mod allocate;
pub mod constants;
pub mod generate;
pub mod nutrition;
pub mod shopping;

pub use aggregate::aggregate;
pub use allocate::{allocate, allocate_from};
pub use constants::*;
pub use generate::generate;
pub use nutrition::{daily_protein_need, protein_per_kg, weekly_protein_need};
pub use shopping::build_shopping_list;
