use std::path::Path;

use crate::error::Result;
use crate::models::ShoppingItem;

/// Write the shopping list as CSV: name, quantity, cost, meals.
///
/// Meal names are joined with "; " into a single column.
pub fn write_shopping_csv(path: &Path, items: &[ShoppingItem]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["name", "quantity", "cost", "meals"])?;

    for item in items {
        wtr.write_record([
            item.name.as_str(),
            item.quantity.as_str(),
            &format!("{:.2}", item.cost),
            &item.meals.join("; "),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
