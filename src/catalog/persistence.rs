use std::fs;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::Result;

/// Load a catalog from a JSON file and validate it.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let catalog: Catalog = serde_json::from_str(&content)?;
    catalog.validate()?;
    Ok(catalog)
}

/// Save a catalog to a JSON file.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    Ok(())
}
