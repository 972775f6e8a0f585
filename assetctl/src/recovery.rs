use std::path::Path;

use schema_bindata::schema;

use crate::error::Result;

pub fn restore(name: &str, destination: &Path) -> Result<()> {
    log::debug!("restoring '{}' into {}", name, destination.display());
    schema::restore_assets(destination, name)?;
    let shown = if name.is_empty() { "all assets" } else { name };
    println!("Restored '{}' to {}", shown, destination.display());
    Ok(())
}
