use std::io::Write;

use schema_bindata::schema;

use crate::error::Result;
use crate::utils;

pub fn list() -> Result<()> {
    for name in utils::sorted(schema::asset_names()) {
        println!("{}", name);
    }
    Ok(())
}

pub fn dir(path: &str) -> Result<()> {
    for name in utils::sorted(schema::asset_dir(path)?) {
        println!("{}", name);
    }
    Ok(())
}

pub fn cat(name: &str) -> Result<()> {
    let bytes = schema::asset(name)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(&bytes)?;
    out.flush()?;
    Ok(())
}

pub fn info(name: &str) -> Result<()> {
    let info = schema::asset_info(name)?;
    println!("Name: {}", info.name);
    println!("Size: {} bytes", info.size);
    println!("Mode: {:o}", info.mode);
    println!("Modified: {}", info.mod_time.to_rfc3339());
    Ok(())
}
