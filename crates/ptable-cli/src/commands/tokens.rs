use crate::config::AppConfig;
use crate::error::Result;
use crate::render;
use ptable::workflows::table::PeriodicTable;

pub fn run_columns(config: &AppConfig) -> Result<()> {
    println!(
        "{}",
        render::columns(PeriodicTable::columns(), config.format)?.trim_end()
    );
    Ok(())
}

pub fn run_families(config: &AppConfig) -> Result<()> {
    println!(
        "{}",
        render::families(PeriodicTable::families(), config.format)?.trim_end()
    );
    Ok(())
}
