use crate::cli::ShowArgs;
use crate::config::AppConfig;
use crate::error::Result;
use crate::render;
use ptable::workflows::table::PeriodicTable;
use tracing::info;

pub fn run(args: ShowArgs, config: &AppConfig) -> Result<()> {
    let table = PeriodicTable::new(&config.table)?;
    let element = table.lookup(args.key)?;
    info!(
        "Resolved element {} ({}).",
        element.atomic_number(),
        element.symbol()
    );
    println!("{}", render::descriptor(element, config.format)?.trim_end());
    Ok(())
}
