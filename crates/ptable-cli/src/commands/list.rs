use crate::cli::ListArgs;
use crate::config::AppConfig;
use crate::error::Result;
use crate::render;
use ptable::core::models::element::ElementDescriptor;
use ptable::workflows::table::PeriodicTable;
use tracing::info;

pub fn run(args: ListArgs, config: &AppConfig) -> Result<()> {
    let table = PeriodicTable::new(&config.table)?;
    let elements = select(&table, &args);
    info!("{} elements match the list filters.", elements.len());
    println!("{}", render::element_list(&elements, config.format)?.trim_end());
    Ok(())
}

/// Applies every given filter; no filters selects the whole table.
fn select<'a>(table: &'a PeriodicTable, args: &ListArgs) -> Vec<&'a ElementDescriptor> {
    let pool = if args.no_inner_transition {
        table.without_inner_transition_metals()
    } else {
        table.all_elements().iter().collect()
    };
    pool.into_iter()
        .filter(|e| args.family.is_none_or(|f| e.family() == f))
        .filter(|e| args.period.is_none_or(|p| e.period() == p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptable::core::models::family::Family;

    fn table() -> &'static PeriodicTable {
        PeriodicTable::global().unwrap()
    }

    #[test]
    fn no_filters_selects_everything() {
        assert_eq!(select(table(), &ListArgs::default()).len(), 118);
    }

    #[test]
    fn family_and_period_filters_combine() {
        let args = ListArgs {
            family: Some(Family::AlkaliMetal),
            period: Some(3),
            no_inner_transition: false,
        };
        let selected = select(table(), &args);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].symbol(), "Na");
    }

    #[test]
    fn period_six_without_inner_transition_metals() {
        let args = ListArgs {
            period: Some(6),
            no_inner_transition: true,
            ..ListArgs::default()
        };
        let selected = select(table(), &args);
        assert_eq!(selected.len(), 17);
        assert!(selected.iter().all(|e| !e.is_inner_transition_metal()));
    }

    #[test]
    fn inner_transition_filter_conflicts_leave_nothing() {
        let args = ListArgs {
            family: Some(Family::Actinide),
            no_inner_transition: true,
            ..ListArgs::default()
        };
        assert!(select(table(), &args).is_empty());
    }
}
