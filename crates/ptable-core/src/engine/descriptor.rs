use super::column::derive_column;
use super::configuration::{abbreviate, electron_configuration};
use super::error::EngineError;
use super::family::classify;
use super::period::{last_in_previous_period, period};
use crate::core::data::seed::SeedTable;
use crate::core::models::element::{DerivedParts, ElementDescriptor};
use tracing::debug;

/// Derives the full descriptor for `atomic_number` from its seed row.
///
/// Steps run in dependency order: period, column, column enumeration,
/// electron configuration, abbreviated configuration, family. Any step that
/// cannot produce a value is an invariant violation, never a silent default.
pub fn derive(seeds: &SeedTable, atomic_number: u32) -> Result<ElementDescriptor, EngineError> {
    let seed = seeds.get(atomic_number).ok_or_else(|| {
        EngineError::InvalidKey(format!("no seed row for atomic number {}", atomic_number))
    })?;

    let period = period(atomic_number)
        .ok_or_else(|| EngineError::invariant(atomic_number, "no period contains it"))?;
    let column = derive_column(atomic_number, period)?;
    let e = column.enumeration();

    let electron_config = electron_configuration(period, e);
    let highest_occupied_orbital = electron_config
        .highest_occupied()
        .copied()
        .ok_or_else(|| EngineError::invariant(atomic_number, "electron configuration is empty"))?;

    let previous = last_in_previous_period(period);
    let core_symbol = match previous {
        0 => None,
        n => Some(
            seeds
                .get(n)
                .map(|s| s.symbol.as_str())
                .ok_or_else(|| {
                    EngineError::invariant(atomic_number, format!("no seed row for core {}", n))
                })?,
        ),
    };
    let short_electron_config =
        abbreviate(&electron_config, atomic_number - previous, core_symbol);

    let family = classify(e, period, atomic_number)?;

    debug!(
        atomic_number,
        symbol = %seed.symbol,
        %column,
        %family,
        "Derived element descriptor"
    );

    Ok(ElementDescriptor::assemble(
        seed,
        DerivedParts {
            period,
            column,
            electron_config,
            highest_occupied_orbital,
            short_electron_config,
            family,
        },
    ))
}

/// Checks the structural invariants a derived descriptor must satisfy.
///
/// The electron configuration must account for every electron, its last term
/// must be the reported highest occupied orbital, and the abbreviated form must
/// cover exactly the electrons added in the element's own period.
pub fn verify(descriptor: &ElementDescriptor) -> Result<(), EngineError> {
    let atomic_number = descriptor.atomic_number();
    let config = descriptor.electron_config();

    let total = config.total_electrons();
    if total != descriptor.electrons() {
        return Err(EngineError::invariant(
            atomic_number,
            format!(
                "electron configuration holds {} electrons, expected {}",
                total,
                descriptor.electrons()
            ),
        ));
    }
    if config.highest_occupied() != Some(&descriptor.highest_occupied_orbital()) {
        return Err(EngineError::invariant(
            atomic_number,
            "highest occupied orbital is not the last configuration term",
        ));
    }
    let short_total: u32 = descriptor
        .short_electron_config()
        .terms()
        .iter()
        .map(|t| u32::from(t.occupancy))
        .sum();
    let expected_short = atomic_number - last_in_previous_period(descriptor.period());
    if short_total != expected_short {
        return Err(EngineError::invariant(
            atomic_number,
            format!(
                "abbreviated configuration covers {} electrons, period holds {}",
                short_total, expected_short
            ),
        ));
    }
    Ok(())
}
