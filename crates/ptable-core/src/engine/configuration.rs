use crate::core::models::orbital::{
    AbbreviatedConfiguration, ElectronConfiguration, OrbitalTerm, Subshell,
};

/// Builds the ground-state configuration of an element in `period` whose column
/// enumeration is `e`.
///
/// Each row up to the element's period emits its terms in `s`, `f`, `d`, `p`
/// order. Rows before the element's own period are always completely filled;
/// in the element's own row the column enumeration decides how far the fill
/// reaches. The emission order is therefore already lowest to highest energy.
pub fn electron_configuration(period: u8, e: f64) -> ElectronConfiguration {
    let mut terms = Vec::with_capacity(usize::from(period) * 4);
    for row in 1..=period {
        let inner_row = period > row;

        let s_occupancy = if e < 2.0 && !inner_row { 1 } else { 2 };
        terms.push(OrbitalTerm::new(row, Subshell::S, s_occupancy));

        if row >= 6 {
            if e >= 3.0 || inner_row {
                terms.push(OrbitalTerm::new(row - 2, Subshell::F, 14));
            } else if e > 2.0 {
                // (e - 2) * 100 is the LA column index, up to float noise.
                let occupancy = ((e - 2.0) * 100.0).round() as u8;
                terms.push(OrbitalTerm::new(row - 2, Subshell::F, occupancy));
            }
        }

        if row >= 4 {
            if e > 12.0 || inner_row {
                terms.push(OrbitalTerm::new(row - 1, Subshell::D, 10));
            } else if e >= 3.0 {
                terms.push(OrbitalTerm::new(row - 1, Subshell::D, e.floor() as u8 - 2));
            }
        }

        if row >= 2 {
            if inner_row {
                terms.push(OrbitalTerm::new(row, Subshell::P, 6));
            } else if e >= 13.0 {
                terms.push(OrbitalTerm::new(row, Subshell::P, e.floor() as u8 - 12));
            }
        }
    }
    ElectronConfiguration::new(terms)
}

/// Abbreviates `config` with noble-gas notation.
///
/// Walks back from the highest occupied term until exactly
/// `electrons_in_period` electrons are covered, then prefixes the symbol of the
/// previous period's noble gas when there is one.
pub fn abbreviate(
    config: &ElectronConfiguration,
    electrons_in_period: u32,
    core_symbol: Option<&str>,
) -> AbbreviatedConfiguration {
    let mut tail: Vec<OrbitalTerm> = Vec::new();
    let mut counted = 0u32;
    for term in config.terms().iter().rev() {
        tail.push(*term);
        counted += u32::from(term.occupancy);
        if counted >= electrons_in_period {
            break;
        }
    }
    tail.reverse();
    AbbreviatedConfiguration::new(core_symbol.map(str::to_string), tail)
}
