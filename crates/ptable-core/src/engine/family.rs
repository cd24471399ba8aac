use super::error::EngineError;
use crate::core::models::family::Family;
use tracing::trace;

/// Classifies an element from its column enumeration `e`, its period, and its
/// atomic number.
///
/// The rules are checked in order and the first match wins; the ranges overlap,
/// so reordering them changes the result. Failing every rule means the rule
/// table is incomplete and is reported as an invariant violation.
pub fn classify(e: f64, period: u8, atomic_number: u32) -> Result<Family, EngineError> {
    let family = if e == 18.0 {
        Some(Family::NobleGas)
    } else if e == 17.0 {
        Some(Family::Halogen)
    } else if e == 1.0 && atomic_number != 1 {
        Some(Family::AlkaliMetal)
    } else if e == 2.0 {
        Some(Family::AlkalineEarthMetal)
    } else if (3.0..=12.0).contains(&e) && !(e == 3.0 && period >= 6) {
        // Column 3 in periods 6-7 (Lu, Lr) falls through to the f-block rule.
        Some(Family::TransitionMetal)
    } else if e > 2.0 && e <= 3.0 {
        match period {
            6 => Some(Family::Lanthanide),
            7 => Some(Family::Actinide),
            _ => None,
        }
    } else if is_post_transition_metal(e, period) {
        Some(Family::PostTransitionMetal)
    } else if is_reactive_nonmetal(e, period, atomic_number) {
        Some(Family::ReactiveNonmetal)
    } else if is_metalloid(e, period) {
        Some(Family::Metalloid)
    } else {
        None
    };

    match family {
        Some(family) => {
            trace!(atomic_number, e, period, %family, "Classified element family");
            Ok(family)
        }
        None => Err(EngineError::invariant(
            atomic_number,
            format!(
                "no family rule matches column enumeration {} in period {}",
                e, period
            ),
        )),
    }
}

/// Below the metalloid staircase.
fn is_post_transition_metal(e: f64, period: u8) -> bool {
    (e == 13.0 && period >= 3)
        || (e == 14.0 && period >= 5)
        || (e == 15.0 && period >= 6)
        || (e == 16.0 && period >= 6)
}

/// Hydrogen plus everything above the metalloid staircase that is not a
/// halogen or noble gas.
fn is_reactive_nonmetal(e: f64, period: u8, atomic_number: u32) -> bool {
    atomic_number == 1
        || (e == 14.0 && period == 2)
        || (e == 15.0 && period <= 3)
        || (e == 16.0 && period <= 4)
}

/// On the staircase itself.
fn is_metalloid(e: f64, period: u8) -> bool {
    (e == 13.0 && period == 2)
        || (e == 14.0 && (period == 3 || period == 4))
        || (e == 15.0 && (period == 4 || period == 5))
        || (e == 16.0 && period == 5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hydrogen_is_reactive_nonmetal_not_alkali_metal() {
        assert_eq!(classify(1.0, 1, 1).unwrap(), Family::ReactiveNonmetal);
        assert_eq!(classify(1.0, 2, 3).unwrap(), Family::AlkaliMetal);
    }

    #[test]
    fn main_group_columns_classify_directly() {
        assert_eq!(classify(18.0, 1, 2).unwrap(), Family::NobleGas);
        assert_eq!(classify(17.0, 7, 117).unwrap(), Family::Halogen);
        assert_eq!(classify(2.0, 7, 88).unwrap(), Family::AlkalineEarthMetal);
    }

    #[test]
    fn b_block_is_transition_metal() {
        assert_eq!(classify(3.0, 4, 21).unwrap(), Family::TransitionMetal);
        assert_eq!(classify(8.0, 4, 26).unwrap(), Family::TransitionMetal);
        assert_eq!(classify(12.0, 7, 112).unwrap(), Family::TransitionMetal);
    }

    #[test]
    fn column_three_in_periods_six_and_seven_joins_f_block() {
        assert_eq!(classify(3.0, 6, 71).unwrap(), Family::Lanthanide);
        assert_eq!(classify(3.0, 7, 103).unwrap(), Family::Actinide);
    }

    #[test]
    fn la_columns_are_lanthanides_or_actinides_by_period() {
        assert_eq!(classify(2.01, 6, 57).unwrap(), Family::Lanthanide);
        assert_eq!(classify(2.14, 6, 70).unwrap(), Family::Lanthanide);
        assert_eq!(classify(2.01, 7, 89).unwrap(), Family::Actinide);
    }

    #[test]
    fn staircase_separates_post_transition_metals_metalloids_and_nonmetals() {
        assert_eq!(classify(13.0, 2, 5).unwrap(), Family::Metalloid);
        assert_eq!(classify(13.0, 3, 13).unwrap(), Family::PostTransitionMetal);
        assert_eq!(classify(14.0, 2, 6).unwrap(), Family::ReactiveNonmetal);
        assert_eq!(classify(14.0, 4, 32).unwrap(), Family::Metalloid);
        assert_eq!(classify(14.0, 5, 50).unwrap(), Family::PostTransitionMetal);
        assert_eq!(classify(15.0, 3, 15).unwrap(), Family::ReactiveNonmetal);
        assert_eq!(classify(15.0, 5, 51).unwrap(), Family::Metalloid);
        assert_eq!(classify(15.0, 6, 83).unwrap(), Family::PostTransitionMetal);
        assert_eq!(classify(16.0, 4, 34).unwrap(), Family::ReactiveNonmetal);
        assert_eq!(classify(16.0, 5, 52).unwrap(), Family::Metalloid);
        assert_eq!(classify(16.0, 6, 84).unwrap(), Family::PostTransitionMetal);
    }

    #[test]
    fn unmatched_input_is_invariant_violation() {
        let result = classify(2.05, 5, 40);
        assert!(matches!(
            result,
            Err(EngineError::InvariantViolation { atomic_number: 40, .. })
        ));
        assert!(classify(19.0, 4, 30).is_err());
    }
}
