/// Atomic number of the last element of each period, 1 through 7.
pub const PERIOD_BOUNDARIES: [u32; 7] = [2, 10, 18, 36, 54, 86, 118];

/// The period (1..=7) holding `atomic_number`, or `None` outside 1..=118.
pub fn period(atomic_number: u32) -> Option<u8> {
    if atomic_number == 0 {
        return None;
    }
    PERIOD_BOUNDARIES
        .iter()
        .position(|&last| atomic_number <= last)
        .map(|idx| idx as u8 + 1)
}

/// Atomic number of the final element of the period before `period`.
///
/// Returns 0 for period 1 (and for anything outside 2..=8).
pub fn last_in_previous_period(period: u8) -> u32 {
    match period {
        2..=8 => PERIOD_BOUNDARIES[usize::from(period) - 2],
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_follows_cumulative_boundaries() {
        assert_eq!(period(1), Some(1));
        assert_eq!(period(2), Some(1));
        assert_eq!(period(3), Some(2));
        assert_eq!(period(10), Some(2));
        assert_eq!(period(11), Some(3));
        assert_eq!(period(18), Some(3));
        assert_eq!(period(19), Some(4));
        assert_eq!(period(36), Some(4));
        assert_eq!(period(37), Some(5));
        assert_eq!(period(54), Some(5));
        assert_eq!(period(55), Some(6));
        assert_eq!(period(86), Some(6));
        assert_eq!(period(87), Some(7));
        assert_eq!(period(118), Some(7));
    }

    #[test]
    fn period_is_none_outside_table() {
        assert_eq!(period(0), None);
        assert_eq!(period(119), None);
    }

    #[test]
    fn last_in_previous_period_matches_noble_gases() {
        assert_eq!(last_in_previous_period(1), 0);
        assert_eq!(last_in_previous_period(2), 2);
        assert_eq!(last_in_previous_period(4), 18);
        assert_eq!(last_in_previous_period(6), 54);
        assert_eq!(last_in_previous_period(7), 86);
    }

    #[test]
    fn last_in_previous_period_is_zero_for_out_of_range_periods() {
        assert_eq!(last_in_previous_period(0), 0);
        assert_eq!(last_in_previous_period(9), 0);
    }
}
