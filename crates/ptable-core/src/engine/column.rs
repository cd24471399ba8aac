use super::error::EngineError;
use super::period::last_in_previous_period;
use crate::core::models::column::Column;

const S_BLOCK_WIDTH: u32 = 2;
const D_BLOCK_WIDTH: u32 = 10;
const F_BLOCK_WIDTH: u32 = 14;

/// Derives the column token of `atomic_number`, which lies in `period`.
///
/// Offsets are counted from the last element of the previous period. Periods
/// 4-5 add the ten B columns after the first two A columns; periods 6-7 add the
/// fourteen LA columns before the B block as well.
pub fn derive_column(atomic_number: u32, period: u8) -> Result<Column, EngineError> {
    let offset = atomic_number
        .checked_sub(last_in_previous_period(period))
        .filter(|&o| o >= 1)
        .ok_or_else(|| {
            EngineError::invariant(atomic_number, format!("not contained in period {}", period))
        })?;

    let column = match period {
        1 => {
            if atomic_number == 1 {
                Column::A(1)
            } else {
                Column::A(8)
            }
        }
        2 | 3 => Column::A(offset as u8),
        4 | 5 => {
            if offset <= S_BLOCK_WIDTH {
                Column::A(offset as u8)
            } else if offset <= S_BLOCK_WIDTH + D_BLOCK_WIDTH {
                Column::B(b_column_number(offset, period))
            } else {
                Column::A((offset - D_BLOCK_WIDTH) as u8)
            }
        }
        6 | 7 => {
            if offset <= S_BLOCK_WIDTH {
                Column::A(offset as u8)
            } else if offset <= S_BLOCK_WIDTH + F_BLOCK_WIDTH {
                Column::La((offset - S_BLOCK_WIDTH) as u8)
            } else if offset <= S_BLOCK_WIDTH + F_BLOCK_WIDTH + D_BLOCK_WIDTH {
                Column::B(b_column_number(offset, period))
            } else {
                Column::A((offset - D_BLOCK_WIDTH - F_BLOCK_WIDTH) as u8)
            }
        }
        _ => {
            return Err(EngineError::invariant(
                atomic_number,
                format!("period {} has no column layout", period),
            ));
        }
    };

    if !Column::ALL.contains(&column) {
        return Err(EngineError::invariant(
            atomic_number,
            format!("derived column '{}' is not a table column", column),
        ));
    }
    Ok(column)
}

/// B-column digit for a period offset: 3..=9, then 0, 1, 2 for what would be
/// 10B..12B.
fn b_column_number(offset: u32, period: u8) -> u8 {
    let mut number = offset;
    if period >= 6 {
        number -= F_BLOCK_WIDTH;
    }
    if number >= 10 {
        number -= 10;
    }
    number as u8
}
