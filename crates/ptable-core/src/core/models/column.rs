use phf::{Map, phf_map};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A periodic-table column token.
///
/// The table uses the older A/B group notation with two deviations: group 8B is
/// split into `8B`, `9B`, and `0B`, and the f-block elements receive synthetic
/// `1LA`..`14LA` columns since they have no true group of their own.
///
/// Valid payloads are `A(1..=8)`, `B(0..=9)` and `La(1..=14)`. Every token the
/// engine derives, and every token produced by [`FromStr`], is within range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Main-group column `1A`..`8A`.
    A(u8),
    /// Transition-metal column `3B`..`9B`, `0B`, `1B`, `2B`.
    B(u8),
    /// Lanthanide/actinide column `1LA`..`14LA`.
    La(u8),
}

impl Column {
    /// All 32 tokens in left-to-right table order.
    pub const ALL: [Column; 32] = [
        Column::A(1),
        Column::A(2),
        Column::La(1),
        Column::La(2),
        Column::La(3),
        Column::La(4),
        Column::La(5),
        Column::La(6),
        Column::La(7),
        Column::La(8),
        Column::La(9),
        Column::La(10),
        Column::La(11),
        Column::La(12),
        Column::La(13),
        Column::La(14),
        Column::B(3),
        Column::B(4),
        Column::B(5),
        Column::B(6),
        Column::B(7),
        Column::B(8),
        Column::B(9),
        Column::B(0),
        Column::B(1),
        Column::B(2),
        Column::A(3),
        Column::A(4),
        Column::A(5),
        Column::A(6),
        Column::A(7),
        Column::A(8),
    ];

    /// Numeric position of the column used by the electron-fill and family rules.
    ///
    /// `1A` and `2A` map to 1 and 2, LA columns to `2 + d/100` (between 2.01 and
    /// 2.14), B columns to 3..=12 with `0B`, `1B`, `2B` becoming 10, 11, 12, and
    /// the remaining A columns to 13..=18.
    pub fn enumeration(&self) -> f64 {
        match *self {
            Column::A(n) if n <= 2 => f64::from(n),
            Column::A(n) => f64::from(n) + 10.0,
            Column::La(d) => 2.0 + f64::from(d) / 100.0,
            Column::B(n) if n <= 2 => f64::from(n) + 10.0,
            Column::B(n) => f64::from(n),
        }
    }

    /// The IUPAC group number (1..=18), or `None` for the synthetic LA columns.
    pub fn group_number(&self) -> Option<u8> {
        match self {
            Column::La(_) => None,
            // Non-LA enumerations are whole numbers in 1..=18.
            _ => Some(self.enumeration() as u8),
        }
    }

    pub fn is_lanthanide_actinide(&self) -> bool {
        matches!(self, Column::La(_))
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::A(n) => write!(f, "{}A", n),
            Column::B(n) => write!(f, "{}B", n),
            Column::La(d) => write!(f, "{}LA", d),
        }
    }
}

impl Serialize for Column {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

static COLUMN_TOKENS: Map<&'static str, Column> = phf_map! {
    "1A" => Column::A(1), "2A" => Column::A(2),
    "1LA" => Column::La(1), "2LA" => Column::La(2), "3LA" => Column::La(3), "4LA" => Column::La(4),
    "5LA" => Column::La(5), "6LA" => Column::La(6), "7LA" => Column::La(7), "8LA" => Column::La(8),
    "9LA" => Column::La(9), "10LA" => Column::La(10), "11LA" => Column::La(11), "12LA" => Column::La(12),
    "13LA" => Column::La(13), "14LA" => Column::La(14),
    "3B" => Column::B(3), "4B" => Column::B(4), "5B" => Column::B(5), "6B" => Column::B(6),
    "7B" => Column::B(7), "8B" => Column::B(8), "9B" => Column::B(9), "0B" => Column::B(0),
    "1B" => Column::B(1), "2B" => Column::B(2),
    "3A" => Column::A(3), "4A" => Column::A(4), "5A" => Column::A(5), "6A" => Column::A(6),
    "7A" => Column::A(7), "8A" => Column::A(8),
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid column token: '{0}'")]
pub struct ParseColumnError(pub String);

impl FromStr for Column {
    type Err = ParseColumnError;

    /// Parses a column token such as `"8B"` or `"12la"`, ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        COLUMN_TOKENS
            .get(normalized.as_str())
            .copied()
            .ok_or_else(|| ParseColumnError(s.to_string()))
    }
}
