use crate::core::models::element::ElementSeed;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Number of elements in the table.
pub const TOTAL_ELEMENT_COUNT: u32 = 118;

const BUILTIN_ELEMENTS_CSV: &str = include_str!("../../../data/elements.csv");

#[derive(Debug, Error)]
pub enum SeedLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{origin}': {source}")]
    Csv { origin: String, source: csv::Error },
    #[error("Invalid seed row {row} in '{origin}': {reason}")]
    Invalid {
        origin: String,
        row: usize,
        reason: String,
    },
    #[error("Seed table '{origin}' has {found} rows, expected {expected}")]
    Count {
        origin: String,
        expected: u32,
        found: usize,
    },
}

/// The fixed, read-only table of raw element rows, indexed by atomic number,
/// symbol, and name.
#[derive(Debug, Clone)]
pub struct SeedTable {
    rows: Vec<ElementSeed>,
    by_symbol: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl SeedTable {
    /// Parses the table bundled with the crate.
    pub fn builtin() -> Result<Self, SeedLoadError> {
        Self::from_reader(BUILTIN_ELEMENTS_CSV.as_bytes(), "<builtin>")
    }

    /// Loads a table from a CSV file with the header
    /// `atomic_number,symbol,name,atomic_mass`.
    pub fn load(path: &Path) -> Result<Self, SeedLoadError> {
        let file = std::fs::File::open(path).map_err(|e| SeedLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_reader(file, &path.to_string_lossy())
    }

    pub fn from_reader<R: Read>(reader: R, origin: &str) -> Result<Self, SeedLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut rows = Vec::with_capacity(TOTAL_ELEMENT_COUNT as usize);
        for record in csv_reader.deserialize::<ElementSeed>() {
            let seed = record.map_err(|e| SeedLoadError::Csv {
                origin: origin.to_string(),
                source: e,
            })?;
            rows.push(seed);
        }
        let table = Self::from_rows(rows, origin)?;
        debug!("Loaded {} element seed rows from {}", table.len(), origin);
        Ok(table)
    }

    /// Validates and indexes the given rows.
    ///
    /// Rows must be ordered by atomic number 1..=118 with no gaps, symbols and
    /// names must be unique (ignoring case), and the rounded mass must not be
    /// below the atomic number. Names are stored lowercase.
    pub fn from_rows(mut rows: Vec<ElementSeed>, origin: &str) -> Result<Self, SeedLoadError> {
        if rows.len() != TOTAL_ELEMENT_COUNT as usize {
            return Err(SeedLoadError::Count {
                origin: origin.to_string(),
                expected: TOTAL_ELEMENT_COUNT,
                found: rows.len(),
            });
        }

        let invalid = |row: usize, reason: String| SeedLoadError::Invalid {
            origin: origin.to_string(),
            row,
            reason,
        };

        for seed in rows.iter_mut() {
            seed.name = seed.name.to_lowercase();
        }

        let mut by_symbol = HashMap::with_capacity(rows.len());
        let mut by_name = HashMap::with_capacity(rows.len());
        for (idx, seed) in rows.iter().enumerate() {
            let row = idx + 1;
            if seed.atomic_number as usize != row {
                return Err(invalid(
                    row,
                    format!(
                        "atomic number {} out of sequence (expected {})",
                        seed.atomic_number, row
                    ),
                ));
            }
            let symbol_ok = (1..=2).contains(&seed.symbol.len())
                && seed.symbol.chars().all(|c| c.is_ascii_alphabetic());
            if !symbol_ok {
                return Err(invalid(row, format!("malformed symbol '{}'", seed.symbol)));
            }
            if seed.name.is_empty() {
                return Err(invalid(row, "empty name".to_string()));
            }
            if !(seed.atomic_mass.is_finite() && seed.atomic_mass > 0.0) {
                return Err(invalid(
                    row,
                    format!("atomic mass {} is not positive", seed.atomic_mass),
                ));
            }
            if (seed.atomic_mass.round() as u32) < seed.atomic_number {
                return Err(invalid(
                    row,
                    format!(
                        "atomic mass {} is below the proton count {}",
                        seed.atomic_mass, seed.atomic_number
                    ),
                ));
            }
            if by_symbol
                .insert(seed.symbol.to_ascii_lowercase(), idx)
                .is_some()
            {
                return Err(invalid(row, format!("duplicate symbol '{}'", seed.symbol)));
            }
            if by_name.insert(seed.name.clone(), idx).is_some() {
                return Err(invalid(row, format!("duplicate name '{}'", seed.name)));
            }
        }

        Ok(Self {
            rows,
            by_symbol,
            by_name,
        })
    }

    pub fn get(&self, atomic_number: u32) -> Option<&ElementSeed> {
        if atomic_number == 0 {
            return None;
        }
        self.rows.get(atomic_number as usize - 1)
    }

    /// Case-insensitive exact match on the symbol.
    pub fn by_symbol(&self, symbol: &str) -> Option<&ElementSeed> {
        self.by_symbol
            .get(&symbol.to_ascii_lowercase())
            .map(|&idx| &self.rows[idx])
    }

    /// Case-insensitive exact match on the name.
    pub fn by_name(&self, name: &str) -> Option<&ElementSeed> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&idx| &self.rows[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementSeed> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn builtin_rows() -> Vec<ElementSeed> {
        SeedTable::builtin().unwrap().iter().cloned().collect()
    }

    #[test]
    fn builtin_table_has_all_elements_in_order() {
        let table = SeedTable::builtin().unwrap();
        assert_eq!(table.len(), 118);
        for (idx, seed) in table.iter().enumerate() {
            assert_eq!(seed.atomic_number as usize, idx + 1);
        }
    }

    #[test]
    fn builtin_table_stores_lowercase_names() {
        let table = SeedTable::builtin().unwrap();
        assert!(table.iter().all(|s| s.name == s.name.to_lowercase()));
    }

    #[test]
    fn get_returns_none_outside_valid_range() {
        let table = SeedTable::builtin().unwrap();
        assert!(table.get(0).is_none());
        assert!(table.get(119).is_none());
        assert_eq!(table.get(26).unwrap().symbol, "Fe");
    }

    #[test]
    fn symbol_and_name_lookups_ignore_case() {
        let table = SeedTable::builtin().unwrap();
        assert_eq!(table.by_symbol("fe").unwrap().atomic_number, 26);
        assert_eq!(table.by_symbol("FE").unwrap().atomic_number, 26);
        assert_eq!(table.by_name("Iron").unwrap().atomic_number, 26);
        assert!(table.by_symbol("Xx").is_none());
        assert!(table.by_name("unobtainium").is_none());
    }

    #[test]
    fn load_reads_table_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("elements.csv");
        let mut file = File::create(&path).unwrap();
        write!(file, "{}", BUILTIN_ELEMENTS_CSV).unwrap();

        let table = SeedTable::load(&path).unwrap();
        assert_eq!(table.len(), 118);
        assert_eq!(table.get(118).unwrap().name, "oganesson");
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = SeedTable::load(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(SeedLoadError::Io { .. })));
    }

    #[test]
    fn from_reader_fails_on_malformed_csv() {
        let csv = "atomic_number,symbol,name,atomic_mass\n1,H,hydrogen,not-a-number\n";
        let result = SeedTable::from_reader(csv.as_bytes(), "test");
        assert!(matches!(result, Err(SeedLoadError::Csv { .. })));
    }

    #[test]
    fn from_rows_rejects_truncated_table() {
        let mut rows = builtin_rows();
        rows.pop();
        let result = SeedTable::from_rows(rows, "test");
        assert!(matches!(
            result,
            Err(SeedLoadError::Count { found: 117, .. })
        ));
    }

    #[test]
    fn from_rows_rejects_out_of_sequence_atomic_numbers() {
        let mut rows = builtin_rows();
        rows.swap(3, 4);
        let result = SeedTable::from_rows(rows, "test");
        assert!(matches!(result, Err(SeedLoadError::Invalid { row: 4, .. })));
    }

    #[test]
    fn from_rows_rejects_duplicate_symbols() {
        let mut rows = builtin_rows();
        rows[1].symbol = "h".to_string();
        let result = SeedTable::from_rows(rows, "test");
        assert!(matches!(result, Err(SeedLoadError::Invalid { row: 2, .. })));
    }

    #[test]
    fn from_rows_rejects_duplicate_names() {
        let mut rows = builtin_rows();
        rows[1].name = "Hydrogen".to_string();
        let result = SeedTable::from_rows(rows, "test");
        match result {
            Err(SeedLoadError::Invalid { row, reason, .. }) => {
                assert_eq!(row, 2);
                assert!(reason.contains("duplicate name 'hydrogen'"), "{}", reason);
            }
            other => panic!("Expected duplicate-name error, got {:?}", other.map(|t| t.len())),
        }
    }

    #[test]
    fn from_rows_rejects_mass_below_atomic_number() {
        let mut rows = builtin_rows();
        rows[9].atomic_mass = 9.4;
        let result = SeedTable::from_rows(rows, "test");
        match result {
            Err(SeedLoadError::Invalid { row, reason, .. }) => {
                assert_eq!(row, 10);
                assert!(reason.contains("below the proton count 10"), "{}", reason);
            }
            other => panic!("Expected low-mass error, got {:?}", other.map(|t| t.len())),
        }
    }

    #[test]
    fn from_rows_accepts_mass_that_rounds_to_atomic_number() {
        let mut rows = builtin_rows();
        rows[9].atomic_mass = 9.5;
        let table = SeedTable::from_rows(rows, "test").unwrap();
        assert_eq!(table.get(10).unwrap().atomic_mass, 9.5);
    }

    #[test]
    fn from_rows_rejects_non_positive_mass() {
        let mut rows = builtin_rows();
        rows[9].atomic_mass = 0.0;
        let result = SeedTable::from_rows(rows, "test");
        assert!(matches!(result, Err(SeedLoadError::Invalid { row: 10, .. })));
    }

    #[test]
    fn from_rows_rejects_malformed_symbol() {
        let mut rows = builtin_rows();
        rows[0].symbol = "Hyd".to_string();
        let result = SeedTable::from_rows(rows, "test");
        assert!(matches!(result, Err(SeedLoadError::Invalid { row: 1, .. })));
    }
}
