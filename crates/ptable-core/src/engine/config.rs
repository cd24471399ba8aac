use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Where the seed rows come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SeedSource {
    /// The table bundled with the crate.
    #[default]
    Builtin,
    /// A CSV file with the header `atomic_number,symbol,name,atomic_mass`.
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub seed_source: SeedSource,
    /// Re-check every derived descriptor against its structural invariants
    /// while building the table.
    pub verify: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seed_source: SeedSource::Builtin,
            verify: true,
        }
    }
}

#[derive(Default)]
pub struct TableConfigBuilder {
    seed_source: Option<SeedSource>,
    verify: Option<bool>,
}

impl TableConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_source(mut self, source: SeedSource) -> Self {
        self.seed_source = Some(source);
        self
    }
    pub fn seed_file(mut self, path: PathBuf) -> Self {
        self.seed_source = Some(SeedSource::File(path));
        self
    }
    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = Some(verify);
        self
    }

    pub fn build(self) -> Result<TableConfig, ConfigError> {
        Ok(TableConfig {
            seed_source: self
                .seed_source
                .ok_or(ConfigError::MissingParameter("seed_source"))?,
            verify: self.verify.unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_fails_without_seed_source() {
        let result = TableConfigBuilder::new().verify(false).build();
        assert_eq!(result, Err(ConfigError::MissingParameter("seed_source")));
    }

    #[test]
    fn build_defaults_to_verifying() {
        let config = TableConfigBuilder::new()
            .seed_source(SeedSource::Builtin)
            .build()
            .unwrap();
        assert_eq!(config, TableConfig::default());
    }

    #[test]
    fn seed_file_selects_file_source() {
        let config = TableConfigBuilder::new()
            .seed_file(PathBuf::from("/tmp/elements.csv"))
            .verify(false)
            .build()
            .unwrap();
        assert_eq!(
            config.seed_source,
            SeedSource::File(PathBuf::from("/tmp/elements.csv"))
        );
        assert!(!config.verify);
    }
}
