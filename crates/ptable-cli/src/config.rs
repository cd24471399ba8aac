use crate::cli::{Cli, OutputFormat};
use crate::error::{CliError, Result};
use ptable::engine::config::{SeedSource, TableConfig, TableConfigBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialDataConfig {
    #[serde(rename = "seed-file")]
    seed_file: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialDisplayConfig {
    format: Option<OutputFormat>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAppConfig {
    data: Option<PartialDataConfig>,
    display: Option<PartialDisplayConfig>,
}

/// Settings for one CLI invocation after merging the config file with flags.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub table: TableConfig,
    pub format: OutputFormat,
}

impl PartialAppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads `path` when given, otherwise starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Command-line flags win over file values; anything unset falls back to
    /// the built-in seed table and text output.
    pub fn merge_with_cli(self, cli: &Cli) -> Result<AppConfig> {
        let data = self.data.unwrap_or_default();
        let display = self.display.unwrap_or_default();

        let seed_source = match cli.seed_file.clone().or(data.seed_file) {
            Some(path) => SeedSource::File(path),
            None => SeedSource::Builtin,
        };
        let table = TableConfigBuilder::new()
            .seed_source(seed_source)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        let format = cli.format.or(display.format).unwrap_or_default();

        debug!("Final configuration: {:?}, output {:?}", table, format);
        Ok(AppConfig { table, format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn write_config_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let file_path = dir.path().join(name);
        fs::write(&file_path, content).unwrap();
        file_path
    }

    #[test]
    fn empty_config_falls_back_to_builtin_text() {
        let cli = Cli::parse_from(["ptable", "columns"]);
        let config = PartialAppConfig::load(None)
            .unwrap()
            .merge_with_cli(&cli)
            .unwrap();
        assert_eq!(config.table.seed_source, SeedSource::Builtin);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn file_values_are_applied() {
        let dir = tempdir().unwrap();
        let path = write_config_file(
            &dir,
            "ptable.toml",
            r#"
            [data]
            seed-file = "/data/elements.csv"

            [display]
            format = "json"
            "#,
        );
        let cli = Cli::parse_from(["ptable", "families"]);
        let config = PartialAppConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&cli)
            .unwrap();
        assert_eq!(
            config.table.seed_source,
            SeedSource::File(PathBuf::from("/data/elements.csv"))
        );
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn cli_flags_override_file_values() {
        let dir = tempdir().unwrap();
        let path = write_config_file(
            &dir,
            "ptable.toml",
            r#"
            [data]
            seed-file = "/data/elements.csv"

            [display]
            format = "json"
            "#,
        );
        let cli = Cli::parse_from([
            "ptable",
            "--seed-file",
            "/other/seeds.csv",
            "--format",
            "text",
            "show",
            "Fe",
        ]);
        let config = PartialAppConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&cli)
            .unwrap();
        assert_eq!(
            config.table.seed_source,
            SeedSource::File(PathBuf::from("/other/seeds.csv"))
        );
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = write_config_file(&dir, "bad.toml", "[display]\ncolour = true\n");
        let result = PartialAppConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let dir = tempdir().unwrap();
        let path = write_config_file(&dir, "bad.toml", "[display]\nformat = \"yaml\"\n");
        let result = PartialAppConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = PartialAppConfig::from_file(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
