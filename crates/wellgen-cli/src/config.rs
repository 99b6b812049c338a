use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use wellgen_generate::GenerateOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
}

/// Generation settings from a TOML file or the command line. Unset fields
/// fall through to the next layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    pub out: Option<PathBuf>,
    pub csv: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub seed: Option<u64>,
    pub min_wells: Option<u32>,
    pub max_wells: Option<u32>,
}

impl GenerateConfig {
    /// Fields set in `overrides` win.
    pub fn merge(self, overrides: GenerateConfig) -> Self {
        Self {
            out: overrides.out.or(self.out),
            csv: overrides.csv.or(self.csv),
            report: overrides.report.or(self.report),
            seed: overrides.seed.or(self.seed),
            min_wells: overrides.min_wells.or(self.min_wells),
            max_wells: overrides.max_wells.or(self.max_wells),
        }
    }

    pub fn into_options(self) -> GenerateOptions {
        let defaults = GenerateOptions::default();
        GenerateOptions {
            out_path: self.out.unwrap_or(defaults.out_path),
            csv_path: self.csv,
            report_path: self.report,
            seed: self.seed,
            min_wells: self.min_wells.unwrap_or(defaults.min_wells),
            max_wells: self.max_wells.unwrap_or(defaults.max_wells),
            reference_date: defaults.reference_date,
        }
    }
}

pub fn load_config(path: &Path) -> Result<GenerateConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}
