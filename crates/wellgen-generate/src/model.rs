use std::ops::RangeInclusive;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use wellgen_core::Terrain;

use crate::errors::GenerationError;

pub const DEFAULT_OUTPUT: &str = "groundwaterData.json";
pub const DEFAULT_CSV_OUTPUT: &str = "sample_groundwater.csv";

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Path of the JSON dataset.
    pub out_path: PathBuf,
    /// Also export the dataset as CSV to this path.
    pub csv_path: Option<PathBuf>,
    /// Write the generation report as JSON to this path.
    pub report_path: Option<PathBuf>,
    /// Seed for the random source. A fresh seed is drawn when absent.
    pub seed: Option<u64>,
    pub min_wells: u32,
    pub max_wells: u32,
    /// Date the inspection offsets count back from. Defaults to today.
    pub reference_date: Option<NaiveDate>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(DEFAULT_OUTPUT),
            csv_path: None,
            report_path: None,
            seed: None,
            min_wells: 5,
            max_wells: 8,
            reference_date: None,
        }
    }
}

impl GenerateOptions {
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.min_wells == 0 {
            return Err(GenerationError::InvalidOptions(
                "min_wells must be at least 1".to_string(),
            ));
        }
        if self.min_wells > self.max_wells {
            return Err(GenerationError::InvalidOptions(format!(
                "min_wells ({}) must be <= max_wells ({})",
                self.min_wells, self.max_wells
            )));
        }
        if self.max_wells > 999 {
            return Err(GenerationError::InvalidOptions(
                "max_wells must fit the three-digit well sequence".to_string(),
            ));
        }
        Ok(())
    }

    pub fn wells_per_district(&self) -> RangeInclusive<u32> {
        self.min_wells..=self.max_wells
    }
}

/// Wells generated for one district.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictReport {
    pub district: String,
    pub terrain: Terrain,
    pub wells: u32,
}

/// Summary of a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: u64,
    pub state: String,
    pub reference_date: NaiveDate,
    pub wells: u64,
    pub districts: Vec<DistrictReport>,
    pub out_path: PathBuf,
    pub csv_path: Option<PathBuf>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_dataset_contract() {
        let options = GenerateOptions::default();
        assert_eq!(options.out_path, PathBuf::from("groundwaterData.json"));
        assert_eq!(options.wells_per_district(), 5..=8);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_range() {
        let options = GenerateOptions {
            min_wells: 9,
            max_wells: 4,
            ..GenerateOptions::default()
        };
        assert!(matches!(
            options.validate(),
            Err(GenerationError::InvalidOptions(_))
        ));
    }

    #[test]
    fn rejects_zero_wells() {
        let options = GenerateOptions {
            min_wells: 0,
            ..GenerateOptions::default()
        };
        assert!(options.validate().is_err());
    }
}
