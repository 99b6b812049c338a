use std::time::Instant;

use chrono::Local;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use wellgen_core::{Catalog, TAMIL_NADU, WellRecord};

use crate::batch::generate_batch;
use crate::errors::GenerationError;
use crate::generator::WellGenerator;
use crate::model::{GenerateOptions, GenerationReport};
use crate::output::csv::write_records_csv;
use crate::output::ensure_parent;
use crate::output::json::write_records_json;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub records: Vec<WellRecord>,
    pub report: GenerationReport,
}

/// Entry point for generating and writing a well dataset.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
    catalog: Catalog,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self {
            options,
            catalog: TAMIL_NADU,
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        self.options.validate()?;

        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let seed = self.options.seed.unwrap_or_else(rand::random::<u64>);
        let reference_date = self
            .options
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive());

        info!(
            run_id = %run_id,
            seed,
            state = self.catalog.state,
            districts = self.catalog.len(),
            reference_date = %reference_date,
            "generation started"
        );

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let generator = WellGenerator::new(&self.catalog, reference_date);
        let batch = generate_batch(&generator, self.options.wells_per_district(), &mut rng);

        let out_path = &self.options.out_path;
        let bytes_written = write_records_json(out_path, &batch.records).inspect_err(|err| {
            warn!(run_id = %run_id, path = %out_path.display(), error = %err, "dataset write failed");
        })?;
        info!(path = %out_path.display(), bytes_written, "dataset written");

        let mut csv_bytes = 0_u64;
        if let Some(csv_path) = &self.options.csv_path {
            csv_bytes = write_records_csv(csv_path, &batch.records)?;
            info!(path = %csv_path.display(), bytes_written = csv_bytes, "csv export written");
        }

        let report = GenerationReport {
            run_id: run_id.clone(),
            seed,
            state: self.catalog.state.to_string(),
            reference_date,
            wells: batch.records.len() as u64,
            districts: batch.districts,
            out_path: out_path.clone(),
            csv_path: self.options.csv_path.clone(),
            bytes_written: bytes_written + csv_bytes,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        if let Some(report_path) = &self.options.report_path {
            ensure_parent(report_path)?;
            std::fs::write(report_path, serde_json::to_vec_pretty(&report)?)?;
            info!(path = %report_path.display(), "generation report written");
        }

        info!(
            run_id = %run_id,
            wells = report.wells,
            districts = report.districts.len(),
            duration_ms = report.duration_ms,
            bytes_written = report.bytes_written,
            "generation completed"
        );

        Ok(GenerationResult {
            records: batch.records,
            report,
        })
    }
}
