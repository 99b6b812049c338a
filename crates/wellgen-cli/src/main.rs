mod config;
mod logging;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use config::{ConfigError, GenerateConfig, load_config};
use logging::{LogFormat, init_logging};
use wellgen_core::TAMIL_NADU;
use wellgen_eval::{
    EvaluateOptions, EvaluationError, evaluate, render_report, write_report, write_violations,
};
use wellgen_generate::model::{DEFAULT_CSV_OUTPUT, DEFAULT_OUTPUT};
use wellgen_generate::output::csv::write_records_csv;
use wellgen_generate::output::json::read_records_json;
use wellgen_generate::{GenerationEngine, GenerationError};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "wellgen", version, about = "Groundwater well dataset generator")]
struct Cli {
    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,
    /// Defaults to `generate` with no flags.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the well dataset.
    Generate(GenerateArgs),
    /// Convert a generated dataset to CSV.
    ToCsv(ToCsvArgs),
    /// Check a generated dataset against the generation rules.
    Evaluate(EvaluateArgs),
}

#[derive(Args, Debug, Default)]
struct GenerateArgs {
    /// Output path for the JSON dataset.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Also write a CSV export to this path.
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Write the generation report as JSON to this path.
    #[arg(long)]
    report: Option<PathBuf>,
    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
    /// Minimum wells per district.
    #[arg(long)]
    min_wells: Option<u32>,
    /// Maximum wells per district.
    #[arg(long)]
    max_wells: Option<u32>,
    /// TOML file with generation settings. Flags take precedence.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl GenerateArgs {
    fn overrides(&self) -> GenerateConfig {
        GenerateConfig {
            out: self.out.clone(),
            csv: self.csv.clone(),
            report: self.report.clone(),
            seed: self.seed,
            min_wells: self.min_wells,
            max_wells: self.max_wells,
        }
    }
}

#[derive(Args, Debug)]
struct ToCsvArgs {
    /// JSON dataset to convert.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    input: PathBuf,
    /// CSV output path.
    #[arg(long, default_value = DEFAULT_CSV_OUTPUT)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// JSON dataset to evaluate.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    input: PathBuf,
    /// Write a markdown report to this path.
    #[arg(long)]
    report: Option<PathBuf>,
    /// Write every violation as JSON to this path.
    #[arg(long)]
    violations: Option<PathBuf>,
    /// Date the inspection window counts back from (YYYY-MM-DD).
    #[arg(long)]
    reference_date: Option<NaiveDate>,
    #[arg(long, default_value_t = 5)]
    min_wells: u32,
    #[arg(long, default_value_t = 8)]
    max_wells: u32,
    /// Maximum violation examples in the report.
    #[arg(long, default_value_t = 20)]
    max_examples: usize,
    /// Fail when any violation is found.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_format).map_err(CliError::Logging)?;

    match cli.command {
        None => run_generate(GenerateArgs::default()),
        Some(Command::Generate(args)) => run_generate(args),
        Some(Command::ToCsv(args)) => run_to_csv(args),
        Some(Command::Evaluate(args)) => run_evaluate(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let file_config = match &args.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            load_config(path)?
        }
        None => GenerateConfig::default(),
    };
    let options = file_config.merge(args.overrides()).into_options();

    let result = GenerationEngine::new(options).run()?;

    println!(
        "Generated {} wells across {} districts",
        result.report.wells,
        result.report.districts.len()
    );
    Ok(())
}

fn run_to_csv(args: ToCsvArgs) -> Result<(), CliError> {
    let records = read_records_json(&args.input)?;
    let bytes_written = write_records_csv(&args.out, &records)?;
    tracing::info!(
        input = %args.input.display(),
        out = %args.out.display(),
        wells = records.len(),
        bytes_written,
        "csv export written"
    );

    println!("Converted {} wells to CSV", records.len());
    println!("CSV file written to: {}", args.out.display());
    Ok(())
}

fn run_evaluate(args: EvaluateArgs) -> Result<(), CliError> {
    let records = read_records_json(&args.input)?;
    let options = EvaluateOptions {
        min_wells: args.min_wells,
        max_wells: args.max_wells,
        reference_date: args.reference_date,
        max_examples: args.max_examples,
    };

    let report = evaluate(&records, &TAMIL_NADU, &options);
    tracing::info!(
        input = %args.input.display(),
        wells = report.wells_checked,
        violations = report.violations.len(),
        "evaluation finished"
    );

    if let Some(path) = &args.report {
        write_report(path, &render_report(&report, options.max_examples))?;
    }
    if let Some(path) = &args.violations {
        write_violations(path, &report)?;
    }

    println!(
        "Checked {} wells: {} violation(s)",
        report.wells_checked,
        report.violations.len()
    );

    if args.strict && !report.is_clean() {
        return Err(EvaluationError::Violations(report.violations.len()).into());
    }
    Ok(())
}
