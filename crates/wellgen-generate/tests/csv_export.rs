use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use wellgen_core::TAMIL_NADU;
use wellgen_generate::output::csv::{CSV_HEADERS, csv_row, write_records_csv};
use wellgen_generate::{WellGenerator, generate_batch};

fn records() -> Vec<wellgen_core::WellRecord> {
    let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap_or_default();
    let generator = WellGenerator::new(&TAMIL_NADU, today);
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    generate_batch(&generator, 5..=8, &mut rng).records
}

#[test]
fn header_row_lists_every_column() {
    let dir = temp_out_dir("header");
    let path = dir.join("sample_groundwater.csv");
    write_records_csv(&path, &records()).expect("write csv");

    let text = fs::read_to_string(&path).expect("read csv");
    let header = text.lines().next().expect("header line");
    assert_eq!(header, CSV_HEADERS.join(","));
    assert!(header.starts_with("site_id,name,lat,lon,district,state,region,aquifer,survey_date"));
}

#[test]
fn rows_map_renamed_columns() {
    let record = records().remove(0);
    let row = csv_row(&record).expect("row");
    let column = |name: &str| {
        let idx = CSV_HEADERS.iter().position(|h| *h == name).expect("column");
        row[idx].clone()
    };

    assert_eq!(column("site_id"), record.id);
    assert_eq!(column("survey_date"), record.last_inspection.format("%Y-%m-%d").to_string());
    assert_eq!(column("tds"), record.tds_level.to_string());
    assert_eq!(column("depth_m"), record.depth_meters.to_string());
    assert_eq!(column("yield_lph"), record.yield_lph.to_string());
    assert_eq!(column("status"), "active");
    assert_eq!(
        column("suitableForDrinking"),
        record.suitable_for_drinking.to_string()
    );
}

#[test]
fn notes_are_sanitized() {
    let mut record = records().remove(0);
    record.notes = "Check pump, \"urgent\"".to_string();
    let row = csv_row(&record).expect("row");
    assert_eq!(row.last().map(String::as_str), Some("Check pump; 'urgent'"));
}

#[test]
fn byte_count_matches_file_size() {
    let dir = temp_out_dir("bytes");
    let path = dir.join("sample_groundwater.csv");
    let bytes = write_records_csv(&path, &records()).expect("write csv");
    assert_eq!(bytes, fs::metadata(&path).expect("metadata").len());
}

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("wellgen_csv_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}
