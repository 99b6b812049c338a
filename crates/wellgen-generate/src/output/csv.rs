use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::Value;

use wellgen_core::WellRecord;

use super::{CountingWriter, ensure_parent};
use crate::errors::GenerationError;

/// Column names of the CSV export, in order.
pub const CSV_HEADERS: [&str; 37] = [
    "site_id",
    "name",
    "lat",
    "lon",
    "district",
    "state",
    "region",
    "aquifer",
    "survey_date",
    "depth_m",
    "static_water_level_m",
    "yield_lph",
    "tds",
    "pH",
    "conductivity",
    "hardness",
    "alkalinity",
    "nitrate",
    "fluoride",
    "chloride",
    "sulfate",
    "iron",
    "arsenic",
    "contaminationRisk",
    "rechargeTrend",
    "status",
    "wellType",
    "usageType",
    "ownership",
    "waterSource",
    "waterQualityGrade",
    "suitableForDrinking",
    "suitableForIrrigation",
    "nearbyLandUse",
    "seasonalVariation",
    "infrastructure",
    "notes",
];

/// Dataset key a CSV column is read from.
fn source_key(header: &str) -> &str {
    match header {
        "site_id" => "id",
        "survey_date" => "lastInspection",
        "depth_m" => "depthMeters",
        "static_water_level_m" => "waterLevelMeters",
        "yield_lph" => "yieldLph",
        "tds" => "tdsLevel",
        other => other,
    }
}

/// Write records as CSV. Returns the number of bytes written.
pub fn write_records_csv(path: &Path, records: &[WellRecord]) -> Result<u64, GenerationError> {
    ensure_parent(path)?;
    let counting = CountingWriter::new(BufWriter::new(File::create(path)?));
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(counting);

    writer.write_record(CSV_HEADERS)?;
    for record in records {
        writer.write_record(csv_row(record)?)?;
    }

    writer.flush()?;
    let mut counting = writer.into_inner().map_err(|err| err.into_error())?;
    counting.flush()?;
    Ok(counting.bytes_written())
}

pub fn csv_row(record: &WellRecord) -> Result<Vec<String>, GenerationError> {
    let value = serde_json::to_value(record)?;
    Ok(CSV_HEADERS
        .iter()
        .map(|header| {
            let cell = value.get(source_key(header)).map(cell_text).unwrap_or_default();
            if *header == "notes" {
                cell.replace(',', ";").replace('"', "'")
            } else {
                cell
            }
        })
        .collect())
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(number) => match number.as_f64() {
            Some(float) if number.is_f64() && float.fract() == 0.0 => format!("{float:.0}"),
            _ => number.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn integral_floats_drop_the_fraction() {
        assert_eq!(cell_text(&json!(7.0)), "7");
        assert_eq!(cell_text(&json!(7.4)), "7.4");
        assert_eq!(cell_text(&json!(0.012)), "0.012");
        assert_eq!(cell_text(&json!(512)), "512");
        assert_eq!(cell_text(&json!(true)), "true");
    }

    #[test]
    fn renamed_columns_read_dataset_keys() {
        assert_eq!(source_key("site_id"), "id");
        assert_eq!(source_key("tds"), "tdsLevel");
        assert_eq!(source_key("pH"), "pH");
    }
}
