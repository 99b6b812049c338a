use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use wellgen_core::{Catalog, WellRecord};

use crate::checks::check_record;
use crate::errors::EvaluationError;
use crate::model::{EvaluateOptions, EvaluationReport, Violation};

/// Evaluate a full dataset: every record against its district, then the
/// collection-wide ordering, key uniqueness and per-district counts.
pub fn evaluate(
    records: &[WellRecord],
    catalog: &Catalog,
    options: &EvaluateOptions,
) -> EvaluationReport {
    let mut report = EvaluationReport {
        wells_checked: records.len() as u64,
        ..EvaluationReport::default()
    };

    let mut per_district: BTreeMap<&str, u32> = BTreeMap::new();
    let mut keys: HashSet<(&str, &str)> = HashSet::new();

    for (index, record) in records.iter().enumerate() {
        let row_index = index as u64;
        *per_district.entry(record.district.as_str()).or_insert(0) += 1;

        if !keys.insert(record.sort_key()) {
            report.record(record_violation(
                "duplicate_id",
                record,
                row_index,
                format!("id {} appears more than once", record.id),
            ));
        }

        match catalog.require(&record.district) {
            Ok(district) => check_record(record, row_index, district, catalog, options, &mut report),
            Err(err) => report.record(record_violation(
                "unknown_district",
                record,
                row_index,
                err.to_string(),
            )),
        }
    }

    for (index, pair) in records.windows(2).enumerate() {
        if pair[0].sort_key() >= pair[1].sort_key() {
            report.record(record_violation(
                "unsorted",
                &pair[1],
                index as u64 + 1,
                format!(
                    "{}/{} does not sort after {}/{}",
                    pair[1].district, pair[1].id, pair[0].district, pair[0].id
                ),
            ));
        }
    }

    let wells = options.min_wells..=options.max_wells;
    for district in catalog.districts {
        let count = per_district.get(district.name).copied().unwrap_or(0);
        if !wells.contains(&count) {
            report.record(Violation {
                code: "district_count".to_string(),
                path: district.name.to_string(),
                message: format!("{count} wells, expected {wells:?}"),
                row_index: None,
            });
        }
    }
    report.districts_seen = per_district.len() as u64;

    report
}

/// Write the full violation list as pretty JSON.
pub fn write_violations(path: &Path, report: &EvaluationReport) -> Result<(), EvaluationError> {
    std::fs::write(path, serde_json::to_vec_pretty(&report.violations)?)?;
    Ok(())
}

fn record_violation(code: &str, record: &WellRecord, row_index: u64, message: String) -> Violation {
    Violation {
        code: code.to_string(),
        path: format!("{}/{}", record.district, record.id),
        message,
        row_index: Some(row_index),
    }
}
