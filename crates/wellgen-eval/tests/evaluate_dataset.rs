use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use wellgen_core::{
    ContaminationRisk, LandUse, RechargeTrend, TAMIL_NADU, WaterQualityGrade, WellRecord,
};
use wellgen_eval::{EvaluateOptions, evaluate, render_report};
use wellgen_generate::{WellGenerator, generate_batch};

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap_or_default()
}

fn dataset(seed: u64) -> Vec<WellRecord> {
    let generator = WellGenerator::new(&TAMIL_NADU, reference_date());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_batch(&generator, 5..=8, &mut rng).records
}

fn options() -> EvaluateOptions {
    EvaluateOptions {
        reference_date: Some(reference_date()),
        ..EvaluateOptions::default()
    }
}

#[test]
fn generated_datasets_pass_every_check() {
    for seed in 0..25 {
        let records = dataset(seed);
        let report = evaluate(&records, &TAMIL_NADU, &options());
        assert!(
            report.is_clean(),
            "seed {seed}: {}",
            render_report(&report, 10)
        );
        assert_eq!(report.wells_checked, records.len() as u64);
        assert_eq!(report.districts_seen, TAMIL_NADU.len() as u64);
    }
}

#[test]
fn flags_inconsistent_risk() {
    let mut records = dataset(1);
    let record = &mut records[0];
    record.contamination_risk = match record.contamination_risk {
        ContaminationRisk::High => ContaminationRisk::Low,
        _ => ContaminationRisk::High,
    };

    let report = evaluate(&records, &TAMIL_NADU, &options());
    assert_eq!(report.violations_by_code.get("risk_mismatch"), Some(&1));
    assert_eq!(report.violations[0].row_index, Some(0));
}

#[test]
fn flags_grade_that_ignores_chemistry() {
    let mut records = dataset(2);
    let record = &mut records[3];
    record.tds_level = 350;
    record.nitrate = 30;
    record.fluoride = 0.5;
    record.water_quality_grade = WaterQualityGrade::C;

    let report = evaluate(&records, &TAMIL_NADU, &options());
    assert!(report.has_code("grade_mismatch"));
}

#[test]
fn flags_unsorted_and_duplicate_records() {
    let mut records = dataset(3);
    records.swap(0, 1);
    let report = evaluate(&records, &TAMIL_NADU, &options());
    assert!(report.has_code("unsorted"));

    let mut records = dataset(3);
    let copy = records[0].clone();
    records.insert(1, copy);
    let report = evaluate(&records, &TAMIL_NADU, &options());
    assert!(report.has_code("duplicate_id"));
    assert!(report.has_code("district_count") || report.has_code("unsorted"));
}

#[test]
fn flags_missing_district_and_unknown_names() {
    let mut records = dataset(4);
    records.retain(|record| record.district != "Nilgiris");
    let report = evaluate(&records, &TAMIL_NADU, &options());
    assert_eq!(report.violations_by_code.get("district_count"), Some(&1));

    let mut records = dataset(4);
    records[0].district = "Atlantis".to_string();
    let report = evaluate(&records, &TAMIL_NADU, &options());
    assert!(report.has_code("unknown_district"));
}

#[test]
fn flags_coastal_rule_breaks() {
    let mut records = dataset(5);
    let index = records
        .iter()
        .position(|record| record.district == "Cuddalore")
        .expect("coastal record");
    records[index].nearby_land_use = LandUse::Rural;

    let report = evaluate(&records, &TAMIL_NADU, &options());
    assert_eq!(report.violations_by_code.get("rule_mismatch"), Some(&1));
}

#[test]
fn flags_declining_trend() {
    let mut records = dataset(6);
    records[0].yield_lph = 900;
    records[0].recharge_trend = RechargeTrend::Declining;

    let report = evaluate(&records, &TAMIL_NADU, &options());
    assert!(report.has_code("declining_trend"));
    assert!(report.has_code("range"));
}

#[test]
fn flags_stale_inspection_dates() {
    let mut records = dataset(7);
    records[0].last_inspection = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default();

    let report = evaluate(&records, &TAMIL_NADU, &options());
    assert!(report.has_code("inspection_window"));

    let relaxed = EvaluateOptions::default();
    assert!(evaluate(&records, &TAMIL_NADU, &relaxed).is_clean());
}
