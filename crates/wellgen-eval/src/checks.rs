use std::fmt::Debug;
use std::ops::RangeInclusive;

use chrono::Days;

use wellgen_core::{
    Catalog, District, Infrastructure, LandUse, NoteInputs, RechargeTrend, SeasonalVariation,
    UsageProfile, UsageType, WaterSource, WellRecord, WellType, advisory_notes,
    contamination_risk, quality_grade, recharge_trend, suitable_for_drinking,
    suitable_for_irrigation,
};

use crate::model::{EvaluateOptions, EvaluationReport, Violation};

const FLOAT_TOLERANCE: f64 = 1e-9;
/// Largest offset of a jittered, 4-decimal coordinate from its district.
const COORDINATE_SPREAD: f64 = 0.2 + 0.00005;

/// Checks one record against its catalog district.
pub fn check_record(
    record: &WellRecord,
    row_index: u64,
    district: &District,
    catalog: &Catalog,
    options: &EvaluateOptions,
    report: &mut EvaluationReport,
) {
    let mut check = RecordCheck {
        record,
        row_index,
        report,
    };
    check_identity(&mut check, district, catalog);
    check_readings(&mut check, district);
    check_assessments(&mut check, district);
    check_categories(&mut check, district);
    if let Some(reference) = options.reference_date {
        let earliest = reference.checked_sub_days(Days::new(180));
        let latest = reference.checked_sub_days(Days::new(5));
        if let (Some(earliest), Some(latest)) = (earliest, latest)
            && !(earliest..=latest).contains(&record.last_inspection)
        {
            check.fail(
                "inspection_window",
                format!(
                    "lastInspection {} outside {earliest}..={latest}",
                    record.last_inspection
                ),
            );
        }
    }
}

struct RecordCheck<'a> {
    record: &'a WellRecord,
    row_index: u64,
    report: &'a mut EvaluationReport,
}

impl RecordCheck<'_> {
    fn fail(&mut self, code: &str, message: String) {
        self.report.record(Violation {
            code: code.to_string(),
            path: format!("{}/{}", self.record.district, self.record.id),
            message,
            row_index: Some(self.row_index),
        });
    }

    fn expect_eq<T: PartialEq + Debug>(&mut self, code: &str, field: &str, actual: T, expected: T) {
        if actual != expected {
            self.fail(code, format!("{field} is {actual:?}, expected {expected:?}"));
        }
    }

    fn expect_in<T: PartialOrd + Debug>(&mut self, field: &str, value: T, range: RangeInclusive<T>) {
        if !range.contains(&value) {
            self.fail("range", format!("{field} {value:?} outside {range:?}"));
        }
    }

    fn expect_in_f64(&mut self, field: &str, value: f64, range: RangeInclusive<f64>) {
        let widened = (range.start() - FLOAT_TOLERANCE)..=(range.end() + FLOAT_TOLERANCE);
        if !widened.contains(&value) {
            self.fail("range", format!("{field} {value} outside {range:?}"));
        }
    }

    /// `value` must be `base` plus an integer jitter of at most `spread`,
    /// truncated toward zero.
    fn expect_jittered(&mut self, field: &str, value: u32, base: f64, spread: f64) {
        let value = f64::from(value);
        if value < base - spread - 1.0 || value > base + spread {
            self.fail(
                "derived_range",
                format!("{field} {value} not within {spread} of {base:.2}"),
            );
        }
    }

    fn expect_one_of<T: PartialEq + Debug>(&mut self, field: &str, value: T, allowed: &[T]) {
        if !allowed.contains(&value) {
            self.fail(
                "rule_mismatch",
                format!("{field} is {value:?}, expected one of {allowed:?}"),
            );
        }
    }
}

fn check_identity(check: &mut RecordCheck<'_>, district: &District, catalog: &Catalog) {
    let record = check.record;
    match record.sequence() {
        Ok(sequence) => {
            let id = WellRecord::format_id(catalog.state_code, &district.code(), sequence);
            check.expect_eq("id_format", "id", record.id.as_str(), id.as_str());
            let name = format!("{} Well {sequence}", district.name);
            check.expect_eq("name_format", "name", record.name.as_str(), name.as_str());
        }
        Err(err) => check.fail("id_format", err.to_string()),
    }

    check.expect_eq(
        "district_mismatch",
        "region",
        record.region.as_str(),
        district.region,
    );
    check.expect_eq("district_mismatch", "state", record.state.as_str(), catalog.state);
    let aquifer = format!("{} Aquifer", district.aquifer.label());
    check.expect_eq(
        "district_mismatch",
        "aquifer",
        record.aquifer.as_str(),
        aquifer.as_str(),
    );

    if (record.lat - district.lat).abs() > COORDINATE_SPREAD
        || (record.lon - district.lon).abs() > COORDINATE_SPREAD
    {
        check.fail(
            "coordinate_range",
            format!(
                "({}, {}) is more than 0.2 degrees from ({}, {})",
                record.lat, record.lon, district.lat, district.lon
            ),
        );
    }
}

fn check_readings(check: &mut RecordCheck<'_>, district: &District) {
    let record = check.record;
    let terrain = district.terrain;

    let base = terrain.tds_base_range();
    check.expect_in(
        "tdsLevel",
        record.tds_level,
        base.start().saturating_sub(30)..=base.end() + 30,
    );
    check.expect_in_f64("pH", record.ph, terrain.ph_range());
    check.expect_jittered(
        "conductivity",
        record.conductivity,
        f64::from(record.tds_level) * 1.9,
        50.0,
    );
    check.expect_jittered(
        "hardness",
        record.hardness,
        f64::from(record.tds_level) * 0.38,
        20.0,
    );
    check.expect_jittered(
        "alkalinity",
        record.alkalinity,
        f64::from(record.hardness) * 0.6,
        15.0,
    );
    check.expect_in("nitrate", record.nitrate, 18..=75);
    check.expect_in_f64("fluoride", record.fluoride, district.fluoride_range());
    check.expect_in("chloride", record.chloride, terrain.chloride_range());
    check.expect_jittered(
        "sulfate",
        record.sulfate,
        f64::from(record.chloride) * 0.45,
        20.0,
    );
    check.expect_in_f64("iron", record.iron, 0.12..=0.4);
    check.expect_in_f64("arsenic", record.arsenic, 0.002..=0.018);
    check.expect_in_f64(
        "waterLevelMeters",
        record.water_level_meters,
        terrain.water_level_range(),
    );
    check.expect_in("depthMeters", record.depth_meters, terrain.depth_range());
    check.expect_in("yieldLph", record.yield_lph, terrain.yield_range());
}

fn check_assessments(check: &mut RecordCheck<'_>, district: &District) {
    let record = check.record;
    let drinkable = suitable_for_drinking(
        record.tds_level,
        record.nitrate,
        record.fluoride,
        record.arsenic,
    );

    check.expect_eq(
        "risk_mismatch",
        "contaminationRisk",
        record.contamination_risk,
        contamination_risk(record.tds_level),
    );
    check.expect_eq(
        "grade_mismatch",
        "waterQualityGrade",
        record.water_quality_grade,
        quality_grade(record.tds_level, record.nitrate, record.fluoride),
    );
    check.expect_eq(
        "drinking_mismatch",
        "suitableForDrinking",
        record.suitable_for_drinking,
        drinkable,
    );
    check.expect_eq(
        "irrigation_mismatch",
        "suitableForIrrigation",
        record.suitable_for_irrigation,
        suitable_for_irrigation(record.tds_level),
    );
    check.expect_eq(
        "trend_mismatch",
        "rechargeTrend",
        record.recharge_trend,
        recharge_trend(record.yield_lph),
    );
    if record.recharge_trend == RechargeTrend::Declining {
        check.fail(
            "declining_trend",
            format!("Declining trend at yield {} LPH", record.yield_lph),
        );
    }

    let notes = advisory_notes(NoteInputs {
        tds: record.tds_level,
        fluoride: record.fluoride,
        nitrate: record.nitrate,
        coastal: district.is_coastal(),
        suitable_for_drinking: drinkable,
    });
    check.expect_eq("notes_mismatch", "notes", record.notes.as_str(), notes.as_str());
}

fn check_categories(check: &mut RecordCheck<'_>, district: &District) {
    let record = check.record;
    let terrain = district.terrain;

    if terrain.is_delta() {
        check.expect_one_of("wellType", record.well_type, &[WellType::OpenWell]);
    } else {
        check.expect_one_of(
            "wellType",
            record.well_type,
            &[WellType::Borewell, WellType::TubeWell],
        );
    }

    let usage: &[UsageType] = match district.usage {
        UsageProfile::IndustrialBelt => &[UsageType::Industrial, UsageType::Agricultural],
        _ if terrain.is_delta() => &[UsageType::Agricultural],
        UsageProfile::Farming => &[UsageType::Agricultural],
        UsageProfile::Mixed => &[UsageType::Domestic, UsageType::Agricultural],
    };
    check.expect_one_of("usageType", record.usage_type, usage);

    let source = if district.aquifer.is_alluvial() {
        WaterSource::UnconfinedAquifer
    } else {
        WaterSource::FracturedRockAquifer
    };
    check.expect_one_of("waterSource", record.water_source, &[source]);

    let land_use: &[LandUse] = if terrain.is_coastal() {
        &[LandUse::Coastal]
    } else if district.urban {
        &[LandUse::Urban]
    } else if terrain.is_delta() {
        &[LandUse::AgriculturalPaddy]
    } else if terrain.is_hilly() {
        &[LandUse::Hilly]
    } else {
        &[LandUse::Rural, LandUse::Agricultural, LandUse::Urban]
    };
    check.expect_one_of("nearbyLandUse", record.nearby_land_use, land_use);

    let seasonal: &[SeasonalVariation] = if terrain.is_delta() || terrain.is_hilly() {
        &[SeasonalVariation::High]
    } else {
        &[SeasonalVariation::Moderate, SeasonalVariation::Low]
    };
    check.expect_one_of("seasonalVariation", record.seasonal_variation, seasonal);

    let infrastructure: &[Infrastructure] = if record.usage_type == UsageType::Industrial {
        &[Infrastructure::IndustrialPump]
    } else if terrain.is_hilly() {
        &[Infrastructure::GravityFlow]
    } else {
        &[
            Infrastructure::SubmersiblePump,
            Infrastructure::ElectricPump,
            Infrastructure::HandPump,
        ]
    };
    check.expect_one_of("infrastructure", record.infrastructure, infrastructure);
}
