//! Water quality rules derived from a well's measured chemistry.
//!
//! Every function here is pure; the generator and the evaluator both call
//! them so that a record's classifications always agree with its readings.

use crate::model::{ContaminationRisk, RechargeTrend, WaterQualityGrade};

pub const HIGH_TDS_NOTE: &str = "High TDS. Requires treatment.";
pub const HIGH_FLUORIDE_NOTE: &str = "High fluoride. Requires defluoridation.";
pub const SEAWATER_INTRUSION_NOTE: &str = "Seawater intrusion risk.";
pub const ELEVATED_NITRATE_NOTE: &str = "Elevated nitrate levels.";
pub const NOT_DRINKABLE_NOTE: &str = "Not suitable for drinking without treatment.";
pub const STABLE_NOTE: &str = "Stable water quality.";

pub fn contamination_risk(tds: u32) -> ContaminationRisk {
    if tds >= 600 {
        ContaminationRisk::High
    } else if tds >= 500 {
        ContaminationRisk::Moderate
    } else {
        ContaminationRisk::Low
    }
}

/// Trend from yield in litres per hour.
///
/// Generated yields never drop below 1100 LPH, so `Declining` is unreachable
/// in practice. The thresholds are kept as they are.
pub fn recharge_trend(yield_lph: u32) -> RechargeTrend {
    if yield_lph < 1000 {
        RechargeTrend::Declining
    } else if yield_lph > 1800 {
        RechargeTrend::Rising
    } else {
        RechargeTrend::Stable
    }
}

pub fn quality_grade(tds: u32, nitrate: u32, fluoride: f64) -> WaterQualityGrade {
    if tds < 400 && nitrate < 40 && fluoride < 0.8 {
        WaterQualityGrade::A
    } else if tds < 500 && nitrate < 50 {
        WaterQualityGrade::B
    } else if tds < 600 {
        WaterQualityGrade::C
    } else {
        WaterQualityGrade::D
    }
}

pub fn suitable_for_drinking(tds: u32, nitrate: u32, fluoride: f64, arsenic: f64) -> bool {
    tds < 500 && nitrate < 45 && fluoride < 1.0 && arsenic < 0.01
}

pub fn suitable_for_irrigation(tds: u32) -> bool {
    tds < 900
}

/// Readings that decide which advisories apply to a well.
#[derive(Debug, Clone, Copy)]
pub struct NoteInputs {
    pub tds: u32,
    pub fluoride: f64,
    pub nitrate: u32,
    pub coastal: bool,
    pub suitable_for_drinking: bool,
}

/// Space-joined advisories, or the stable-quality note when none apply.
pub fn advisory_notes(inputs: NoteInputs) -> String {
    let mut notes = Vec::new();
    if inputs.tds >= 600 {
        notes.push(HIGH_TDS_NOTE);
    }
    if inputs.fluoride >= 1.0 {
        notes.push(HIGH_FLUORIDE_NOTE);
    }
    if inputs.coastal {
        notes.push(SEAWATER_INTRUSION_NOTE);
    }
    if inputs.nitrate >= 50 {
        notes.push(ELEVATED_NITRATE_NOTE);
    }
    if !inputs.suitable_for_drinking {
        notes.push(NOT_DRINKABLE_NOTE);
    }

    if notes.is_empty() {
        STABLE_NOTE.to_string()
    } else {
        notes.join(" ")
    }
}
