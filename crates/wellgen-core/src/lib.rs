//! Core contracts for the groundwater well generator.
//!
//! This crate holds the static district catalog, the well record model and
//! the water quality assessment rules shared by the generator, the
//! evaluator and the CLI.

pub mod assessment;
pub mod catalog;
pub mod error;
pub mod model;

pub use assessment::{
    NoteInputs, advisory_notes, contamination_risk, quality_grade, recharge_trend,
    suitable_for_drinking, suitable_for_irrigation,
};
pub use catalog::{Aquifer, Catalog, District, TAMIL_NADU, Terrain, UsageProfile};
pub use error::{Error, Result};
pub use model::{
    ContaminationRisk, Infrastructure, LandUse, Ownership, RechargeTrend, SeasonalVariation,
    UsageType, WaterQualityGrade, WaterSource, WellRecord, WellStatus, WellType,
};
