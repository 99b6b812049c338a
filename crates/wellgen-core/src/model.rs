use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One synthesized groundwater well.
///
/// Field order is the key order of the emitted JSON objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellRecord {
    pub id: String,
    pub name: String,
    pub region: String,
    pub district: String,
    pub state: String,
    pub lat: f64,
    pub lon: f64,
    pub aquifer: String,
    pub tds_level: u32,
    #[serde(rename = "pH")]
    pub ph: f64,
    pub conductivity: u32,
    pub hardness: u32,
    pub alkalinity: u32,
    pub nitrate: u32,
    pub fluoride: f64,
    pub chloride: u32,
    pub sulfate: u32,
    pub iron: f64,
    pub arsenic: f64,
    pub contamination_risk: ContaminationRisk,
    pub water_level_meters: f64,
    pub depth_meters: u32,
    pub yield_lph: u32,
    pub recharge_trend: RechargeTrend,
    pub status: WellStatus,
    pub last_inspection: NaiveDate,
    pub well_type: WellType,
    pub usage_type: UsageType,
    pub ownership: Ownership,
    pub water_source: WaterSource,
    pub water_quality_grade: WaterQualityGrade,
    pub suitable_for_drinking: bool,
    pub suitable_for_irrigation: bool,
    pub nearby_land_use: LandUse,
    pub seasonal_variation: SeasonalVariation,
    pub infrastructure: Infrastructure,
    pub notes: String,
}

impl WellRecord {
    /// Builds the `<state>-<district code>-<nnn>` identifier.
    pub fn format_id(state_code: &str, district_code: &str, sequence: u32) -> String {
        format!("{state_code}-{district_code}-{sequence:03}")
    }

    /// Sequence number encoded in the id suffix.
    pub fn sequence(&self) -> Result<u32> {
        self.id
            .rsplit_once('-')
            .and_then(|(_, suffix)| (suffix.len() == 3).then_some(suffix))
            .and_then(|suffix| suffix.parse().ok())
            .ok_or_else(|| Error::InvalidRecord(format!("malformed id '{}'", self.id)))
    }

    /// Ordering key of the output collection.
    pub fn sort_key(&self) -> (&str, &str) {
        (self.district.as_str(), self.id.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContaminationRisk {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RechargeTrend {
    Declining,
    Stable,
    Rising,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WellStatus {
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WaterQualityGrade {
    A,
    B,
    C,
    D,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WellType {
    Borewell,
    #[serde(rename = "Open Well")]
    OpenWell,
    #[serde(rename = "Tube Well")]
    TubeWell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UsageType {
    Domestic,
    Agricultural,
    Industrial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ownership {
    Government,
    Community,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterSource {
    #[serde(rename = "Unconfined Aquifer")]
    UnconfinedAquifer,
    #[serde(rename = "Fractured Rock Aquifer")]
    FracturedRockAquifer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandUse {
    Coastal,
    Urban,
    #[serde(rename = "Agricultural Paddy")]
    AgriculturalPaddy,
    Hilly,
    Rural,
    Agricultural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeasonalVariation {
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Infrastructure {
    #[serde(rename = "Submersible pump")]
    SubmersiblePump,
    #[serde(rename = "Hand pump")]
    HandPump,
    #[serde(rename = "Electric pump")]
    ElectricPump,
    #[serde(rename = "Gravity flow")]
    GravityFlow,
    #[serde(rename = "Industrial pump")]
    IndustrialPump,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str) -> WellRecord {
        WellRecord {
            id: id.to_string(),
            name: "Chennai Well 1".to_string(),
            region: "Chennai Metropolitan".to_string(),
            district: "Chennai".to_string(),
            state: "Tamil Nadu".to_string(),
            lat: 13.1,
            lon: 80.2,
            aquifer: "Coastal Alluvial Aquifer".to_string(),
            tds_level: 700,
            ph: 7.0,
            conductivity: 1330,
            hardness: 266,
            alkalinity: 160,
            nitrate: 30,
            fluoride: 0.5,
            chloride: 320,
            sulfate: 144,
            iron: 0.2,
            arsenic: 0.004,
            contamination_risk: ContaminationRisk::High,
            water_level_meters: 12.5,
            depth_meters: 40,
            yield_lph: 1500,
            recharge_trend: RechargeTrend::Stable,
            status: WellStatus::Active,
            last_inspection: NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date"),
            well_type: WellType::TubeWell,
            usage_type: UsageType::Domestic,
            ownership: Ownership::Government,
            water_source: WaterSource::UnconfinedAquifer,
            water_quality_grade: WaterQualityGrade::D,
            suitable_for_drinking: false,
            suitable_for_irrigation: true,
            nearby_land_use: LandUse::Coastal,
            seasonal_variation: SeasonalVariation::Low,
            infrastructure: Infrastructure::HandPump,
            notes: "High TDS. Requires treatment.".to_string(),
        }
    }

    #[test]
    fn sequence_reads_the_padded_suffix() {
        assert_eq!(sample("TN-CHE-007").sequence().expect("sequence"), 7);
    }

    #[test]
    fn sequence_rejects_malformed_ids() {
        assert!(sample("TN-CHE-7").sequence().is_err());
        assert!(sample("CHE").sequence().is_err());
    }

    #[test]
    fn serializes_with_dataset_keys_in_order() {
        let record = sample("TN-CHE-001");
        let text = serde_json::to_string(&record).expect("serialize record");
        assert!(text.starts_with(r#"{"id":"TN-CHE-001","name":"Chennai Well 1","region""#));
        assert!(text.contains(r#""aquifer":"Coastal Alluvial Aquifer","tdsLevel":700,"pH":7.0,"#));
        assert!(text.ends_with(r#""notes":"High TDS. Requires treatment."}"#));

        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["wellType"], "Tube Well");
        assert_eq!(json["status"], "active");
        assert_eq!(json["lastInspection"], "2024-03-09");
        assert_eq!(json["infrastructure"], "Hand pump");
    }
}
