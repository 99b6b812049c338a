use chrono::{Days, NaiveDate};
use rand::Rng;

use wellgen_core::{
    Catalog, District, Infrastructure, LandUse, NoteInputs, Ownership, SeasonalVariation,
    UsageProfile, UsageType, WaterSource, WellRecord, WellStatus, WellType, advisory_notes,
    contamination_risk, quality_grade, recharge_trend, suitable_for_drinking,
    suitable_for_irrigation,
};

use crate::sampling::{jittered, pick, round_to, uniform_rounded};

const TDS_JITTER: i32 = 30;
const COORDINATE_JITTER: f64 = 0.2;
const INSPECTION_DAYS_AGO: std::ops::RangeInclusive<u64> = 5..=180;

/// Builds well records for the districts of one catalog.
#[derive(Debug, Clone)]
pub struct WellGenerator<'a> {
    catalog: &'a Catalog,
    today: NaiveDate,
}

impl<'a> WellGenerator<'a> {
    /// `today` anchors the last-inspection dates.
    pub fn new(catalog: &'a Catalog, today: NaiveDate) -> Self {
        Self { catalog, today }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        district: &District,
        sequence: u32,
        rng: &mut R,
    ) -> WellRecord {
        let terrain = district.terrain;
        let coastal = district.is_coastal();

        let tds = rng
            .random_range(terrain.tds_base_range())
            .saturating_add_signed(rng.random_range(-TDS_JITTER..=TDS_JITTER));
        let ph = uniform_rounded(terrain.ph_range(), 1, rng);
        let conductivity = jittered(f64::from(tds) * 1.9, 50, rng);
        let hardness = jittered(f64::from(tds) * 0.38, 20, rng);
        let alkalinity = jittered(f64::from(hardness) * 0.6, 15, rng);
        let nitrate = rng.random_range(18..=75);
        let fluoride = uniform_rounded(district.fluoride_range(), 2, rng);
        let chloride = rng.random_range(terrain.chloride_range());
        let sulfate = jittered(f64::from(chloride) * 0.45, 20, rng);
        let iron = uniform_rounded(0.12..=0.4, 2, rng);
        let arsenic = uniform_rounded(0.002..=0.018, 3, rng);

        let water_level_meters = uniform_rounded(terrain.water_level_range(), 1, rng);
        let depth_meters = rng.random_range(terrain.depth_range());
        let yield_lph = rng.random_range(terrain.yield_range());

        let drinkable = suitable_for_drinking(tds, nitrate, fluoride, arsenic);

        let well_type = if terrain.is_delta() {
            WellType::OpenWell
        } else {
            pick(&[WellType::Borewell, WellType::TubeWell], rng)
        };

        let usage_type = match district.usage {
            UsageProfile::IndustrialBelt => {
                pick(&[UsageType::Industrial, UsageType::Agricultural], rng)
            }
            _ if terrain.is_delta() => UsageType::Agricultural,
            UsageProfile::Farming => UsageType::Agricultural,
            UsageProfile::Mixed => pick(&[UsageType::Domestic, UsageType::Agricultural], rng),
        };

        let ownership = pick(
            &[Ownership::Government, Ownership::Community, Ownership::Private],
            rng,
        );

        let water_source = if district.aquifer.is_alluvial() {
            WaterSource::UnconfinedAquifer
        } else {
            WaterSource::FracturedRockAquifer
        };

        let nearby_land_use = if coastal {
            LandUse::Coastal
        } else if district.urban {
            LandUse::Urban
        } else if terrain.is_delta() {
            LandUse::AgriculturalPaddy
        } else if terrain.is_hilly() {
            LandUse::Hilly
        } else {
            pick(&[LandUse::Rural, LandUse::Agricultural, LandUse::Urban], rng)
        };

        let seasonal_variation = if terrain.is_delta() || terrain.is_hilly() {
            SeasonalVariation::High
        } else {
            pick(&[SeasonalVariation::Moderate, SeasonalVariation::Low], rng)
        };

        let infrastructure = if usage_type == UsageType::Industrial {
            Infrastructure::IndustrialPump
        } else if terrain.is_hilly() {
            Infrastructure::GravityFlow
        } else {
            pick(
                &[
                    Infrastructure::SubmersiblePump,
                    Infrastructure::ElectricPump,
                    Infrastructure::HandPump,
                ],
                rng,
            )
        };

        let days_ago = rng.random_range(INSPECTION_DAYS_AGO);
        let last_inspection = self
            .today
            .checked_sub_days(Days::new(days_ago))
            .unwrap_or(self.today);

        let notes = advisory_notes(NoteInputs {
            tds,
            fluoride,
            nitrate,
            coastal,
            suitable_for_drinking: drinkable,
        });

        let lat = jitter_coordinate(district.lat, rng);
        let lon = jitter_coordinate(district.lon, rng);

        WellRecord {
            id: WellRecord::format_id(self.catalog.state_code, &district.code(), sequence),
            name: format!("{} Well {sequence}", district.name),
            region: district.region.to_string(),
            district: district.name.to_string(),
            state: self.catalog.state.to_string(),
            lat,
            lon,
            aquifer: format!("{} Aquifer", district.aquifer.label()),
            tds_level: tds,
            ph,
            conductivity,
            hardness,
            alkalinity,
            nitrate,
            fluoride,
            chloride,
            sulfate,
            iron,
            arsenic,
            contamination_risk: contamination_risk(tds),
            water_level_meters,
            depth_meters,
            yield_lph,
            recharge_trend: recharge_trend(yield_lph),
            status: WellStatus::Active,
            last_inspection,
            well_type,
            usage_type,
            ownership,
            water_source,
            water_quality_grade: quality_grade(tds, nitrate, fluoride),
            suitable_for_drinking: drinkable,
            suitable_for_irrigation: suitable_for_irrigation(tds),
            nearby_land_use,
            seasonal_variation,
            infrastructure,
            notes,
        }
    }
}

fn jitter_coordinate<R: Rng + ?Sized>(base: f64, rng: &mut R) -> f64 {
    round_to(
        base + rng.random_range(-COORDINATE_JITTER..=COORDINATE_JITTER),
        4,
    )
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use wellgen_core::{
        ContaminationRisk, RechargeTrend, TAMIL_NADU, WaterQualityGrade, assessment,
    };

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap_or_default()
    }

    fn records_for(name: &str, count: u32) -> Vec<WellRecord> {
        let district = TAMIL_NADU.require(name).expect("district exists");
        let generator = WellGenerator::new(&TAMIL_NADU, today());
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        (1..=count)
            .map(|sequence| generator.generate(district, sequence, &mut rng))
            .collect()
    }

    #[test]
    fn identity_fields_follow_district() {
        let records = records_for("Chennai", 12);
        let record = &records[11];
        assert_eq!(record.id, "TN-CHE-012");
        assert_eq!(record.name, "Chennai Well 12");
        assert_eq!(record.region, "Chennai Metropolitan");
        assert_eq!(record.state, "Tamil Nadu");
        assert_eq!(record.aquifer, "Coastal Alluvial Aquifer");
        assert_eq!(record.status, WellStatus::Active);
    }

    #[test]
    fn coastal_alluvial_district_is_unconfined_and_coastal() {
        for record in records_for("Nagapattinam", 200) {
            assert_eq!(record.water_source, WaterSource::UnconfinedAquifer);
            assert_eq!(record.nearby_land_use, LandUse::Coastal);
            assert!((620..=980).contains(&record.tds_level));
            assert!((7.7..=8.0).contains(&record.ph));
            assert!((300..=450).contains(&record.chloride));
            assert!(record.notes.contains(assessment::SEAWATER_INTRUSION_NOTE));
        }
    }

    #[test]
    fn delta_wells_are_open_agricultural_paddy() {
        for record in records_for("Thanjavur", 200) {
            assert_eq!(record.well_type, WellType::OpenWell);
            assert_eq!(record.usage_type, UsageType::Agricultural);
            assert_eq!(record.nearby_land_use, LandUse::AgriculturalPaddy);
            assert_eq!(record.seasonal_variation, SeasonalVariation::High);
            assert!((350..=510).contains(&record.tds_level));
            assert!((2800..=3200).contains(&record.yield_lph));
            assert_eq!(record.recharge_trend, RechargeTrend::Rising);
        }
    }

    #[test]
    fn hilly_wells_use_gravity_flow() {
        for record in records_for("Nilgiris", 200) {
            assert_eq!(record.infrastructure, Infrastructure::GravityFlow);
            assert_eq!(record.nearby_land_use, LandUse::Hilly);
            assert_eq!(record.water_source, WaterSource::FracturedRockAquifer);
            assert!((3.0..=6.0).contains(&record.water_level_meters));
            assert!((18..=28).contains(&record.depth_meters));
        }
    }

    #[test]
    fn industrial_usage_always_gets_industrial_pump() {
        let records = records_for("Tiruppur", 300);
        assert!(records.iter().any(|r| r.usage_type == UsageType::Industrial));
        for record in records {
            assert_ne!(record.usage_type, UsageType::Domestic);
            if record.usage_type == UsageType::Industrial {
                assert_eq!(record.infrastructure, Infrastructure::IndustrialPump);
            }
        }
    }

    #[test]
    fn high_fluoride_districts_draw_from_the_raised_range() {
        for record in records_for("Madurai", 200) {
            assert!((0.8..=1.5).contains(&record.fluoride), "{}", record.fluoride);
            assert_eq!(record.nearby_land_use, LandUse::Urban);
        }
    }

    #[test]
    fn classifications_match_chemistry() {
        for record in records_for("Vellore", 300) {
            assert_eq!(
                record.contamination_risk,
                contamination_risk(record.tds_level)
            );
            assert_eq!(
                record.water_quality_grade,
                quality_grade(record.tds_level, record.nitrate, record.fluoride)
            );
            if record.tds_level >= 600 {
                assert_eq!(record.contamination_risk, ContaminationRisk::High);
                assert_eq!(record.water_quality_grade, WaterQualityGrade::D);
            }
            assert_ne!(record.recharge_trend, RechargeTrend::Declining);
        }
    }

    #[test]
    fn inspection_dates_fall_in_the_last_six_months() {
        let earliest = today() - Days::new(180);
        let latest = today() - Days::new(5);
        for record in records_for("Salem", 200) {
            assert!(record.last_inspection >= earliest);
            assert!(record.last_inspection <= latest);
        }
    }

    #[test]
    fn coordinates_stay_near_the_district() {
        let district = TAMIL_NADU.require("Kanyakumari").expect("district exists");
        for record in records_for("Kanyakumari", 200) {
            assert!((record.lat - district.lat).abs() <= 0.20005);
            assert!((record.lon - district.lon).abs() <= 0.20005);
            assert_eq!(round_to(record.lat, 4), record.lat);
        }
    }
}
