use std::ops::RangeInclusive;

use rand::Rng;
use tracing::debug;

use wellgen_core::WellRecord;

use crate::generator::WellGenerator;
use crate::model::DistrictReport;

/// Records of one generation pass plus how many wells each district got.
#[derive(Debug, Clone)]
pub struct Batch {
    pub records: Vec<WellRecord>,
    pub districts: Vec<DistrictReport>,
}

/// Generates `wells_per_district` wells for every catalog district and
/// sorts the result by (district, id).
pub fn generate_batch<R: Rng + ?Sized>(
    generator: &WellGenerator<'_>,
    wells_per_district: RangeInclusive<u32>,
    rng: &mut R,
) -> Batch {
    let catalog = generator.catalog();
    let mut records = Vec::new();
    let mut districts = Vec::with_capacity(catalog.len());

    for district in catalog.districts {
        let count = rng.random_range(wells_per_district.clone());
        for sequence in 1..=count {
            records.push(generator.generate(district, sequence, rng));
        }
        debug!(district = district.name, wells = count, "district generated");
        districts.push(DistrictReport {
            district: district.name.to_string(),
            terrain: district.terrain,
            wells: count,
        });
    }

    records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    Batch { records, districts }
}
