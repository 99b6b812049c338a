use std::ops::RangeInclusive;

use serde::Serialize;

use crate::error::{Error, Result};

/// Terrain class that drives the chemistry and hydrology ranges of a district.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    Coastal,
    Delta,
    Hilly,
    Plains,
}

impl Terrain {
    pub fn is_coastal(self) -> bool {
        matches!(self, Terrain::Coastal)
    }

    pub fn is_delta(self) -> bool {
        matches!(self, Terrain::Delta)
    }

    pub fn is_hilly(self) -> bool {
        matches!(self, Terrain::Hilly)
    }

    /// Range of the base TDS draw, before the +/-30 jitter.
    pub fn tds_base_range(self) -> RangeInclusive<u32> {
        match self {
            Terrain::Coastal => 650..=950,
            Terrain::Delta => 380..=480,
            Terrain::Hilly => 280..=380,
            Terrain::Plains => 420..=680,
        }
    }

    pub fn ph_range(self) -> RangeInclusive<f64> {
        match self {
            Terrain::Coastal => 7.7..=8.0,
            _ => 6.9..=7.6,
        }
    }

    pub fn chloride_range(self) -> RangeInclusive<u32> {
        match self {
            Terrain::Coastal => 300..=450,
            _ => 120..=300,
        }
    }

    pub fn water_level_range(self) -> RangeInclusive<f64> {
        match self {
            Terrain::Hilly => 3.0..=6.0,
            Terrain::Delta => 5.0..=8.0,
            Terrain::Coastal | Terrain::Plains => 8.0..=22.0,
        }
    }

    pub fn depth_range(self) -> RangeInclusive<u32> {
        match self {
            Terrain::Hilly => 18..=28,
            Terrain::Delta => 22..=32,
            Terrain::Coastal | Terrain::Plains => 30..=55,
        }
    }

    /// Yield in litres per hour.
    pub fn yield_range(self) -> RangeInclusive<u32> {
        match self {
            Terrain::Hilly => 2800..=3800,
            Terrain::Delta => 2800..=3200,
            Terrain::Coastal | Terrain::Plains => 1100..=2200,
        }
    }
}

/// Aquifer formation underlying a district.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aquifer {
    CoastalAlluvial,
    Alluvial,
    DeltaicAlluvial,
    HardRock,
}

impl Aquifer {
    pub fn label(self) -> &'static str {
        match self {
            Aquifer::CoastalAlluvial => "Coastal Alluvial",
            Aquifer::Alluvial => "Alluvial",
            Aquifer::DeltaicAlluvial => "Deltaic Alluvial",
            Aquifer::HardRock => "Hard Rock",
        }
    }

    pub fn is_alluvial(self) -> bool {
        !matches!(self, Aquifer::HardRock)
    }
}

/// How wells in a district are typically used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UsageProfile {
    /// Textile and mining belts: industrial or agricultural draw.
    IndustrialBelt,
    /// Dry-land farming districts: always agricultural.
    Farming,
    #[default]
    Mixed,
}

/// Static description of one district.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct District {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    /// Region-group label, e.g. "Cauvery Delta".
    pub region: &'static str,
    pub aquifer: Aquifer,
    pub terrain: Terrain,
    pub high_fluoride: bool,
    pub urban: bool,
    pub usage: UsageProfile,
}

impl District {
    pub const fn new(
        name: &'static str,
        lat: f64,
        lon: f64,
        region: &'static str,
        aquifer: Aquifer,
        terrain: Terrain,
    ) -> Self {
        Self {
            name,
            lat,
            lon,
            region,
            aquifer,
            terrain,
            high_fluoride: false,
            urban: false,
            usage: UsageProfile::Mixed,
        }
    }

    pub const fn high_fluoride(self) -> Self {
        Self {
            high_fluoride: true,
            ..self
        }
    }

    pub const fn urban(self) -> Self {
        Self {
            urban: true,
            ..self
        }
    }

    pub const fn usage(self, usage: UsageProfile) -> Self {
        Self { usage, ..self }
    }

    pub fn is_coastal(&self) -> bool {
        self.terrain.is_coastal()
    }

    pub fn fluoride_range(&self) -> RangeInclusive<f64> {
        if self.high_fluoride {
            0.8..=1.5
        } else {
            0.4..=1.0
        }
    }

    /// Three-letter uppercase code used in well ids.
    ///
    /// Codes are not unique across the catalog: the six "Tiru" districts share
    /// `TIR`, Chennai/Chengalpattu share `CHE` and Kancheepuram/Kanyakumari
    /// share `KAN`. Well ids are only unique together with the district name.
    pub fn code(&self) -> String {
        self.name
            .chars()
            .take(3)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// A state and the districts generated for it.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub state: &'static str,
    pub state_code: &'static str,
    pub districts: &'static [District],
}

impl Catalog {
    pub fn district(&self, name: &str) -> Option<&District> {
        self.districts.iter().find(|district| district.name == name)
    }

    pub fn require(&self, name: &str) -> Result<&District> {
        self.district(name)
            .ok_or_else(|| Error::UnknownDistrict(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.districts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }
}

pub const TAMIL_NADU: Catalog = Catalog {
    state: "Tamil Nadu",
    state_code: "TN",
    districts: TAMIL_NADU_DISTRICTS,
};

#[rustfmt::skip]
const TAMIL_NADU_DISTRICTS: &[District] = &[
    District::new("Chennai", 13.0827, 80.2707, "Chennai Metropolitan", Aquifer::CoastalAlluvial, Terrain::Coastal).urban(),
    District::new("Coimbatore", 11.0168, 76.9558, "Kongu Region", Aquifer::HardRock, Terrain::Plains).urban(),
    District::new("Madurai", 9.9252, 78.1198, "Southern Tamil Nadu", Aquifer::HardRock, Terrain::Plains).high_fluoride().urban(),
    District::new("Tiruchirappalli", 10.7905, 78.7047, "Central Tamil Nadu", Aquifer::HardRock, Terrain::Plains),
    District::new("Salem", 11.6643, 78.1460, "Salem Plateau", Aquifer::HardRock, Terrain::Plains).urban().usage(UsageProfile::IndustrialBelt),
    District::new("Tiruppur", 11.1085, 77.3411, "Kongu Region", Aquifer::HardRock, Terrain::Plains).usage(UsageProfile::IndustrialBelt),
    District::new("Erode", 11.3410, 77.7172, "Kongu Region", Aquifer::Alluvial, Terrain::Plains).usage(UsageProfile::IndustrialBelt),
    District::new("Thanjavur", 10.7865, 79.1378, "Cauvery Delta", Aquifer::DeltaicAlluvial, Terrain::Delta),
    District::new("Thiruvarur", 10.7725, 79.6370, "Cauvery Delta", Aquifer::DeltaicAlluvial, Terrain::Delta),
    District::new("Nagapattinam", 10.7672, 79.8449, "Coastal Tamil Nadu", Aquifer::CoastalAlluvial, Terrain::Coastal),
    District::new("Cuddalore", 11.7480, 79.7714, "Coastal Tamil Nadu", Aquifer::CoastalAlluvial, Terrain::Coastal),
    District::new("Karur", 10.9601, 78.0766, "Kongu Region", Aquifer::HardRock, Terrain::Plains),
    District::new("Dindigul", 10.3650, 77.9800, "Southern Tamil Nadu", Aquifer::HardRock, Terrain::Plains).high_fluoride(),
    District::new("Theni", 10.0104, 77.4768, "Western Ghats", Aquifer::HardRock, Terrain::Hilly).high_fluoride(),
    District::new("Vellore", 12.9165, 79.1325, "Northern Tamil Nadu", Aquifer::HardRock, Terrain::Plains),
    District::new("Kancheepuram", 12.8342, 79.7036, "Northern Tamil Nadu", Aquifer::HardRock, Terrain::Plains),
    District::new("Tiruvallur", 13.1442, 79.9084, "Northern Tamil Nadu", Aquifer::HardRock, Terrain::Plains),
    District::new("Chengalpattu", 12.6819, 80.0169, "Northern Tamil Nadu", Aquifer::CoastalAlluvial, Terrain::Coastal),
    District::new("Ranipet", 12.9279, 79.3316, "Northern Tamil Nadu", Aquifer::HardRock, Terrain::Plains),
    District::new("Tirupattur", 12.4970, 78.5629, "Northern Tamil Nadu", Aquifer::HardRock, Terrain::Plains),
    District::new("Kallakurichi", 11.7404, 78.9592, "Northern Tamil Nadu", Aquifer::HardRock, Terrain::Plains),
    District::new("Villupuram", 11.9394, 79.4924, "Northern Tamil Nadu", Aquifer::HardRock, Terrain::Plains),
    District::new("Dharmapuri", 12.1210, 78.1582, "Northern Tamil Nadu", Aquifer::HardRock, Terrain::Plains).usage(UsageProfile::Farming),
    District::new("Krishnagiri", 12.5196, 78.2138, "Northern Tamil Nadu", Aquifer::HardRock, Terrain::Plains).usage(UsageProfile::Farming),
    District::new("Namakkal", 11.2213, 78.1674, "Salem Plateau", Aquifer::HardRock, Terrain::Plains),
    District::new("Tenkasi", 8.9606, 77.3152, "Western Ghats", Aquifer::HardRock, Terrain::Hilly),
    District::new("Tirunelveli", 8.7139, 77.7567, "Southern Tamil Nadu", Aquifer::HardRock, Terrain::Plains),
    District::new("Thoothukudi", 8.7642, 78.1348, "Coastal Tamil Nadu", Aquifer::CoastalAlluvial, Terrain::Coastal),
    District::new("Kanyakumari", 8.0883, 77.5385, "Coastal Tamil Nadu", Aquifer::CoastalAlluvial, Terrain::Coastal),
    District::new("Ramanathapuram", 9.3151, 78.8307, "Coastal Tamil Nadu", Aquifer::CoastalAlluvial, Terrain::Coastal),
    District::new("Sivaganga", 9.8432, 78.4808, "Southern Tamil Nadu", Aquifer::HardRock, Terrain::Plains),
    District::new("Virudhunagar", 9.5852, 77.9608, "Southern Tamil Nadu", Aquifer::HardRock, Terrain::Plains),
    District::new("Ariyalur", 11.1375, 79.0758, "Central Tamil Nadu", Aquifer::HardRock, Terrain::Plains).usage(UsageProfile::IndustrialBelt),
    District::new("Perambalur", 11.2340, 78.8832, "Central Tamil Nadu", Aquifer::HardRock, Terrain::Plains),
    District::new("Pudukkottai", 10.3803, 78.8204, "Central Tamil Nadu", Aquifer::HardRock, Terrain::Plains),
    District::new("Tiruvannamalai", 12.2319, 79.0676, "Northern Tamil Nadu", Aquifer::HardRock, Terrain::Plains),
    District::new("Mayiladuthurai", 11.1035, 79.6550, "Cauvery Delta", Aquifer::DeltaicAlluvial, Terrain::Delta),
    District::new("Nilgiris", 11.4102, 76.6950, "Western Ghats", Aquifer::HardRock, Terrain::Hilly),
];
