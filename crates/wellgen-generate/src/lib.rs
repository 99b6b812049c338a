//! Groundwater well dataset generation.
//!
//! Draws 5-8 wells for every catalog district, derives each well's
//! chemistry and hydrology from its district, sorts the collection by
//! (district, id) and writes it as pretty-printed JSON, optionally with a
//! CSV export alongside.

pub mod batch;
pub mod engine;
pub mod errors;
pub mod generator;
pub mod model;
pub mod output;
pub mod sampling;

pub use batch::{Batch, generate_batch};
pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use generator::WellGenerator;
pub use model::{DistrictReport, GenerateOptions, GenerationReport};
