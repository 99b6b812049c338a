use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use wellgen_core::WellRecord;

use super::{CountingWriter, ensure_parent};
use crate::errors::GenerationError;

/// Write records as a pretty-printed JSON array (2-space indent, UTF-8,
/// non-ASCII left unescaped). Returns the number of bytes written.
pub fn write_records_json(path: &Path, records: &[WellRecord]) -> Result<u64, GenerationError> {
    ensure_parent(path)?;
    let mut writer = CountingWriter::new(BufWriter::new(File::create(path)?));
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    Ok(writer.bytes_written())
}

pub fn read_records_json(path: &Path) -> Result<Vec<WellRecord>, GenerationError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
