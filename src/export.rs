use anyhow::Result;
use fs_err::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::records::Record;

/// Writes a filtered record view as pretty-printed JSON.
pub fn write_records(records: &[Record], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}
