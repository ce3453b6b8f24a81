//! Pretty-printed JSON array export.

use crate::{ExportError, ExportMetrics, DEFAULT_BUFFER_SIZE};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Write `records` as a pretty-printed JSON array to `output_path`,
/// overwriting any existing file.
///
/// Consumers needing a columnar format (e.g. Parquet) convert the output
/// themselves; conversion is out of scope here.
pub fn export<T, P>(records: &[T], output_path: P) -> Result<ExportMetrics, ExportError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let start_time = Instant::now();
    let output_path = output_path.as_ref();

    let file = File::create(output_path)?;
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    drop(writer);

    let metrics = ExportMetrics {
        records_written: records.len() as u64,
        total_duration: start_time.elapsed(),
        file_size_bytes: std::fs::metadata(output_path)?.len(),
    };

    info!(
        "JSON export complete: {} records, {} bytes to '{}' in {:?}",
        metrics.records_written,
        metrics.file_size_bytes,
        output_path.display(),
        metrics.total_duration
    );

    Ok(metrics)
}
