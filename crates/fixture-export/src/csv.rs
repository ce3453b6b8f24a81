//! CSV export with a header row.

use crate::{ExportError, ExportMetrics, DEFAULT_BUFFER_SIZE};
use csv::Writer;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Write `records` as CSV to `output_path`, overwriting any existing file.
///
/// The header row is derived from the record's serde field names on the
/// first record written; an empty slice yields an empty file.
pub fn export<T, P>(records: &[T], output_path: P) -> Result<ExportMetrics, ExportError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let start_time = Instant::now();
    let output_path = output_path.as_ref();

    let file = File::create(output_path)?;
    let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    let mut writer = Writer::from_writer(buf_writer);

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    drop(writer);

    let metrics = ExportMetrics {
        records_written: records.len() as u64,
        total_duration: start_time.elapsed(),
        file_size_bytes: std::fs::metadata(output_path)?.len(),
    };

    info!(
        "CSV export complete: {} records, {} bytes to '{}' in {:?}",
        metrics.records_written,
        metrics.file_size_bytes,
        output_path.display(),
        metrics.total_duration
    );

    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use tempfile::TempDir;

    #[derive(Serialize)]
    struct Row {
        product_id: &'static str,
        quantity: u32,
    }

    #[test]
    fn test_export_csv_with_header() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("rows.csv");

        let rows = vec![
            Row {
                product_id: "PROD-001",
                quantity: 10,
            },
            Row {
                product_id: "PROD-002",
                quantity: 0,
            },
        ];
        let metrics = export(&rows, &output_path).unwrap();

        assert_eq!(metrics.records_written, 2);

        let content = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3); // 1 header + 2 data rows
        assert_eq!(lines[0], "product_id,quantity");
        assert_eq!(lines[1], "PROD-001,10");
    }

    #[test]
    fn test_export_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("rows.csv");

        export(
            &[Row {
                product_id: "PROD-001",
                quantity: 1,
            }],
            &output_path,
        )
        .unwrap();
        export(
            &[Row {
                product_id: "PROD-009",
                quantity: 9,
            }],
            &output_path,
        )
        .unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("PROD-009"));
        assert!(!content.contains("PROD-001"));
    }
}
