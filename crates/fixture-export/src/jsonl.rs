//! Newline-delimited JSON export.

use crate::{ExportError, ExportMetrics, DEFAULT_BUFFER_SIZE};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Write `records` as JSONL to `output_path`, one object per line,
/// overwriting any existing file.
pub fn export<T, P>(records: &[T], output_path: P) -> Result<ExportMetrics, ExportError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let start_time = Instant::now();
    let output_path = output_path.as_ref();

    let file = File::create(output_path)?;
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writeln!(writer)?;
    }

    writer.flush()?;
    drop(writer);

    let metrics = ExportMetrics {
        records_written: records.len() as u64,
        total_duration: start_time.elapsed(),
        file_size_bytes: std::fs::metadata(output_path)?.len(),
    };

    info!(
        "JSONL export complete: {} records, {} bytes to '{}' in {:?}",
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
        id: u32,
        name: &'static str,
    }

    #[test]
    fn test_export_jsonl() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("rows.jsonl");

        let rows = vec![Row { id: 1, name: "a" }, Row { id: 2, name: "b" }];
        let metrics = export(&rows, &output_path).unwrap();

        assert_eq!(metrics.records_written, 2);
        assert!(metrics.file_size_bytes > 0);

        let content = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"id":1,"name":"a"}"#);

        for line in lines {
            let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(parsed.get("id").is_some());
        }
    }

    #[test]
    fn test_export_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("rows.jsonl");

        export(&[Row { id: 1, name: "a" }, Row { id: 2, name: "b" }], &output_path).unwrap();
        export(&[Row { id: 3, name: "c" }], &output_path).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_export_empty_slice() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("rows.jsonl");

        let metrics = export::<Row, _>(&[], &output_path).unwrap();
        assert_eq!(metrics.records_written, 0);
        assert_eq!(metrics.file_size_bytes, 0);
    }

    #[test]
    fn test_export_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("missing").join("rows.jsonl");

        let result = export(&[Row { id: 1, name: "a" }], &output_path);
        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
