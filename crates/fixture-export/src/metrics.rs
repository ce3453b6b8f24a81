//! Metrics reported by each export call.

use std::time::Duration;

/// Metrics from a single export operation.
#[derive(Debug, Clone, Default)]
pub struct ExportMetrics {
    /// Number of records written.
    pub records_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl ExportMetrics {
    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_per_second() {
        let metrics = ExportMetrics {
            records_written: 1000,
            total_duration: Duration::from_secs(10),
            file_size_bytes: 100_000,
        };
        assert_eq!(metrics.records_per_second(), 100.0);
    }

    #[test]
    fn test_zero_duration() {
        let metrics = ExportMetrics::default();
        assert_eq!(metrics.records_per_second(), 0.0);
    }
}
