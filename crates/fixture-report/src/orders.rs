//! Loading orders back from a JSONL fixture.

use crate::error::ReportError;
use fixture_core::Order;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a JSONL orders file, one order per line. Blank lines are skipped;
/// an unparseable line fails the whole load with its line number.
pub fn load_orders<P: AsRef<Path>>(path: P) -> Result<Vec<Order>, ReportError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut orders = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let order: Order = serde_json::from_str(&line).map_err(|source| ReportError::Parse {
            line: index + 1,
            source,
        })?;
        orders.push(order);
    }

    Ok(orders)
}
