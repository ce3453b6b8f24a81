//! Timestamp sampling.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Sample a timestamp uniformly from the `days`-long window ending at
/// `anchor`, with millisecond granularity.
///
/// A window of zero or negative days returns the anchor itself.
pub fn within_past_days<R: Rng>(rng: &mut R, anchor: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    let window_ms = days * 24 * 60 * 60 * 1000;
    if window_ms <= 0 {
        return anchor;
    }

    let back_ms = rng.gen_range(0..window_ms);
    anchor - Duration::milliseconds(back_ms)
}
