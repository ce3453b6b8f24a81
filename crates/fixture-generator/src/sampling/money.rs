//! Price sampling.

use rand::Rng;

/// Sample a price in `[min_cents, max_cents)`, returned in currency units.
///
/// Sampling in integer cents keeps every price at exactly 2 decimal places
/// without float rounding at the range edges.
pub fn price_in_cents_range<R: Rng>(rng: &mut R, min_cents: u32, max_cents: u32) -> f64 {
    let cents = rng.gen_range(min_cents..max_cents);
    f64::from(cents) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_price_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let price = price_in_cents_range(&mut rng, 1_000, 30_000);
            assert!((10.0..300.0).contains(&price), "price out of range: {price}");
        }
    }

    #[test]
    fn test_price_has_two_decimal_places() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let price = price_in_cents_range(&mut rng, 1_000, 30_000);
            let cents = price * 100.0;
            assert_eq!(cents, cents.round(), "price not in whole cents: {price}");
        }
    }

    #[test]
    fn test_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let price = price_in_cents_range(&mut rng, 999, 1_000);
        assert_eq!(price, 9.99);
    }
}
