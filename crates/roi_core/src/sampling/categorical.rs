//! Weighted categorical sampling with a precomputed CDF.
//!
//! Tables keep their declaration order, so the same seed walks the same
//! items no matter how the weights were supplied. One draw consumes exactly
//! one `f64` from the RNG stream.

use rand::Rng;

use crate::error::ConfigError;

/// Ordered weighted lookup table.
#[derive(Debug, Clone)]
pub struct Categorical<T> {
    items: Vec<T>,
    cdf: Vec<f64>,
}

impl<T: Clone> Categorical<T> {
    /// Builds a table from (item, weight) pairs.
    ///
    /// Weights must be finite, non-negative, and sum to 1 within
    /// `tolerance`. The final CDF entry is pinned to exactly 1.0 so a draw
    /// can never run off the end.
    pub fn new(name: &str, entries: Vec<(T, f64)>, tolerance: f64) -> Result<Self, ConfigError> {
        let sum = Self::checked_sum(name, &entries)?;
        if (sum - 1.0).abs() > tolerance {
            return Err(ConfigError::WeightSum {
                name: name.to_string(),
                sum,
            });
        }
        Ok(Self::from_weights(entries, sum))
    }

    /// Builds a table from pairs whose weights are relative, not shares.
    /// Any positive total is accepted and scaled down to 1.
    pub fn normalized(name: &str, entries: Vec<(T, f64)>) -> Result<Self, ConfigError> {
        let sum = Self::checked_sum(name, &entries)?;
        if sum <= 0.0 {
            return Err(ConfigError::WeightSum {
                name: name.to_string(),
                sum,
            });
        }
        Ok(Self::from_weights(entries, sum))
    }

    fn checked_sum(name: &str, entries: &[(T, f64)]) -> Result<f64, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyDistribution {
                name: name.to_string(),
            });
        }
        for (index, (_, weight)) in entries.iter().enumerate() {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    name: name.to_string(),
                    index,
                });
            }
        }
        Ok(entries.iter().map(|(_, w)| w).sum())
    }

    fn from_weights(entries: Vec<(T, f64)>, sum: f64) -> Self {
        let mut items = Vec::with_capacity(entries.len());
        let mut cdf = Vec::with_capacity(entries.len());
        let mut acc = 0.0;
        for (item, weight) in entries {
            acc += weight / sum;
            items.push(item);
            cdf.push(acc);
        }
        if let Some(last) = cdf.last_mut() {
            *last = 1.0;
        }
        Categorical { items, cdf }
    }

    /// Draws one item by inverse CDF lookup.
    pub fn sample(&self, rng: &mut impl Rng) -> &T {
        let x: f64 = rng.gen();
        let idx = self.cdf.partition_point(|&edge| edge <= x);
        &self.items[idx]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rejects_empty_and_bad_weights() {
        let empty: Vec<(&str, f64)> = Vec::new();
        assert!(matches!(
            Categorical::new("t", empty, 1e-3),
            Err(ConfigError::EmptyDistribution { .. })
        ));

        let negative = vec![("a", 1.2), ("b", -0.2)];
        assert!(matches!(
            Categorical::new("t", negative, 1e-3),
            Err(ConfigError::InvalidWeight { index: 1, .. })
        ));

        let nan = vec![("a", f64::NAN)];
        assert!(matches!(
            Categorical::new("t", nan, 1e-3),
            Err(ConfigError::InvalidWeight { index: 0, .. })
        ));

        let short = vec![("a", 0.5), ("b", 0.4)];
        assert!(matches!(
            Categorical::new("t", short, 1e-3),
            Err(ConfigError::WeightSum { .. })
        ));
    }

    #[test]
    fn test_normalized_accepts_overshooting_table() {
        // Mirrors the published posting-hour table that sums to 1.19.
        let table =
            Categorical::normalized("hours", vec![("a", 0.60), ("b", 0.59)]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut a = 0usize;
        for _ in 0..20_000 {
            if *table.sample(&mut rng) == "a" {
                a += 1;
            }
        }
        let share = a as f64 / 20_000.0;
        assert!((share - 0.60 / 1.19).abs() < 0.02, "share {share}");
    }

    #[test]
    fn test_samples_match_configured_shares() {
        let table = Categorical::new(
            "tiers",
            vec![("nano", 0.40), ("micro", 0.35), ("mid", 0.15), ("macro", 0.07), ("mega", 0.03)],
            1e-3,
        )
        .unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut counts = [0usize; 5];
        let n = 50_000;
        for _ in 0..n {
            let drawn = *table.sample(&mut rng);
            let idx = table.items().iter().position(|i| *i == drawn).unwrap();
            counts[idx] += 1;
        }
        let expected = [0.40, 0.35, 0.15, 0.07, 0.03];
        for (count, want) in counts.iter().zip(expected) {
            let got = *count as f64 / n as f64;
            assert!((got - want).abs() < 0.01, "got {got}, want {want}");
        }
    }

    #[test]
    fn test_zero_weight_items_are_never_drawn() {
        let table = Categorical::new(
            "sparse",
            vec![("never", 0.0), ("always", 1.0)],
            1e-3,
        )
        .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..1_000 {
            assert_eq!(*table.sample(&mut rng), "always");
        }
    }

    #[test]
    fn test_same_seed_same_draws() {
        let table = Categorical::new(
            "colors",
            vec![("red", 0.3), ("green", 0.3), ("blue", 0.4)],
            1e-3,
        )
        .unwrap();

        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..200 {
            assert_eq!(table.sample(&mut a), table.sample(&mut b));
        }
    }
}
