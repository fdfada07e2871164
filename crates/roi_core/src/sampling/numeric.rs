//! Numeric sampling primitives.
//!
//! All functions are pure: they consume draws from the caller's RNG and
//! return plain values. Standard distributions are sampled and scaled in
//! place of parameterized constructors, so nothing here can fail.

use rand::Rng;
use rand_distr::{Distribution, Exp1, StandardNormal};

/// Normal draw as mean + std * z.
#[inline]
pub fn normal(rng: &mut impl Rng, mean: f64, std: f64) -> f64 {
    let z: f64 = StandardNormal.sample(rng);
    mean + std * z
}

/// Normal draw clamped to [lo, hi].
#[inline]
pub fn clipped_normal(rng: &mut impl Rng, mean: f64, std: f64, lo: f64, hi: f64) -> f64 {
    normal(rng, mean, std).clamp(lo, hi)
}

/// Uniform in log space over [lo, hi), so the low end of a wide band
/// dominates. Requires 0 < lo < hi.
#[inline]
pub fn log_uniform(rng: &mut impl Rng, lo: f64, hi: f64) -> f64 {
    rng.gen_range(lo.ln()..hi.ln()).exp()
}

/// Log-normal draw parameterized by log-space mean and std.
#[inline]
pub fn log_normal(rng: &mut impl Rng, mu: f64, sigma: f64) -> f64 {
    normal(rng, mu, sigma).exp()
}

/// Exponential draw with the given mean.
#[inline]
pub fn exponential(rng: &mut impl Rng, mean: f64) -> f64 {
    let z: f64 = Exp1.sample(rng);
    mean * z
}

/// Round to one decimal place.
#[inline]
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Round to two decimal places (currency, rates).
#[inline]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Round to three decimal places (attribution weights).
#[inline]
pub fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_normal_matches_requested_moments() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let n = 100_000;
        let samples: Vec<f64> = (0..n).map(|_| normal(&mut rng, 3.5, 1.0)).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        assert!((mean - 3.5).abs() < 0.02, "mean {mean}");
        assert!((var.sqrt() - 1.0).abs() < 0.02, "std {}", var.sqrt());
    }

    #[test]
    fn test_clipped_normal_stays_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..10_000 {
            let x = clipped_normal(&mut rng, 0.92, 0.05, 0.4, 0.99);
            assert!((0.4..=0.99).contains(&x));
        }
    }

    #[test]
    fn test_log_uniform_skews_toward_the_low_end() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let n = 50_000;
        let mut below_geometric_mid = 0usize;
        for _ in 0..n {
            let x = log_uniform(&mut rng, 1_000.0, 10_000.0);
            assert!((1_000.0..10_000.0).contains(&x));
            // Geometric midpoint of the band is where half the mass sits.
            if x < (1_000.0f64 * 10_000.0).sqrt() {
                below_geometric_mid += 1;
            }
        }
        let share = below_geometric_mid as f64 / n as f64;
        assert!((share - 0.5).abs() < 0.01, "share {share}");
    }

    #[test]
    fn test_exponential_mean() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let n = 100_000;
        let mean = (0..n).map(|_| exponential(&mut rng, 7.0)).sum::<f64>() / n as f64;
        assert!((mean - 7.0).abs() < 0.1, "mean {mean}");
    }

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(round1(4.26), 4.3);
        assert_eq!(round2(123.456), 123.46);
        assert_eq!(round3(0.12345), 0.123);
    }
}
