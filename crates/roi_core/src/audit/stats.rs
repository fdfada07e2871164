//! Descriptive statistics used by the dataset auditor.
//!
//! All helpers are total: degenerate inputs (empty slices, zero variance)
//! return 0.0 instead of NaN so audit checks can compare without guards.

/// Arithmetic mean. Empty input yields 0.0.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation. Fewer than two values yields 0.0.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// Pearson correlation coefficient between two equal-length columns.
///
/// Returns 0.0 when either column is constant, shorter than two rows, or
/// the lengths differ. A zero here fails every directional expectation,
/// which is the conservative outcome for a degenerate column.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() != ys.len() || xs.len() < 2 {
        return 0.0;
    }
    let mx = mean(xs);
    let my = mean(ys);
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys.iter()) {
        let dx = x - mx;
        let dy = y - my;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    let denom = (var_x * var_y).sqrt();
    if denom < f64::EPSILON {
        return 0.0;
    }
    cov / denom
}

/// Share of values whose z-score magnitude exceeds `sigma`.
///
/// A constant column has no outliers by definition.
pub fn outlier_share(values: &[f64], sigma: f64) -> f64 {
    let sd = std_dev(values);
    if values.is_empty() || sd < f64::EPSILON {
        return 0.0;
    }
    let m = mean(values);
    let outliers = values.iter().filter(|v| ((*v - m) / sd).abs() > sigma).count();
    outliers as f64 / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_std_dev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((mean(&values) - 5.0).abs() < 1e-12);
        assert!((std_dev(&values) - 2.0).abs() < 1e-12);

        assert_eq!(mean(&[]), 0.0);
        assert_eq!(std_dev(&[3.0]), 0.0);
    }

    #[test]
    fn test_pearson_known_values() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [2.0, 4.0, 6.0, 8.0, 10.0];
        assert!((pearson(&xs, &ys) - 1.0).abs() < 1e-12);

        let inverted: Vec<f64> = ys.iter().map(|y| -y).collect();
        assert!((pearson(&xs, &inverted) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_degenerate_inputs() {
        let xs = [1.0, 2.0, 3.0];
        assert_eq!(pearson(&xs, &[5.0, 5.0, 5.0]), 0.0);
        assert_eq!(pearson(&xs, &[1.0, 2.0]), 0.0);
        assert_eq!(pearson(&[], &[]), 0.0);
    }

    #[test]
    fn test_pearson_uncorrelated_near_zero() {
        // Symmetric pattern with zero covariance by construction.
        let xs = [-2.0, -1.0, 0.0, 1.0, 2.0];
        let ys = [4.0, 1.0, 0.0, 1.0, 4.0];
        assert!(pearson(&xs, &ys).abs() < 1e-12);
    }

    #[test]
    fn test_outlier_share() {
        // 99 values near zero and one far spike.
        let mut values = vec![0.0; 99];
        for (i, v) in values.iter_mut().enumerate() {
            *v = (i % 10) as f64 / 10.0;
        }
        values.push(1000.0);
        let share = outlier_share(&values, 3.0);
        assert!((share - 0.01).abs() < 1e-9);

        assert_eq!(outlier_share(&[1.0, 1.0, 1.0], 3.0), 0.0);
        assert_eq!(outlier_share(&[], 3.0), 0.0);
    }
}
