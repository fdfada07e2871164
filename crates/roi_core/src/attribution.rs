//! Multi-touch attribution weighting.
//!
//! Position weights over an ordered journey, oldest touchpoint first.
//! Every model returns weights summing to 1 for any non-empty journey;
//! an empty journey gets an empty vector.

use crate::models::AttributionModel;

/// Position weights for a journey of `n` touchpoints, oldest first.
pub fn weights(model: AttributionModel, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![1.0];
    }
    match model {
        AttributionModel::FirstTouch => {
            let mut w = vec![0.0; n];
            w[0] = 1.0;
            w
        }
        AttributionModel::LastTouch => {
            let mut w = vec![0.0; n];
            w[n - 1] = 1.0;
            w
        }
        AttributionModel::Linear => vec![1.0 / n as f64; n],
        AttributionModel::TimeDecay => {
            // Each step toward the purchase doubles the weight. Powers are
            // anchored at the newest touchpoint, then normalized.
            let raw: Vec<f64> = (0..n)
                .map(|i| 2f64.powi(i as i32 - (n as i32 - 1)))
                .collect();
            let total: f64 = raw.iter().sum();
            raw.into_iter().map(|w| w / total).collect()
        }
        AttributionModel::PositionBased => {
            // 40% to the first touch, 40% to the last, 20% spread evenly
            // over the middle.
            if n == 2 {
                vec![0.5, 0.5]
            } else {
                let middle = 0.2 / (n - 2) as f64;
                let mut w = vec![middle; n];
                w[0] = 0.4;
                w[n - 1] = 0.4;
                w
            }
        }
    }
}

/// Position weights for a feed label. Unrecognized labels use linear.
pub fn weights_for_label(label: &str, n: usize) -> Vec<f64> {
    weights(AttributionModel::from_label(label), n)
}
