//! # roi_core - Deterministic Influencer Marketing Dataset Engine
//!
//! This library generates synthetic influencer marketing datasets: five
//! relationally linked tables (brands, influencers, posts, conversions,
//! touchpoints) drawn from published industry benchmarks, plus a scoring
//! engine and a statistical auditor over the result.
//!
//! ## Features
//! - 100% deterministic generation (same seed = same tables)
//! - Tier-driven samplers that preserve real-world correlations
//! - Composite influencer scoring with population-relative scaling
//! - Multi-touch attribution weighting
//! - Statistical audit with a PASS/REVIEW verdict
//!
//! All of it is pure computation; persistence lives in the builder crate.

pub mod attribution;
pub mod audit;
pub mod benchmarks;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod sampling;
pub mod scoring;

// Re-export the generation pipeline
pub use config::{DateWindow, GeneratorConfig};
pub use engine::DatasetGenerator;
pub use error::{ConfigError, Result};

// Re-export table rows and vocabularies
pub use models::{
    AttributionModel, BrandRow, BrandTier, ContentType, ConversionRow, Dataset, InfluencerRow,
    InfluencerTier, PerformanceSegment, Platform, PostRow, ScoreRow, TouchpointRow,
    TouchpointType, VisualStyle,
};

// Re-export the analysis layers
pub use audit::{AuditReport, DatasetAuditor, Verdict};
pub use scoring::ScoringEngine;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha256};

    fn small_config(seed: u64) -> GeneratorConfig {
        GeneratorConfig {
            seed,
            n_brands: 20,
            n_influencers: 250,
            n_posts: 2000,
            n_conversions: 1200,
            n_touchpoints: 4000,
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_basic_generation() {
        let dataset = DatasetGenerator::new(small_config(42)).unwrap().generate().unwrap();

        assert_eq!(dataset.brands.len(), 20);
        assert_eq!(dataset.influencers.len(), 250);
        assert_eq!(dataset.posts.len(), 2000);
        assert_eq!(dataset.conversions.len(), 1200);
        assert_eq!(dataset.touchpoints.len(), 4000);
        assert_eq!(dataset.total_rows(), 7470);
    }

    #[test]
    fn test_determinism() {
        let first = DatasetGenerator::new(small_config(999)).unwrap().generate().unwrap();
        let second = DatasetGenerator::new(small_config(999)).unwrap().generate().unwrap();
        assert_eq!(first, second, "Same seed should produce same dataset");

        let other = DatasetGenerator::new(small_config(1000)).unwrap().generate().unwrap();
        assert_ne!(first, other, "Different seed should produce different dataset");
    }

    #[test]
    fn test_dataset_json_determinism_sha256() {
        fn sha256_hex(bytes: &[u8]) -> String {
            let mut hasher = Sha256::new();
            hasher.update(bytes);
            let digest = hasher.finalize();
            let mut out = String::with_capacity(digest.len() * 2);
            for b in digest {
                out.push_str(&format!("{:02x}", b));
            }
            out
        }

        let first = DatasetGenerator::new(small_config(123_456)).unwrap().generate().unwrap();
        let second = DatasetGenerator::new(small_config(123_456)).unwrap().generate().unwrap();

        let json1 = serde_json::to_vec(&first).unwrap();
        let json2 = serde_json::to_vec(&second).unwrap();

        assert_eq!(
            sha256_hex(&json1),
            sha256_hex(&json2),
            "Same seed should produce identical JSON sha256"
        );
    }

    #[test]
    fn test_generation_realistic_output() {
        let mut total_sponsored = 0usize;
        let mut total_posts = 0usize;
        let mut total_attributed = 0usize;
        let mut total_conversions = 0usize;
        let mut total_order_value = 0.0f64;
        let mut pass_count = 0usize;
        let num_runs = 10u64;

        for seed in 0..num_runs {
            let config = small_config(seed * 1000);
            let dataset = DatasetGenerator::new(config.clone()).unwrap().generate().unwrap();

            let sponsored = dataset.posts.iter().filter(|p| p.is_sponsored).count();
            let attributed = dataset.conversions.iter().filter(|c| c.post_id.is_some()).count();
            let order_value: f64 = dataset.conversions.iter().map(|c| c.order_value).sum();

            let report = DatasetAuditor::new().audit(&config, &dataset);
            if report.verdict().is_pass() {
                pass_count += 1;
            }

            let scores = ScoringEngine::new().score_dataset(&dataset);
            assert_eq!(scores.len(), dataset.influencers.len());
            for row in &scores {
                assert!(
                    (0.0..=100.0).contains(&row.influencer_score),
                    "Composite should stay on the 0-100 scale: {}",
                    row.influencer_score
                );
            }

            println!(
                "Seed {}: sponsored {:.1}%, attributed {:.1}%, verdict {}",
                seed * 1000,
                100.0 * sponsored as f64 / dataset.posts.len() as f64,
                100.0 * attributed as f64 / dataset.conversions.len() as f64,
                report.verdict()
            );

            total_sponsored += sponsored;
            total_posts += dataset.posts.len();
            total_attributed += attributed;
            total_conversions += dataset.conversions.len();
            total_order_value += order_value;
        }

        let sponsored_share = total_sponsored as f64 / total_posts as f64;
        let attributed_share = total_attributed as f64 / total_conversions as f64;
        let avg_order_value = total_order_value / total_conversions as f64;

        println!("\n=== Summary ({} runs) ===", num_runs);
        println!("Sponsored post share: {:.1}%", sponsored_share * 100.0);
        println!("Attributed conversion share: {:.1}%", attributed_share * 100.0);
        println!("Avg order value: ${:.2}", avg_order_value);
        println!("Audit passes: {}/{}", pass_count, num_runs);

        // Small accounts sponsor 10% of posts, large accounts 25%.
        assert!(
            (0.08..=0.20).contains(&sponsored_share),
            "Sponsored share should be realistic: {}",
            sponsored_share
        );
        assert!(
            (0.55..=0.75).contains(&attributed_share),
            "Attributed share should track the configured split: {}",
            attributed_share
        );
        assert!(
            (50.0..=500.0).contains(&avg_order_value),
            "Average order value should be realistic: {}",
            avg_order_value
        );
        assert_eq!(pass_count as u64, num_runs, "Every seed should pass the audit gates");
    }
}
