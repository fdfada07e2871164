//! Brand table generator.

use rand::Rng;

use crate::benchmarks::brands as bench;
use crate::config::{BrandTierSpec, GeneratorConfig, WEIGHT_TOLERANCE};
use crate::error::ConfigError;
use crate::models::{BrandRow, Platform};
use crate::sampling::{draws, numeric, Categorical};

use super::entity_id;

/// Generates the brand table.
///
/// The tier table carries the whole `BrandTierSpec`, so one draw hands
/// back the tier together with its budget and order-value bands.
pub struct BrandGenerator<'a> {
    config: &'a GeneratorConfig,
    tier_table: Categorical<BrandTierSpec>,
    platform_table: Categorical<Platform>,
}

impl<'a> BrandGenerator<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Result<Self, ConfigError> {
        let tier_table = Categorical::new(
            "brand_tier_specs",
            config
                .brand_tier_specs
                .iter()
                .map(|&spec| (spec, spec.weight))
                .collect(),
            WEIGHT_TOLERANCE,
        )?;
        let platform_table = Categorical::new(
            "platform_shares",
            config.platform_shares.clone(),
            WEIGHT_TOLERANCE,
        )?;
        Ok(BrandGenerator {
            config,
            tier_table,
            platform_table,
        })
    }

    pub fn generate(&self, rng: &mut impl Rng) -> Vec<BrandRow> {
        let mut rows = Vec::with_capacity(self.config.n_brands);
        for _ in 0..self.config.n_brands {
            rows.push(self.row(rng));
        }
        rows
    }

    fn row(&self, rng: &mut impl Rng) -> BrandRow {
        let spec = *self.tier_table.sample(rng);
        let brand_name = format!(
            "{} {}",
            draws::choose(rng, &bench::NAME_PREFIXES),
            draws::choose(rng, &bench::NAME_SUFFIXES)
        );
        let (lo, hi) = spec.budget_range;
        let monthly_social_budget = numeric::round2(rng.gen_range(lo..hi));
        let (year_lo, year_hi) = bench::FOUNDED_YEARS;

        BrandRow {
            brand_id: entity_id(rng),
            brand_name,
            brand_tier: spec.tier,
            monthly_social_budget,
            primary_platform: *self.platform_table.sample(rng),
            avg_product_price: draws::order_value(rng, spec.aov_range),
            target_demographic: draws::choose(rng, &bench::TARGET_DEMOGRAPHICS).to_string(),
            founded_year: rng.gen_range(year_lo..year_hi),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::models::BrandTier;

    fn generate(seed: u64) -> Vec<BrandRow> {
        let config = GeneratorConfig::default();
        let gen = BrandGenerator::new(&config).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        gen.generate(&mut rng)
    }

    #[test]
    fn test_generates_configured_count_with_unique_ids() {
        let rows = generate(42);
        assert_eq!(rows.len(), 25);
        let mut ids: Vec<_> = rows.iter().map(|b| b.brand_id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 25);
    }

    #[test]
    fn test_budget_and_price_sit_in_tier_bands() {
        let config = GeneratorConfig::default();
        let gen = BrandGenerator::new(&config).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..40 {
            for brand in gen.generate(&mut rng) {
                let spec = config
                    .brand_tier_specs
                    .iter()
                    .find(|s| s.tier == brand.brand_tier)
                    .unwrap();
                let (lo, hi) = spec.budget_range;
                assert!(brand.monthly_social_budget >= lo);
                assert!(brand.monthly_social_budget < hi);

                // Order-value draws may spill past the band by the
                // published clamp factors.
                let (aov_lo, aov_hi) = spec.aov_range;
                assert!(brand.avg_product_price >= aov_lo * 0.5);
                assert!(brand.avg_product_price <= aov_hi * 1.5);
            }
        }
    }

    #[test]
    fn test_names_platforms_and_years_follow_vocabulary() {
        for brand in generate(3) {
            assert!(brand.brand_name.contains(' '), "name {:?}", brand.brand_name);
            assert!(Platform::SOCIAL.contains(&brand.primary_platform));
            assert!((1990..2022).contains(&brand.founded_year));
            assert!(bench::TARGET_DEMOGRAPHICS.contains(&brand.target_demographic.as_str()));
        }
    }

    #[test]
    fn test_same_seed_same_brands() {
        assert_eq!(generate(42), generate(42));
        assert_ne!(generate(42), generate(43));
    }

    #[test]
    fn test_rejects_broken_tier_weights() {
        let mut config = GeneratorConfig::default();
        config.brand_tier_specs[0].weight = 0.5;
        assert!(matches!(
            BrandGenerator::new(&config),
            Err(ConfigError::WeightSum { .. })
        ));
    }

    #[test]
    fn test_all_tiers_appear_at_scale() {
        let config = GeneratorConfig {
            n_brands: 2_000,
            ..GeneratorConfig::default()
        };
        let gen = BrandGenerator::new(&config).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let rows = gen.generate(&mut rng);
        for tier in BrandTier::ALL {
            let share = rows.iter().filter(|b| b.brand_tier == tier).count() as f64
                / rows.len() as f64;
            assert!(share > 0.05, "{tier} share {share}");
        }
    }
}
