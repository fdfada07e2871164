//! Influencer table generator.

use rand::Rng;

use crate::benchmarks::audience;
use crate::config::{GeneratorConfig, TierSpec, WEIGHT_TOLERANCE};
use crate::error::ConfigError;
use crate::models::{InfluencerRow, Platform};
use crate::sampling::{draws, Categorical};

use super::entity_id;

/// Generates the influencer table.
///
/// Tier drives everything size-related: follower band, engagement band,
/// authenticity band, cost band, verification odds, and later the
/// sponsorship odds on posts. Demographics are drawn independently.
pub struct InfluencerGenerator<'a> {
    config: &'a GeneratorConfig,
    tier_table: Categorical<TierSpec>,
    platform_table: Categorical<Platform>,
    country_table: Categorical<String>,
    gender_table: Categorical<String>,
    age_group_table: Categorical<String>,
}

impl<'a> InfluencerGenerator<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Result<Self, ConfigError> {
        if config.content_categories.is_empty() {
            return Err(ConfigError::EmptyDistribution {
                name: "content_categories".to_string(),
            });
        }
        let tier_table = Categorical::new(
            "tier_specs",
            config
                .tier_specs
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
        let country_table = Categorical::new(
            "country_shares",
            config.country_shares.clone(),
            WEIGHT_TOLERANCE,
        )?;
        let gender_table = Categorical::new(
            "gender_shares",
            config.gender_shares.clone(),
            WEIGHT_TOLERANCE,
        )?;
        let age_group_table = Categorical::new(
            "age_group_shares",
            config.age_group_shares.clone(),
            WEIGHT_TOLERANCE,
        )?;
        Ok(InfluencerGenerator {
            config,
            tier_table,
            platform_table,
            country_table,
            gender_table,
            age_group_table,
        })
    }

    pub fn generate(&self, rng: &mut impl Rng) -> Vec<InfluencerRow> {
        let mut rows = Vec::with_capacity(self.config.n_influencers);
        for i in 0..self.config.n_influencers {
            rows.push(self.row(rng, i));
        }
        rows
    }

    fn row(&self, rng: &mut impl Rng, index: usize) -> InfluencerRow {
        let spec = *self.tier_table.sample(rng);
        let follower_count = draws::follower_count(rng, spec.follower_range);
        let engagement_rate = draws::engagement_rate(rng, spec.engagement);

        // Where the account sits inside its tier band, 0 at the bottom
        // and 1 at the top. Scales the collaboration cost.
        let (lo, hi) = spec.follower_range;
        let position = (follower_count as f64 - lo) / (hi - lo);

        let verified_odds = if spec.tier.is_large() {
            audience::VERIFIED_LARGE
        } else {
            audience::VERIFIED_SMALL
        };
        let (age_lo, age_hi) = audience::ACCOUNT_AGE_MONTHS;

        InfluencerRow {
            influencer_id: entity_id(rng),
            username: format!("creator_{:05}", index + 1),
            platform: *self.platform_table.sample(rng),
            tier: spec.tier,
            follower_count,
            engagement_rate,
            country: self.country_table.sample(rng).clone(),
            content_category: draws::choose(rng, &self.config.content_categories).clone(),
            avg_post_frequency: draws::post_frequency(rng),
            audience_authenticity_score: draws::authenticity_score(rng, spec.authenticity),
            avg_collaboration_cost: draws::collaboration_cost(rng, spec.cost_range, position),
            account_age_months: rng.gen_range(age_lo..age_hi),
            gender: self.gender_table.sample(rng).clone(),
            age_group: self.age_group_table.sample(rng).clone(),
            verified: rng.gen::<f64>() < verified_odds,
            active: rng.gen::<f64>() < audience::ACTIVE,
        }
    }
}
