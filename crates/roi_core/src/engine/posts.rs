//! Post table generator.

use chrono::Datelike;
use rand::Rng;
use rand_distr::{Distribution, Poisson};
use tracing::debug;

use crate::benchmarks::{content, engagement};
use crate::config::{GeneratorConfig, WEIGHT_TOLERANCE};
use crate::error::ConfigError;
use crate::models::{BrandRow, ContentType, InfluencerRow, Platform, PostRow, VisualStyle};
use crate::sampling::{draws, Categorical};

use super::{draw_date, entity_id};

/// Generates the posts table.
///
/// Every post belongs to a uniformly picked influencer and inherits that
/// account's platform, follower count, and engagement rate. Seasonality
/// scales the engagement rate fed into the interaction draw; reach uses
/// the raw rate.
pub struct PostGenerator<'a> {
    config: &'a GeneratorConfig,
    /// One content-type table per platform, indexed by `Platform::index`.
    content_tables: Vec<Categorical<ContentType>>,
    hour_table: Categorical<u32>,
    day_table: Categorical<u32>,
    style_table: Categorical<VisualStyle>,
    product_count: Poisson<f64>,
}

impl<'a> PostGenerator<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Result<Self, ConfigError> {
        if config.dominant_colors.is_empty() {
            return Err(ConfigError::EmptyDistribution {
                name: "dominant_colors".to_string(),
            });
        }

        let mut content_tables = Vec::with_capacity(Platform::ALL.len());
        for platform in Platform::ALL {
            let name = format!("content_mix.{platform}");
            content_tables.push(Categorical::new(
                &name,
                config.content_mix_for(platform),
                WEIGHT_TOLERANCE,
            )?);
        }

        // The published posting-hour table overshoots 1.0, so it is
        // normalized rather than validated against a strict sum.
        let hour_table = Categorical::normalized("hour_weights", config.hour_weights.clone())?;
        let day_table = Categorical::new(
            "day_weights",
            config
                .day_weights
                .iter()
                .enumerate()
                .map(|(day, &w)| (day as u32, w))
                .collect(),
            WEIGHT_TOLERANCE,
        )?;
        let style_table = Categorical::new(
            "visual_style_shares",
            config.visual_style_shares.clone(),
            WEIGHT_TOLERANCE,
        )?;
        let product_count =
            Poisson::new(content::PRODUCT_COUNT_MEAN).map_err(|_| ConfigError::NonPositive {
                name: "product_count_mean".to_string(),
                value: content::PRODUCT_COUNT_MEAN,
            })?;

        Ok(PostGenerator {
            config,
            content_tables,
            hour_table,
            day_table,
            style_table,
            product_count,
        })
    }

    pub fn generate(
        &self,
        rng: &mut impl Rng,
        influencers: &[InfluencerRow],
        brands: &[BrandRow],
    ) -> Vec<PostRow> {
        // validate() forbids empty upstream tables; without them there is
        // nothing to attach a post to.
        if influencers.is_empty() || brands.is_empty() {
            return Vec::new();
        }

        let mut rows = Vec::with_capacity(self.config.n_posts);
        for i in 0..self.config.n_posts {
            let influencer = draws::choose(rng, influencers);
            rows.push(self.row(rng, influencer, brands));
            if (i + 1) % 10_000 == 0 {
                debug!("generated {} posts", i + 1);
            }
        }
        rows
    }

    fn row(&self, rng: &mut impl Rng, influencer: &InfluencerRow, brands: &[BrandRow]) -> PostRow {
        let platform = influencer.platform;
        let post_date = draw_date(rng, &self.config.window);
        let post_time_hour = *self.hour_table.sample(rng);
        let day_of_week = *self.day_table.sample(rng);
        let content_type = *self.content_tables[platform.index()].sample(rng);

        let sponsored_odds = if influencer.tier.is_large() {
            content::SPONSORED_LARGE
        } else {
            content::SPONSORED_SMALL
        };
        let is_sponsored = rng.gen::<f64>() < sponsored_odds;

        let outlier = draws::outlier_multiplier(rng);
        let seasonal_rate =
            influencer.engagement_rate * self.config.seasonality_for(post_date.month());
        let counts = draws::engagement_counts(
            rng,
            influencer.follower_count,
            seasonal_rate,
            content_type,
            outlier > engagement::VIRAL_THRESHOLD,
        );
        let (reach, impressions) =
            draws::reach_impressions(rng, influencer.follower_count, influencer.engagement_rate);

        let brand_id = if is_sponsored {
            Some(draws::choose(rng, brands).brand_id)
        } else {
            None
        };
        let product_count = if is_sponsored {
            self.product_count.sample(rng) as i64
        } else {
            0
        };

        PostRow {
            post_id: entity_id(rng),
            influencer_id: influencer.influencer_id,
            brand_id,
            platform,
            post_date,
            post_time_hour,
            day_of_week,
            content_type,
            caption_length: draws::caption_length(rng),
            hashtag_count: draws::hashtag_count(rng, platform),
            has_cta: rng.gen::<f64>() < content::HAS_CTA,
            product_count,
            visual_style: *self.style_table.sample(rng),
            dominant_color: draws::choose(rng, &self.config.dominant_colors).clone(),
            is_sponsored,
            discount_code_present: is_sponsored
                && rng.gen::<f64>() < content::DISCOUNT_CODE_PRESENT,
            likes: counts.likes,
            comments: counts.comments,
            shares: counts.shares,
            saves: counts.saves,
            reach,
            impressions,
        }
    }
}
