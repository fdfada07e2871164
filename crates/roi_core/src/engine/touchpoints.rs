//! Touchpoint table generator.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use rustc_hash::FxHashMap;
use tracing::debug;
use uuid::Uuid;

use crate::benchmarks::touchpoints as bench;
use crate::config::{GeneratorConfig, WEIGHT_TOLERANCE};
use crate::error::ConfigError;
use crate::models::{ConversionRow, Platform, PostRow, TouchpointRow, TouchpointType};
use crate::sampling::{draws, numeric, Categorical};

use super::{draw_date, entity_id};

/// The slice of a conversion a contributing touchpoint hangs off.
#[derive(Debug, Clone, Copy)]
struct AttributedConversion {
    conversion_id: Uuid,
    customer_id: Uuid,
    post_id: Uuid,
    conversion_date: NaiveDate,
    journey_length: i64,
}

/// Generates the touchpoints table.
///
/// A contributing touchpoint borrows a post-attributed conversion's
/// customer and post and lands inside its journey, carrying a positive
/// attribution weight. The rest are ambient activity: a fresh customer,
/// usually a post link, never a weight. `contributed_to_conversion`,
/// `conversion_id`, and a positive weight always travel together.
pub struct TouchpointGenerator<'a> {
    config: &'a GeneratorConfig,
    type_table: Categorical<TouchpointType>,
}

impl<'a> TouchpointGenerator<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Result<Self, ConfigError> {
        let type_table = Categorical::new(
            "touchpoint_type_shares",
            config.touchpoint_type_shares.clone(),
            WEIGHT_TOLERANCE,
        )?;
        Ok(TouchpointGenerator { config, type_table })
    }

    pub fn generate(
        &self,
        rng: &mut impl Rng,
        posts: &[PostRow],
        conversions: &[ConversionRow],
    ) -> Vec<TouchpointRow> {
        let attributed: Vec<AttributedConversion> = conversions
            .iter()
            .filter_map(|conv| {
                conv.post_id.map(|post_id| AttributedConversion {
                    conversion_id: conv.conversion_id,
                    customer_id: conv.customer_id,
                    post_id,
                    conversion_date: conv.conversion_date,
                    journey_length: conv.customer_journey_length,
                })
            })
            .collect();
        let post_platforms: FxHashMap<Uuid, Platform> =
            posts.iter().map(|p| (p.post_id, p.platform)).collect();

        let mut rows = Vec::with_capacity(self.config.n_touchpoints);
        for i in 0..self.config.n_touchpoints {
            rows.push(self.row(rng, posts, &attributed, &post_platforms));
            if (i + 1) % 25_000 == 0 {
                debug!("generated {} touchpoints", i + 1);
            }
        }
        rows
    }

    fn row(
        &self,
        rng: &mut impl Rng,
        posts: &[PostRow],
        attributed: &[AttributedConversion],
        post_platforms: &FxHashMap<Uuid, Platform>,
    ) -> TouchpointRow {
        let contributed = rng.gen::<f64>() < bench::ATTRIBUTED_SHARE && !attributed.is_empty();

        let (customer_id, post_id, conversion_id, touchpoint_date) = if contributed {
            let conv = *draws::choose(rng, attributed);
            let days_before = rng.gen_range(0..conv.journey_length.max(1));
            let touchpoint_date = conv.conversion_date - Duration::days(days_before);
            (
                conv.customer_id,
                Some(conv.post_id),
                Some(conv.conversion_id),
                touchpoint_date,
            )
        } else {
            let customer_id = entity_id(rng);
            let post_id = if rng.gen::<f64>() < bench::POST_LINK_SHARE && !posts.is_empty() {
                Some(draws::choose(rng, posts).post_id)
            } else {
                None
            };
            (customer_id, post_id, None, draw_date(rng, &self.config.window))
        };

        // Post-linked rows inherit the post's platform; the rest can land
        // anywhere, including the brand website.
        let platform = match post_id.and_then(|id| post_platforms.get(&id)) {
            Some(&platform) => platform,
            None => *draws::choose(rng, &Platform::ALL),
        };

        let attribution_weight = if contributed {
            numeric::round3(rng.gen_range(bench::WEIGHT_RANGE.0..bench::WEIGHT_RANGE.1))
        } else {
            0.0
        };

        TouchpointRow {
            touchpoint_id: entity_id(rng),
            customer_id,
            post_id,
            touchpoint_type: *self.type_table.sample(rng),
            touchpoint_date,
            platform,
            contributed_to_conversion: contributed,
            conversion_id,
            attribution_weight,
        }
    }
}
