//! Domain draws shared by the table generators.
//!
//! Each function composes the numeric primitives with the benchmark
//! constants for one field. For a given input a function consumes a fixed
//! number of RNG draws, which keeps the stream aligned across runs.

use rand::Rng;

use crate::benchmarks::{audience, content, conversions, engagement};
use crate::models::{ContentType, Platform};

use super::numeric;

/// Interaction counts for a single post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngagementCounts {
    pub likes: i64,
    pub comments: i64,
    pub shares: i64,
    pub saves: i64,
}

/// Uniform pick from a slice. The slice must be non-empty.
#[inline]
pub fn choose<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Follower count within a tier band, log-uniform so small accounts
/// dominate even inside the band.
pub fn follower_count(rng: &mut impl Rng, range: (f64, f64)) -> i64 {
    numeric::log_uniform(rng, range.0, range.1) as i64
}

/// Engagement rate percent for a creator: tier draw plus jitter, clamped,
/// stored to two decimals.
pub fn engagement_rate(rng: &mut impl Rng, mean_std: (f64, f64)) -> f64 {
    let base = numeric::normal(rng, mean_std.0, mean_std.1);
    let jitter = rng.gen_range(audience::ENGAGEMENT_JITTER.0..audience::ENGAGEMENT_JITTER.1);
    let (lo, hi) = audience::ENGAGEMENT_CLAMP;
    numeric::round2((base + jitter).clamp(lo, hi))
}

/// Audience authenticity score for a creator.
pub fn authenticity_score(rng: &mut impl Rng, mean_std: (f64, f64)) -> f64 {
    let (lo, hi) = audience::AUTHENTICITY_CLAMP;
    numeric::round2(numeric::clipped_normal(rng, mean_std.0, mean_std.1, lo, hi))
}

/// Posts per week. Deliberately unclamped: the occasional negative value
/// is part of the published draw and surfaces in quality audits.
pub fn post_frequency(rng: &mut impl Rng) -> f64 {
    let (mean, std) = audience::POST_FREQUENCY;
    numeric::round1(numeric::normal(rng, mean, std))
}

/// Cost per sponsored post. `position` is where the creator's follower
/// count sits inside the tier band, 0 at the bottom and 1 at the top.
pub fn collaboration_cost(rng: &mut impl Rng, cost_range: (f64, f64), position: f64) -> f64 {
    let base = cost_range.0 + position * (cost_range.1 - cost_range.0);
    let noise = rng.gen_range(audience::COST_JITTER.0..audience::COST_JITTER.1);
    numeric::round2(base * noise)
}

/// Interaction counts for one post.
///
/// Likes carry most of the volume; comments, shares, and saves are drawn
/// as shares of likes. Carousels are the save-friendly format, so they use
/// the higher save band. A viral post multiplies the spread by 3-10x.
pub fn engagement_counts(
    rng: &mut impl Rng,
    followers: i64,
    engagement_rate: f64,
    content_type: ContentType,
    is_viral: bool,
) -> EngagementCounts {
    let base = (followers as f64 * (engagement_rate / 100.0)) as i64;

    let mut variance = rng.gen_range(engagement::VARIANCE_RANGE.0..engagement::VARIANCE_RANGE.1);
    if is_viral {
        variance *=
            rng.gen_range(engagement::VIRAL_BOOST_RANGE.0..engagement::VIRAL_BOOST_RANGE.1);
    }
    let total = (base as f64 * variance) as i64;

    let likes =
        (total as f64 * rng.gen_range(engagement::LIKES_SHARE.0..engagement::LIKES_SHARE.1)) as i64;
    let comments = (likes as f64
        * rng.gen_range(engagement::COMMENTS_PER_LIKE.0..engagement::COMMENTS_PER_LIKE.1))
        as i64;
    let shares = (likes as f64
        * rng.gen_range(engagement::SHARES_PER_LIKE.0..engagement::SHARES_PER_LIKE.1))
        as i64;

    let save_band = if content_type == ContentType::Carousel {
        engagement::SAVES_PER_LIKE_HIGH
    } else {
        engagement::SAVES_PER_LIKE_LOW
    };
    let saves = (likes as f64 * rng.gen_range(save_band.0..save_band.1)) as i64;

    EngagementCounts {
        likes: likes.max(1),
        comments: comments.max(0),
        shares: shares.max(0),
        saves: saves.max(0),
    }
}

/// Reach and impressions for one post. High raw engagement earns an
/// algorithmic reach bonus.
pub fn reach_impressions(rng: &mut impl Rng, followers: i64, engagement_rate: f64) -> (i64, i64) {
    let mut reach_rate = rng.gen_range(engagement::REACH_SHARE.0..engagement::REACH_SHARE.1);
    if engagement_rate > engagement::REACH_BONUS_HIGH.0 {
        reach_rate *= engagement::REACH_BONUS_HIGH.1;
    } else if engagement_rate > engagement::REACH_BONUS_MID.0 {
        reach_rate *= engagement::REACH_BONUS_MID.1;
    }
    let reach = (followers as f64 * reach_rate) as i64;
    let impressions = (reach as f64
        * rng.gen_range(engagement::IMPRESSIONS_PER_REACH.0..engagement::IMPRESSIONS_PER_REACH.1))
        as i64;
    (reach, impressions)
}

/// Caption length in characters.
pub fn caption_length(rng: &mut impl Rng) -> i64 {
    let (mean, std) = content::CAPTION_CHARS;
    let raw = numeric::normal(rng, mean, std) as i64;
    raw.clamp(content::CAPTION_CLAMP.0, content::CAPTION_CLAMP.1)
}

/// Hashtag count per platform norms. Platforms without a normal band draw
/// uniformly from the fallback range.
pub fn hashtag_count(rng: &mut impl Rng, platform: Platform) -> i64 {
    let band = match platform {
        Platform::Instagram => Some(content::HASHTAGS_INSTAGRAM),
        Platform::TikTok => Some(content::HASHTAGS_TIKTOK),
        Platform::Twitter => Some(content::HASHTAGS_TWITTER),
        _ => None,
    };
    match band {
        Some((mean, std, lo, hi)) => (numeric::normal(rng, mean, std) as i64).clamp(lo, hi),
        None => {
            let (lo, hi) = content::HASHTAGS_FALLBACK;
            rng.gen_range(lo as f64..hi as f64) as i64
        }
    }
}

/// Order value for a brand's price band: log-normal centered on the band,
/// clamped to half the low bound and 1.5x the high bound.
pub fn order_value(rng: &mut impl Rng, aov_range: (f64, f64)) -> f64 {
    let (lo, hi) = aov_range;
    let mu = (lo.ln() + hi.ln()) / 2.0;
    let sigma = (hi.ln() - lo.ln()) / 4.0;
    let value = numeric::log_normal(rng, mu, sigma);
    let (f_lo, f_hi) = conversions::ORDER_VALUE_CLAMP_FACTORS;
    numeric::round2(value.clamp(lo * f_lo, hi * f_hi))
}

/// Days from first touch to purchase. Most journeys are short.
pub fn journey_days(rng: &mut impl Rng) -> i64 {
    let days = numeric::exponential(rng, conversions::JOURNEY_MEAN_DAYS) as i64;
    days.clamp(conversions::JOURNEY_CLAMP.0, conversions::JOURNEY_CLAMP.1)
}

/// Outlier multiplier for one post: usually 1.0, sometimes a flop or a
/// viral spike. Only values above the viral threshold change the
/// engagement draw downstream.
pub fn outlier_multiplier(rng: &mut impl Rng) -> f64 {
    if rng.gen::<f64>() < engagement::OUTLIER_SHARE {
        let pick: f64 = rng.gen();
        let mut edge = 0.0;
        for (mult, share) in engagement::OUTLIER_MULTIPLIERS {
            edge += share;
            if pick < edge {
                return mult;
            }
        }
        // Float slack on the last edge.
        engagement::OUTLIER_MULTIPLIERS[engagement::OUTLIER_MULTIPLIERS.len() - 1].0
    } else {
        1.0
    }
}
