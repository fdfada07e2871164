//! Generator configuration.
//!
//! Plain serde data mirroring the benchmark tables, so a run can be
//! reshaped from a JSON file without touching code. `validate` rejects
//! anything the generators could not sample from; weight tables are
//! checked again where they are compiled into sampling tables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::benchmarks::{
    audience, brands, content, conversions, generation, seasonality, tiers, touchpoints,
};
use crate::error::ConfigError;
use crate::models::{
    AttributionModel, BrandTier, ContentType, InfluencerTier, Platform, TouchpointType,
    VisualStyle,
};

/// Tolerance on weight tables that must sum to 1.
pub const WEIGHT_TOLERANCE: f64 = 1e-3;

/// Inclusive date window for generated activity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Days from start to end. Uniform date draws cover `start` up to but
    /// not including `end`; only journey clamping can land on `end` itself.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

impl Default for DateWindow {
    fn default() -> Self {
        let (sy, sm, sd) = generation::WINDOW_START;
        let (ey, em, ed) = generation::WINDOW_END;
        DateWindow {
            start: NaiveDate::from_ymd_opt(sy, sm, sd).expect("benchmark window start is valid"),
            end: NaiveDate::from_ymd_opt(ey, em, ed).expect("benchmark window end is valid"),
        }
    }
}

/// Sampling spec for one influencer tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierSpec {
    pub tier: InfluencerTier,
    pub weight: f64,
    /// Follower bounds, sampled log-uniformly. Requires 0 < low < high.
    pub follower_range: (f64, f64),
    /// Engagement rate percent as (mean, std).
    pub engagement: (f64, f64),
    /// Audience authenticity as (mean, std).
    pub authenticity: (f64, f64),
    /// Cost per sponsored post in USD.
    pub cost_range: (f64, f64),
}

/// Sampling spec for one brand tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrandTierSpec {
    pub tier: BrandTier,
    pub weight: f64,
    /// Monthly social budget bounds in USD. Requires low < high.
    pub budget_range: (f64, f64),
    /// Average order value bounds in USD. Requires 0 < low < high.
    pub aov_range: (f64, f64),
}

/// Content mix available on one platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformContentMix {
    pub platform: Platform,
    pub types: Vec<(ContentType, f64)>,
}

/// Everything a generation run can be steered by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: u64,

    pub n_brands: usize,
    pub n_influencers: usize,
    pub n_posts: usize,
    pub n_conversions: usize,
    pub n_touchpoints: usize,

    pub window: DateWindow,

    pub platform_shares: Vec<(Platform, f64)>,
    pub tier_specs: Vec<TierSpec>,
    pub country_shares: Vec<(String, f64)>,
    pub gender_shares: Vec<(String, f64)>,
    pub age_group_shares: Vec<(String, f64)>,
    pub content_categories: Vec<String>,

    pub brand_tier_specs: Vec<BrandTierSpec>,

    pub content_mixes: Vec<PlatformContentMix>,
    /// Posting-hour weights. Relative, renormalized when compiled, so the
    /// published 1.19-sum table works as-is.
    pub hour_weights: Vec<(u32, f64)>,
    /// Day-of-week weights, Monday first.
    pub day_weights: Vec<f64>,
    pub visual_style_shares: Vec<(VisualStyle, f64)>,
    pub dominant_colors: Vec<String>,

    /// Demand multiplier per month, January first.
    pub monthly_seasonality: [f64; 12],

    pub attribution_shares: Vec<(AttributionModel, f64)>,
    pub touchpoint_type_shares: Vec<(TouchpointType, f64)>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let tier_specs = InfluencerTier::ALL
            .iter()
            .enumerate()
            .map(|(i, &tier)| TierSpec {
                tier,
                weight: tiers::SHARES[i],
                follower_range: tiers::FOLLOWER_RANGES[i],
                engagement: tiers::ENGAGEMENT_RATES[i],
                authenticity: tiers::AUTHENTICITY_SCORES[i],
                cost_range: tiers::COST_PER_POST[i],
            })
            .collect();

        let brand_tier_specs = brands::TIER_SHARES
            .iter()
            .enumerate()
            .map(|(i, &(tier, weight))| BrandTierSpec {
                tier,
                weight,
                budget_range: brands::BUDGET_RANGES[i],
                aov_range: brands::AOV_RANGES[i],
            })
            .collect();

        let content_mixes = Platform::SOCIAL
            .iter()
            .map(|&platform| PlatformContentMix {
                platform,
                types: content::types_for(platform).to_vec(),
            })
            .collect();

        GeneratorConfig {
            seed: generation::SEED,
            n_brands: generation::N_BRANDS,
            n_influencers: generation::N_INFLUENCERS,
            n_posts: generation::N_POSTS,
            n_conversions: generation::N_CONVERSIONS,
            n_touchpoints: generation::N_TOUCHPOINTS,
            window: DateWindow::default(),
            platform_shares: audience::PLATFORM_SHARES.to_vec(),
            tier_specs,
            country_shares: owned_pairs(&audience::COUNTRY_SHARES),
            gender_shares: owned_pairs(&audience::GENDER_SHARES),
            age_group_shares: owned_pairs(&audience::AGE_GROUP_SHARES),
            content_categories: audience::CONTENT_CATEGORIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            brand_tier_specs,
            content_mixes,
            hour_weights: content::HOUR_WEIGHTS.to_vec(),
            day_weights: content::DAY_WEIGHTS.to_vec(),
            visual_style_shares: content::VISUAL_STYLES.to_vec(),
            dominant_colors: content::DOMINANT_COLORS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            monthly_seasonality: seasonality::MONTHLY,
            attribution_shares: conversions::ATTRIBUTION_SHARES.to_vec(),
            touchpoint_type_shares: touchpoints::TYPE_SHARES.to_vec(),
        }
    }
}

fn owned_pairs(table: &[(&str, f64)]) -> Vec<(String, f64)> {
    table.iter().map(|&(s, w)| (s.to_string(), w)).collect()
}

impl GeneratorConfig {
    /// Checks everything the generators would otherwise trip over
    /// mid-run: counts, window order, and range bounds. Weight tables are
    /// validated where they are compiled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let counts = [
            ("n_brands", self.n_brands),
            ("n_influencers", self.n_influencers),
            ("n_posts", self.n_posts),
            ("n_conversions", self.n_conversions),
            ("n_touchpoints", self.n_touchpoints),
        ];
        for (name, count) in counts {
            if count == 0 {
                return Err(ConfigError::ZeroCount {
                    name: name.to_string(),
                });
            }
        }
        if self.window.start > self.window.end {
            return Err(ConfigError::InvalidWindow {
                start: self.window.start,
                end: self.window.end,
            });
        }

        for spec in &self.tier_specs {
            let (lo, hi) = spec.follower_range;
            if !(lo > 0.0 && lo < hi) {
                return Err(ConfigError::InvalidRange {
                    name: format!("{}.follower_range", spec.tier),
                    low: lo,
                    high: hi,
                });
            }
        }
        for spec in &self.brand_tier_specs {
            let (lo, hi) = spec.budget_range;
            if lo >= hi {
                return Err(ConfigError::InvalidRange {
                    name: format!("{}.budget_range", spec.tier),
                    low: lo,
                    high: hi,
                });
            }
            let (lo, hi) = spec.aov_range;
            if !(lo > 0.0 && lo < hi) {
                return Err(ConfigError::InvalidRange {
                    name: format!("{}.aov_range", spec.tier),
                    low: lo,
                    high: hi,
                });
            }
        }
        Ok(())
    }

    /// Seasonal demand multiplier for a calendar month (1 through 12).
    #[inline]
    pub fn seasonality_for(&self, month: u32) -> f64 {
        self.monthly_seasonality[(month as usize).saturating_sub(1).min(11)]
    }

    pub fn tier_spec(&self, tier: InfluencerTier) -> Option<&TierSpec> {
        self.tier_specs.iter().find(|s| s.tier == tier)
    }

    /// Order-value band for a brand tier. Tiers missing from the config
    /// fall back to the mid-market benchmark band.
    pub fn aov_for(&self, tier: BrandTier) -> (f64, f64) {
        self.brand_tier_specs
            .iter()
            .find(|s| s.tier == tier)
            .map(|s| s.aov_range)
            .unwrap_or(brands::AOV_RANGES[2])
    }

    /// Content mix for a platform; platforms without a mix publish plain
    /// photos only.
    pub fn content_mix_for(&self, platform: Platform) -> Vec<(ContentType, f64)> {
        self.content_mixes
            .iter()
            .find(|m| m.platform == platform)
            .map(|m| m.types.clone())
            .unwrap_or_else(|| vec![(ContentType::Photo, 1.0)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GeneratorConfig::default();
        config.validate().unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.n_influencers, 1_500);
        assert_eq!(config.tier_specs.len(), 5);
        assert_eq!(config.brand_tier_specs.len(), 5);
        assert_eq!(config.country_shares.len(), 15);
        assert_eq!(config.hour_weights.len(), 18);
    }

    #[test]
    fn test_window_spans_a_leap_year() {
        let window = DateWindow::default();
        // 2024-02-01 through 2025-01-31 covers 365 days of span.
        assert_eq!(window.span_days(), 365);
    }

    #[test]
    fn test_partial_json_overrides_keep_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"seed": 7, "n_posts": 100}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.n_posts, 100);
        assert_eq!(config.n_influencers, 1_500);
        assert_eq!(config.monthly_seasonality[11], 1.25);
    }

    #[test]
    fn test_validate_rejects_inverted_window() {
        let mut config = GeneratorConfig::default();
        std::mem::swap(&mut config.window.start, &mut config.window.end);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_ranges_and_counts() {
        let mut config = GeneratorConfig::default();
        config.n_brands = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroCount { .. })));

        let mut config = GeneratorConfig::default();
        config.n_touchpoints = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroCount { .. })));

        let mut config = GeneratorConfig::default();
        config.tier_specs[0].follower_range = (10_000.0, 1_000.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange { .. })
        ));

        let mut config = GeneratorConfig::default();
        config.brand_tier_specs[4].aov_range = (0.0, 200.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_aov_falls_back_to_mid_market() {
        let mut config = GeneratorConfig::default();
        config.brand_tier_specs.retain(|s| s.tier != BrandTier::Dtc);
        assert_eq!(config.aov_for(BrandTier::Dtc), (50.0, 150.0));
        assert_eq!(config.aov_for(BrandTier::Luxury), (500.0, 2_000.0));
    }

    #[test]
    fn test_seasonality_lookup_is_one_indexed() {
        let config = GeneratorConfig::default();
        assert_eq!(config.seasonality_for(1), 0.85);
        assert_eq!(config.seasonality_for(7), 0.80);
        assert_eq!(config.seasonality_for(12), 1.25);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = GeneratorConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let back: GeneratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
