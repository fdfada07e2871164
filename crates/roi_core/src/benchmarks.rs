//! Industry benchmark tables behind the default configuration
//!
//! Based on published influencer-marketing benchmarks from Sprout Social,
//! Later, HubSpot, and Influencer Marketing Hub (2024 editions). Values are
//! grouped by the table they shape; `GeneratorConfig::default()` assembles
//! them into validated sampling tables.

use crate::models::{
    AttributionModel, BrandTier, ContentType, Platform, TouchpointType, VisualStyle,
};

// ============================================================
// Dataset shape and reproducibility
// ============================================================
pub mod generation {
    /// Default RNG seed. Same seed, same dataset, byte for byte.
    pub const SEED: u64 = 42;

    pub const N_BRANDS: usize = 25;
    pub const N_INFLUENCERS: usize = 1_500;
    pub const N_POSTS: usize = 50_000;
    pub const N_CONVERSIONS: usize = 30_000;
    pub const N_TOUCHPOINTS: usize = 100_000;

    /// Activity window as (year, month, day), inclusive on both ends.
    pub const WINDOW_START: (i32, u32, u32) = (2024, 2, 1);
    pub const WINDOW_END: (i32, u32, u32) = (2025, 1, 31);
}

// ============================================================
// Creator population
// ============================================================
pub mod audience {
    use super::Platform;

    /// Platform share of fashion creators.
    pub const PLATFORM_SHARES: [(Platform, f64); 4] = [
        (Platform::Instagram, 0.45),
        (Platform::TikTok, 0.35),
        (Platform::YouTube, 0.12),
        (Platform::Twitter, 0.08),
    ];

    /// Country shares, US capped well below half to avoid a US-only skew.
    pub const COUNTRY_SHARES: [(&str, f64); 15] = [
        ("United States", 0.30),
        ("United Kingdom", 0.12),
        ("Germany", 0.08),
        ("France", 0.07),
        ("Italy", 0.05),
        ("Spain", 0.05),
        ("Australia", 0.05),
        ("Canada", 0.05),
        ("Japan", 0.04),
        ("South Korea", 0.04),
        ("Brazil", 0.04),
        ("India", 0.04),
        ("Mexico", 0.03),
        ("Netherlands", 0.02),
        ("Sweden", 0.02),
    ];

    /// Creator gender shares.
    pub const GENDER_SHARES: [(&str, f64); 4] = [
        ("Female", 0.48),
        ("Male", 0.45),
        ("Non-binary", 0.05),
        ("Unknown", 0.02),
    ];

    /// Creator age-group shares.
    pub const AGE_GROUP_SHARES: [(&str, f64); 4] = [
        ("18-24", 0.35),
        ("25-34", 0.40),
        ("35-44", 0.18),
        ("45+", 0.07),
    ];

    /// Fashion niches, assigned uniformly.
    pub const CONTENT_CATEGORIES: [&str; 8] = [
        "Luxury Fashion",
        "Streetwear",
        "Sustainable Fashion",
        "Fast Fashion",
        "Accessories",
        "Footwear",
        "Activewear",
        "Vintage/Thrift",
    ];

    /// Creator-level jitter added on top of the tier engagement draw.
    pub const ENGAGEMENT_JITTER: (f64, f64) = (-0.3, 0.3);

    /// Engagement rate percent is held inside this band.
    pub const ENGAGEMENT_CLAMP: (f64, f64) = (0.5, 12.0);

    /// Authenticity scores are held inside this band.
    pub const AUTHENTICITY_CLAMP: (f64, f64) = (0.4, 0.99);

    /// Market-noise multiplier on the follower-scaled collaboration cost.
    pub const COST_JITTER: (f64, f64) = (0.8, 1.2);

    /// Mean and std of posts per week, shared by every tier.
    pub const POST_FREQUENCY: (f64, f64) = (4.2, 1.5);

    /// Account age in months, half-open range.
    pub const ACCOUNT_AGE_MONTHS: (i64, i64) = (12, 96);

    /// Verification odds below and at-or-above the mid tier.
    pub const VERIFIED_SMALL: f64 = 0.10;
    pub const VERIFIED_LARGE: f64 = 0.50;

    /// Share of accounts still active.
    pub const ACTIVE: f64 = 0.95;
}

// ============================================================
// Tier benchmarks. All five arrays are indexed in the
// InfluencerTier::ALL order: nano, micro, mid, macro, mega.
// ============================================================
pub mod tiers {
    /// Population share per tier.
    pub const SHARES: [f64; 5] = [0.40, 0.35, 0.15, 0.07, 0.03];

    /// Follower bounds per tier, sampled log-uniformly.
    pub const FOLLOWER_RANGES: [(f64, f64); 5] = [
        (1_000.0, 10_000.0),
        (10_000.0, 100_000.0),
        (100_000.0, 500_000.0),
        (500_000.0, 1_000_000.0),
        (1_000_000.0, 10_000_000.0),
    ];

    /// Engagement rate percent as (mean, std). Small accounts engage harder.
    pub const ENGAGEMENT_RATES: [(f64, f64); 5] = [
        (6.0, 1.5),
        (3.5, 1.0),
        (2.2, 0.6),
        (1.5, 0.4),
        (1.0, 0.3),
    ];

    /// Audience authenticity as (mean, std), decaying with account size.
    pub const AUTHENTICITY_SCORES: [(f64, f64); 5] = [
        (0.92, 0.05),
        (0.88, 0.06),
        (0.82, 0.08),
        (0.75, 0.10),
        (0.70, 0.12),
    ];

    /// Cost per sponsored post in USD, roughly $10-100 per 10K followers.
    pub const COST_PER_POST: [(f64, f64); 5] = [
        (50.0, 150.0),
        (150.0, 1_000.0),
        (1_000.0, 5_000.0),
        (5_000.0, 15_000.0),
        (15_000.0, 100_000.0),
    ];
}

// ============================================================
// Brand population. Range arrays are indexed in the
// BrandTier::ALL order: Luxury, Premium, Mid-market, Fast-fashion, DTC.
// ============================================================
pub mod brands {
    use super::BrandTier;

    pub const TIER_SHARES: [(BrandTier, f64); 5] = [
        (BrandTier::Luxury, 0.20),
        (BrandTier::Premium, 0.25),
        (BrandTier::MidMarket, 0.30),
        (BrandTier::FastFashion, 0.15),
        (BrandTier::Dtc, 0.10),
    ];

    /// Monthly social budget bounds in USD.
    pub const BUDGET_RANGES: [(f64, f64); 5] = [
        (200_000.0, 500_000.0),
        (100_000.0, 250_000.0),
        (50_000.0, 150_000.0),
        (75_000.0, 200_000.0),
        (25_000.0, 100_000.0),
    ];

    /// Average order value bounds in USD.
    pub const AOV_RANGES: [(f64, f64); 5] = [
        (500.0, 2_000.0),
        (150.0, 500.0),
        (50.0, 150.0),
        (25.0, 75.0),
        (75.0, 200.0),
    ];

    /// Anonymous brand-name parts; a name is one prefix plus one suffix.
    pub const NAME_PREFIXES: [&str; 19] = [
        "Maison", "Atelier", "Casa", "Studio", "House of", "La", "Le", "The", "Modern", "Classic",
        "Urban", "Luxe", "Prima", "Bella", "Nova", "Vero", "Alto", "Aria", "Luna",
    ];

    pub const NAME_SUFFIXES: [&str; 12] = [
        "Mode",
        "Style",
        "Vogue",
        "Chic",
        "Edit",
        "Label",
        "Collective",
        "Co",
        "Design",
        "Wear",
        "Fashion",
        "Threads",
    ];

    /// Declared target demographic, assigned uniformly.
    pub const TARGET_DEMOGRAPHICS: [&str; 4] = ["18-24", "25-34", "35-44", "25-44"];

    /// Founding year, half-open range.
    pub const FOUNDED_YEARS: (i32, i32) = (1990, 2022);
}

// ============================================================
// Post content
// ============================================================
pub mod content {
    use super::{ContentType, Platform, VisualStyle};

    pub const INSTAGRAM_TYPES: [(ContentType, f64); 4] = [
        (ContentType::Photo, 0.35),
        (ContentType::Carousel, 0.25),
        (ContentType::Reel, 0.30),
        (ContentType::Story, 0.10),
    ];

    pub const TIKTOK_TYPES: [(ContentType, f64); 2] =
        [(ContentType::Video, 0.95), (ContentType::Photo, 0.05)];

    pub const YOUTUBE_TYPES: [(ContentType, f64); 2] =
        [(ContentType::Video, 0.85), (ContentType::Shorts, 0.15)];

    pub const TWITTER_TYPES: [(ContentType, f64); 3] = [
        (ContentType::Photo, 0.50),
        (ContentType::Video, 0.25),
        (ContentType::Text, 0.25),
    ];

    /// Content mix for one platform in (type, share) pairs.
    pub fn types_for(platform: Platform) -> &'static [(ContentType, f64)] {
        match platform {
            Platform::Instagram => &INSTAGRAM_TYPES,
            Platform::TikTok => &TIKTOK_TYPES,
            Platform::YouTube => &YOUTUBE_TYPES,
            _ => &TWITTER_TYPES,
        }
    }

    /// Posting-hour weights for hours 6 through 23. The published table
    /// sums to 1.19, not 1.0; it is renormalized when the config is built
    /// so relative odds are preserved.
    pub const HOUR_WEIGHTS: [(u32, f64); 18] = [
        (6, 0.02),
        (7, 0.03),
        (8, 0.05),
        (9, 0.07),
        (10, 0.08),
        (11, 0.10),
        (12, 0.12),
        (13, 0.10),
        (14, 0.07),
        (15, 0.06),
        (16, 0.05),
        (17, 0.04),
        (18, 0.06),
        (19, 0.08),
        (20, 0.10),
        (21, 0.08),
        (22, 0.05),
        (23, 0.03),
    ];

    /// Day-of-week shares, Monday first. Midweek peaks.
    pub const DAY_WEIGHTS: [f64; 7] = [0.12, 0.16, 0.17, 0.16, 0.14, 0.13, 0.12];

    pub const VISUAL_STYLES: [(VisualStyle, f64); 5] = [
        (VisualStyle::Lifestyle, 0.35),
        (VisualStyle::ProductShot, 0.30),
        (VisualStyle::BehindScenes, 0.15),
        (VisualStyle::UserGenerated, 0.12),
        (VisualStyle::Editorial, 0.08),
    ];

    /// Fashion palette, assigned uniformly.
    pub const DOMINANT_COLORS: [&str; 15] = [
        "neutral_beige",
        "cream_white",
        "classic_black",
        "navy_blue",
        "olive_green",
        "terracotta",
        "dusty_rose",
        "burgundy",
        "camel_brown",
        "sage_green",
        "lavender",
        "rust_orange",
        "charcoal_grey",
        "ivory",
        "forest_green",
    ];

    /// Caption length in characters as (mean, std), clamped below.
    pub const CAPTION_CHARS: (f64, f64) = (180.0, 80.0);
    pub const CAPTION_CLAMP: (i64, i64) = (20, 500);

    /// Hashtag count as (mean, std, min, max) per platform. Platforms
    /// without a tuple draw uniformly from 1 to 4.
    pub const HASHTAGS_INSTAGRAM: (f64, f64, i64, i64) = (8.0, 4.0, 1, 30);
    pub const HASHTAGS_TIKTOK: (f64, f64, i64, i64) = (4.0, 2.0, 1, 10);
    pub const HASHTAGS_TWITTER: (f64, f64, i64, i64) = (2.0, 1.0, 0, 5);
    pub const HASHTAGS_FALLBACK: (i64, i64) = (1, 5);

    /// Share of posts carrying a call to action.
    pub const HAS_CTA: f64 = 0.45;

    /// Sponsorship odds below and at-or-above the mid tier.
    pub const SPONSORED_SMALL: f64 = 0.10;
    pub const SPONSORED_LARGE: f64 = 0.25;

    /// Share of sponsored posts that surface a discount code.
    pub const DISCOUNT_CODE_PRESENT: f64 = 0.30;

    /// Mean tagged products on a sponsored post (Poisson).
    pub const PRODUCT_COUNT_MEAN: f64 = 2.0;
}

// ============================================================
// Engagement mechanics
// ============================================================
pub mod engagement {
    /// Odds that a post is an outlier at all.
    pub const OUTLIER_SHARE: f64 = 0.07;

    /// Outlier multiplier table as (multiplier, share of outliers):
    /// a flop, a modest spike, or a blow-up.
    pub const OUTLIER_MULTIPLIERS: [(f64, f64); 3] = [(0.3, 0.3), (3.0, 0.5), (5.0, 0.2)];

    /// Multiplier above which a post counts as viral.
    pub const VIRAL_THRESHOLD: f64 = 2.0;

    /// Ordinary and viral spread around the expected interaction count.
    pub const VARIANCE_RANGE: (f64, f64) = (0.7, 1.3);
    pub const VIRAL_BOOST_RANGE: (f64, f64) = (3.0, 10.0);

    /// Likes as a share of total interactions.
    pub const LIKES_SHARE: (f64, f64) = (0.85, 0.92);

    /// Comments and shares as a share of likes.
    pub const COMMENTS_PER_LIKE: (f64, f64) = (0.03, 0.08);
    pub const SHARES_PER_LIKE: (f64, f64) = (0.01, 0.025);

    /// Saves as a share of likes: save-friendly formats run higher.
    pub const SAVES_PER_LIKE_HIGH: (f64, f64) = (0.03, 0.06);
    pub const SAVES_PER_LIKE_LOW: (f64, f64) = (0.02, 0.04);

    /// Reach as a share of followers, before the engagement-rate bonus.
    pub const REACH_SHARE: (f64, f64) = (0.20, 0.40);

    /// Reach bonus thresholds on raw engagement rate percent.
    pub const REACH_BONUS_HIGH: (f64, f64) = (5.0, 1.3);
    pub const REACH_BONUS_MID: (f64, f64) = (3.0, 1.1);

    /// Impressions as a multiple of reach.
    pub const IMPRESSIONS_PER_REACH: (f64, f64) = (1.2, 1.8);
}

// ============================================================
// Seasonality
// ============================================================
pub mod seasonality {
    /// Monthly demand multipliers, January first. Q4 peaks, summer dips.
    pub const MONTHLY: [f64; 12] = [
        0.85, 0.90, 0.95, 1.00, 0.95, 0.85, 0.80, 0.90, 1.05, 1.10, 1.20, 1.25,
    ];
}

// ============================================================
// Conversions
// ============================================================
pub mod conversions {
    use super::AttributionModel;

    /// Share of conversions traced back to a sponsored post.
    pub const SPONSORED_SHARE: f64 = 0.65;

    /// Reported attribution model mix.
    pub const ATTRIBUTION_SHARES: [(AttributionModel, f64); 5] = [
        (AttributionModel::FirstTouch, 0.15),
        (AttributionModel::LastTouch, 0.25),
        (AttributionModel::Linear, 0.20),
        (AttributionModel::TimeDecay, 0.25),
        (AttributionModel::PositionBased, 0.15),
    ];

    /// UTM tags, sampled uniformly.
    pub const UTM_SOURCES: [&str; 6] = [
        "instagram",
        "tiktok",
        "youtube",
        "twitter",
        "direct",
        "organic",
    ];
    pub const UTM_MEDIUMS: [&str; 4] = ["social", "influencer", "organic", "paid"];

    /// Purchased category, sampled uniformly.
    pub const PRODUCT_CATEGORIES: [&str; 5] =
        ["Clothing", "Accessories", "Footwear", "Bags", "Jewelry"];

    /// Share of post-attributed conversions that redeemed a code. Checked
    /// against post presence only, not the post's own discount flag.
    pub const DISCOUNT_CODE_USED: f64 = 0.40;

    /// Days from first touch to purchase: exponential mean, then clamp.
    pub const JOURNEY_MEAN_DAYS: f64 = 7.0;
    pub const JOURNEY_CLAMP: (i64, i64) = (1, 90);

    /// Touchpoint count: geometric success odds, then clamp.
    pub const TOUCHPOINT_GEOMETRIC_P: f64 = 0.3;
    pub const TOUCHPOINT_CLAMP: (i64, i64) = (1, 15);

    /// Order value spread: log-normal within half of low to 1.5x high.
    pub const ORDER_VALUE_CLAMP_FACTORS: (f64, f64) = (0.5, 1.5);
}

// ============================================================
// Touchpoints
// ============================================================
pub mod touchpoints {
    use super::TouchpointType;

    /// Interaction mix across the journey.
    pub const TYPE_SHARES: [(TouchpointType, f64); 7] = [
        (TouchpointType::View, 0.35),
        (TouchpointType::Click, 0.20),
        (TouchpointType::Save, 0.10),
        (TouchpointType::Like, 0.15),
        (TouchpointType::Comment, 0.05),
        (TouchpointType::WebsiteVisit, 0.10),
        (TouchpointType::AddToCart, 0.05),
    ];

    /// Share of touchpoints attached to a recorded conversion.
    pub const ATTRIBUTED_SHARE: f64 = 0.30;

    /// Share of free-floating touchpoints that still reference a post.
    pub const POST_LINK_SHARE: f64 = 0.70;

    /// Attribution weight bounds for contributing touchpoints.
    pub const WEIGHT_RANGE: (f64, f64) = (0.05, 0.40);
}

// ============================================================
// Composite scoring
// ============================================================
pub mod scoring {
    /// Component weights: engagement quality, authenticity, conversion
    /// rate, ROI, brand alignment. Must sum to 1.
    pub const COMPONENT_WEIGHTS: [f64; 5] = [0.25, 0.25, 0.30, 0.15, 0.05];

    /// Interaction weighting inside engagement quality: comments and
    /// shares count double, saves triple.
    pub const COMMENT_WEIGHT: f64 = 2.0;
    pub const SAVE_WEIGHT: f64 = 3.0;
    pub const SHARE_WEIGHT: f64 = 2.0;

    /// Brand alignment score per niche; anything unlisted scores 75.
    pub const ALIGNMENT_SCORES: [(&str, f64); 8] = [
        ("Luxury Fashion", 95.0),
        ("Streetwear", 85.0),
        ("Sustainable Fashion", 90.0),
        ("Fast Fashion", 80.0),
        ("Accessories", 85.0),
        ("Footwear", 82.0),
        ("Activewear", 78.0),
        ("Vintage/Thrift", 88.0),
    ];
    pub const ALIGNMENT_DEFAULT: f64 = 75.0;

    /// ROI is clamped before scaling so one outlier cannot own the scale.
    pub const ROI_CLAMP: (f64, f64) = (-1.0, 10.0);

    /// Composite cutoffs for the performance segments.
    pub const SEGMENT_HIGH: f64 = 75.0;
    pub const SEGMENT_MEDIUM: f64 = 50.0;
}

// ============================================================
// Audit thresholds
// ============================================================
pub mod audit {
    /// Allowed drift between configured and observed categorical shares.
    pub const SHARE_TOLERANCE: f64 = 0.05;

    /// Allowed drift on mean engagement rate per tier, in percent points.
    pub const ENGAGEMENT_TOLERANCE: f64 = 1.0;

    /// Minimum correlation for pairs expected to move together.
    pub const STRONG_CORRELATION: f64 = 0.5;

    /// US share above this counts as geographic bias.
    pub const US_SHARE_CAP: f64 = 0.35;

    /// One gender above this share of a platform counts as skew.
    pub const GENDER_SKEW_CAP: f64 = 0.70;

    /// Z-score beyond which a value is an outlier, and how many are allowed.
    pub const OUTLIER_SIGMA: f64 = 3.0;
    pub const OUTLIER_SHARE_CAP: f64 = 0.10;
}
