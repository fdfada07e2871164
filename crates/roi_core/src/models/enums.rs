//! Closed vocabularies shared across every table.
//!
//! Serde names are the exact strings written to CSV, so `as_str` and the
//! serialized form must stay in lockstep (covered by tests below).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Social platform a creator publishes on.
///
/// `Website` never appears on influencers or posts. It only shows up on
/// touchpoints that are not tied to a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Instagram,
    TikTok,
    YouTube,
    Twitter,
    Website,
}

impl Platform {
    /// The four platforms creators can be assigned to.
    pub const SOCIAL: [Platform; 4] = [
        Platform::Instagram,
        Platform::TikTok,
        Platform::YouTube,
        Platform::Twitter,
    ];

    pub const ALL: [Platform; 5] = [
        Platform::Instagram,
        Platform::TikTok,
        Platform::YouTube,
        Platform::Twitter,
        Platform::Website,
    ];

    /// Position in `ALL`, used to index per-platform lookup tables.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Platform::Instagram => 0,
            Platform::TikTok => 1,
            Platform::YouTube => 2,
            Platform::Twitter => 3,
            Platform::Website => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::TikTok => "TikTok",
            Platform::YouTube => "YouTube",
            Platform::Twitter => "Twitter",
            Platform::Website => "Website",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audience-size band. Ordering is nano (smallest) through mega (largest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfluencerTier {
    Nano,
    Micro,
    Mid,
    Macro,
    Mega,
}

impl InfluencerTier {
    pub const ALL: [InfluencerTier; 5] = [
        InfluencerTier::Nano,
        InfluencerTier::Micro,
        InfluencerTier::Mid,
        InfluencerTier::Macro,
        InfluencerTier::Mega,
    ];

    /// Position in the nano-to-mega ordering, used as the ordinal rank
    /// when correlating tier against other columns.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            InfluencerTier::Nano => 0,
            InfluencerTier::Micro => 1,
            InfluencerTier::Mid => 2,
            InfluencerTier::Macro => 3,
            InfluencerTier::Mega => 4,
        }
    }

    /// Mid tier and above: higher sponsorship appetite, easier verification.
    #[inline]
    pub fn is_large(&self) -> bool {
        matches!(
            self,
            InfluencerTier::Mid | InfluencerTier::Macro | InfluencerTier::Mega
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InfluencerTier::Nano => "nano",
            InfluencerTier::Micro => "micro",
            InfluencerTier::Mid => "mid",
            InfluencerTier::Macro => "macro",
            InfluencerTier::Mega => "mega",
        }
    }
}

impl fmt::Display for InfluencerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Market positioning of a brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrandTier {
    Luxury,
    Premium,
    #[serde(rename = "Mid-market")]
    MidMarket,
    #[serde(rename = "Fast-fashion")]
    FastFashion,
    #[serde(rename = "DTC")]
    Dtc,
}

impl BrandTier {
    pub const ALL: [BrandTier; 5] = [
        BrandTier::Luxury,
        BrandTier::Premium,
        BrandTier::MidMarket,
        BrandTier::FastFashion,
        BrandTier::Dtc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BrandTier::Luxury => "Luxury",
            BrandTier::Premium => "Premium",
            BrandTier::MidMarket => "Mid-market",
            BrandTier::FastFashion => "Fast-fashion",
            BrandTier::Dtc => "DTC",
        }
    }
}

impl fmt::Display for BrandTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format of a published post. Which types are available depends on the
/// platform (stories only exist on Instagram, shorts only on YouTube).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Photo,
    Carousel,
    Reel,
    Story,
    Video,
    Shorts,
    Text,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Photo => "photo",
            ContentType::Carousel => "carousel",
            ContentType::Reel => "reel",
            ContentType::Story => "story",
            ContentType::Video => "video",
            ContentType::Shorts => "shorts",
            ContentType::Text => "text",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Photographic treatment of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualStyle {
    Lifestyle,
    ProductShot,
    BehindScenes,
    UserGenerated,
    Editorial,
}

impl VisualStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualStyle::Lifestyle => "lifestyle",
            VisualStyle::ProductShot => "product_shot",
            VisualStyle::BehindScenes => "behind_scenes",
            VisualStyle::UserGenerated => "user_generated",
            VisualStyle::Editorial => "editorial",
        }
    }
}

impl fmt::Display for VisualStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Multi-touch attribution model recorded on a conversion.
///
/// The label is sampled independently of how touchpoint weights are drawn,
/// matching real export feeds where the reported model and the weight
/// pipeline disagree. `weights_for_label` in the attribution module is the
/// path that actually honors the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributionModel {
    FirstTouch,
    LastTouch,
    Linear,
    TimeDecay,
    PositionBased,
}

impl AttributionModel {
    pub const ALL: [AttributionModel; 5] = [
        AttributionModel::FirstTouch,
        AttributionModel::LastTouch,
        AttributionModel::Linear,
        AttributionModel::TimeDecay,
        AttributionModel::PositionBased,
    ];

    /// Parses a feed label. Unrecognized labels fall back to linear, the
    /// neutral even split.
    pub fn from_label(label: &str) -> AttributionModel {
        match label {
            "first_touch" => AttributionModel::FirstTouch,
            "last_touch" => AttributionModel::LastTouch,
            "time_decay" => AttributionModel::TimeDecay,
            "position_based" => AttributionModel::PositionBased,
            _ => AttributionModel::Linear,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributionModel::FirstTouch => "first_touch",
            AttributionModel::LastTouch => "last_touch",
            AttributionModel::Linear => "linear",
            AttributionModel::TimeDecay => "time_decay",
            AttributionModel::PositionBased => "position_based",
        }
    }
}

impl fmt::Display for AttributionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of interaction recorded on the journey before a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchpointType {
    View,
    Click,
    Save,
    Like,
    Comment,
    WebsiteVisit,
    AddToCart,
}

impl TouchpointType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TouchpointType::View => "view",
            TouchpointType::Click => "click",
            TouchpointType::Save => "save",
            TouchpointType::Like => "like",
            TouchpointType::Comment => "comment",
            TouchpointType::WebsiteVisit => "website_visit",
            TouchpointType::AddToCart => "add_to_cart",
        }
    }
}

impl fmt::Display for TouchpointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket assigned from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerformanceSegment {
    #[serde(rename = "High Performer")]
    High,
    #[serde(rename = "Medium Performer")]
    Medium,
    #[serde(rename = "Low Performer")]
    Low,
}

impl PerformanceSegment {
    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceSegment::High => "High Performer",
            PerformanceSegment::Medium => "Medium Performer",
            PerformanceSegment::Low => "Low Performer",
        }
    }
}

impl fmt::Display for PerformanceSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
