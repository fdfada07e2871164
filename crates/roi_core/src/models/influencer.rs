//! Influencer entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{InfluencerTier, Platform};

/// One row of the influencers table. Field order is the CSV column order.
///
/// `avg_post_frequency` is a raw normal draw and can go slightly negative;
/// the quality audit surfaces it rather than the generator hiding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluencerRow {
    pub influencer_id: Uuid,
    pub username: String,
    pub platform: Platform,
    pub tier: InfluencerTier,
    pub follower_count: i64,
    pub engagement_rate: f64,
    pub country: String,
    pub content_category: String,
    pub avg_post_frequency: f64,
    pub audience_authenticity_score: f64,
    pub avg_collaboration_cost: f64,
    pub account_age_months: i64,
    pub gender: String,
    pub age_group: String,
    pub verified: bool,
    pub active: bool,
}
