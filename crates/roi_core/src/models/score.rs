//! Scored influencer entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{InfluencerTier, PerformanceSegment, Platform};

/// One row of the influencer-scores table. Field order is the CSV column
/// order: identity and raw activity first, then the five scaled component
/// scores, the weighted composite, and the segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub influencer_id: Uuid,
    pub username: String,
    pub platform: Platform,
    pub tier: InfluencerTier,
    pub follower_count: i64,
    pub engagement_rate: f64,
    pub audience_authenticity_score: f64,
    pub avg_collaboration_cost: f64,
    pub total_posts: i64,
    pub sponsored_posts: i64,
    pub conversions: i64,
    pub revenue: f64,
    pub engagement_quality_score: f64,
    pub authenticity_score: f64,
    pub conversion_score: f64,
    pub roi_score: f64,
    pub brand_alignment_score: f64,
    pub influencer_score: f64,
    pub performance_segment: PerformanceSegment,
}
