//! Post entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ContentType, Platform, VisualStyle};

/// One row of the posts table. Field order is the CSV column order.
///
/// `brand_id` is set exactly when `is_sponsored` is true. `day_of_week`
/// is drawn from its own weight table and is independent of `post_date`;
/// it models claimed optimal posting behavior, not the calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRow {
    pub post_id: Uuid,
    pub influencer_id: Uuid,
    pub brand_id: Option<Uuid>,
    pub platform: Platform,
    pub post_date: NaiveDate,
    pub post_time_hour: u32,
    pub day_of_week: u32,
    pub content_type: ContentType,
    pub caption_length: i64,
    pub hashtag_count: i64,
    pub has_cta: bool,
    pub product_count: i64,
    pub visual_style: VisualStyle,
    pub dominant_color: String,
    pub is_sponsored: bool,
    pub discount_code_present: bool,
    pub likes: i64,
    pub comments: i64,
    pub shares: i64,
    pub saves: i64,
    pub reach: i64,
    pub impressions: i64,
}
