//! Conversion entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AttributionModel;

/// One row of the conversions table. Field order is the CSV column order.
///
/// Post-attributed conversions carry `post_id` and `influencer_id`
/// together; organic ones carry neither but always name a brand.
/// `attribution_type` is the model the feed reports, sampled on its own
/// weight table; it does not drive how touchpoint weights were drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRow {
    pub conversion_id: Uuid,
    pub customer_id: Uuid,
    pub post_id: Option<Uuid>,
    pub influencer_id: Option<Uuid>,
    pub brand_id: Uuid,
    pub conversion_date: NaiveDate,
    pub attribution_type: AttributionModel,
    pub utm_source: String,
    pub utm_medium: String,
    pub order_value: f64,
    pub product_category: String,
    pub discount_code_used: bool,
    pub customer_journey_length: i64,
    pub touchpoints_count: i64,
}

impl ConversionRow {
    /// Whether the purchase is traced back to a sponsored post.
    #[inline]
    pub fn is_post_attributed(&self) -> bool {
        self.post_id.is_some()
    }
}
