//! Brand entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BrandTier, Platform};

/// One row of the brands table. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandRow {
    pub brand_id: Uuid,
    pub brand_name: String,
    pub brand_tier: BrandTier,
    pub monthly_social_budget: f64,
    pub primary_platform: Platform,
    pub avg_product_price: f64,
    pub target_demographic: String,
    pub founded_year: i32,
}
