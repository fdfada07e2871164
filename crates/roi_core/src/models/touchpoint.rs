//! Touchpoint entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Platform, TouchpointType};

/// One row of the touchpoints table. Field order is the CSV column order.
///
/// `contributed_to_conversion`, `conversion_id`, and a positive
/// `attribution_weight` travel together: either all three mark a
/// contributing touchpoint or none do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchpointRow {
    pub touchpoint_id: Uuid,
    pub customer_id: Uuid,
    pub post_id: Option<Uuid>,
    pub touchpoint_type: TouchpointType,
    pub touchpoint_date: NaiveDate,
    pub platform: Platform,
    pub contributed_to_conversion: bool,
    pub conversion_id: Option<Uuid>,
    pub attribution_weight: f64,
}
