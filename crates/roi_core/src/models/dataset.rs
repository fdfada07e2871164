//! The five relationally linked tables produced by one generator run.

use serde::{Deserialize, Serialize};

use super::{BrandRow, ConversionRow, InfluencerRow, PostRow, TouchpointRow};

/// A complete synthetic dataset.
///
/// Every cross-table reference points at a row in the same struct: posts
/// reference influencers and brands, conversions reference sponsored posts,
/// touchpoints reference conversions and posts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub brands: Vec<BrandRow>,
    pub influencers: Vec<InfluencerRow>,
    pub posts: Vec<PostRow>,
    pub conversions: Vec<ConversionRow>,
    pub touchpoints: Vec<TouchpointRow>,
}

impl Dataset {
    /// Row counts per table, in generation order.
    pub fn table_counts(&self) -> [(&'static str, usize); 5] {
        [
            ("brands", self.brands.len()),
            ("influencers", self.influencers.len()),
            ("posts", self.posts.len()),
            ("conversions", self.conversions.len()),
            ("touchpoints", self.touchpoints.len()),
        ]
    }

    pub fn total_rows(&self) -> usize {
        self.table_counts().iter().map(|(_, n)| n).sum()
    }
}
