//! Data model: entity rows, closed vocabularies, and the dataset bundle.

pub mod brand;
pub mod conversion;
pub mod dataset;
pub mod enums;
pub mod influencer;
pub mod post;
pub mod score;
pub mod touchpoint;

// Vocabularies
pub use enums::{
    AttributionModel, BrandTier, ContentType, InfluencerTier, PerformanceSegment, Platform,
    TouchpointType, VisualStyle,
};

// Entity rows
pub use brand::BrandRow;
pub use conversion::ConversionRow;
pub use influencer::InfluencerRow;
pub use post::PostRow;
pub use score::ScoreRow;
pub use touchpoint::TouchpointRow;

// Bundle
pub use dataset::Dataset;
