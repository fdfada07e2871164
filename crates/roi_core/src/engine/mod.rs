//! Table generators.
//!
//! One generator per table, run in dependency order by the pipeline:
//! brands, influencers, posts, conversions, touchpoints. All of them draw
//! from one shared ChaCha8 stream, so a seed pins every id, date, and
//! count in the dataset. Each generator compiles its sampling tables in
//! `new`; a bad table stops the run before any rows exist.

pub mod brands;
pub mod conversions;
pub mod influencers;
pub mod pipeline;
pub mod posts;
pub mod touchpoints;

pub use brands::BrandGenerator;
pub use conversions::ConversionGenerator;
pub use influencers::InfluencerGenerator;
pub use pipeline::DatasetGenerator;
pub use posts::PostGenerator;
pub use touchpoints::TouchpointGenerator;

use chrono::{Duration, NaiveDate};
use rand::Rng;
use uuid::Uuid;

use crate::config::DateWindow;

/// Mints a fresh entity id from the shared stream. The id keeps the
/// version-4 layout but its bytes come from the seeded RNG, so the same
/// run always produces the same ids.
#[inline]
pub(crate) fn entity_id(rng: &mut impl Rng) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}

/// Uniform date inside the window. The end day itself is excluded; only
/// journey clamping downstream can land on it. A zero-span window always
/// yields its start.
pub(crate) fn draw_date(rng: &mut impl Rng, window: &DateWindow) -> NaiveDate {
    let span = window.span_days();
    if span <= 0 {
        return window.start;
    }
    window.start + Duration::days(rng.gen_range(0..span))
}
