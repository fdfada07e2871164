//! Statistical sampling toolkit.
//!
//! `categorical` holds the weighted-table sampler, `numeric` the pure
//! distribution primitives, and `draws` the domain-level draws built from
//! both. Generators consume these; nothing here touches table state.

pub mod categorical;
pub mod draws;
pub mod numeric;

pub use categorical::Categorical;
pub use draws::EngagementCounts;
