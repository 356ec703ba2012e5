// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod summary;

pub use distance::{haversine_distance, round_km};
pub use filters::{apply_filters, matches_filter};
pub use summary::{classify, summarize, AmenityReduction};
