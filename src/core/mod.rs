// Core algorithm exports
pub mod distance;
pub mod error;
pub mod filters;
pub mod ranker;

pub use distance::{checked_distance, distance_between, haversine_distance, EARTH_RADIUS_MILES};
pub use error::RankError;
pub use filters::{matches_name, normalize_filter};
pub use ranker::{rank, selection_count, Ranker, DEFAULT_FRACTION};
