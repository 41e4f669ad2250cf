//! Battle Detection - clustering killmails into engagements and classifying them
//!
//! - `clusterer`: groups multi-pilot killmails by (system, 30-minute bucket)
//! - `classifier`: labels each cluster with battle type, intensity, and a
//!   heuristic duration estimate

pub mod clusterer;
pub mod classifier;

pub use classifier::classify_cluster;
pub use clusterer::BattleClusterer;
