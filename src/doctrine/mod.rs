//! Doctrine Matching - scoring fleets against known composition templates
//!
//! - `catalog`: immutable doctrine catalog (compiled-in defaults, optional
//!   TOML override), built once at startup and shared read-only
//! - `matcher`: piecewise ratio scoring and weighted combination

pub mod catalog;
pub mod matcher;

pub use catalog::DoctrineCatalog;
pub use matcher::{band_score, DoctrineMatcher, PatternScore};
