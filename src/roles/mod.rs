//! Module Role Classifier
//!
//! Maps a victim's fitted modules to a confidence vector over the six
//! tactical roles. Classification is deliberately heuristic: curated keyword
//! tables per fitting slot bank, each hit adding a fixed saturating
//! increment, followed by additive ship-class adjustments and a final clamp.
//! The keyword tables are declarative data, not control flow, and are unit
//! tested exhaustively.
//!
//! ## Pipeline
//! - `slots`: partition modules into high/mid/low/rig banks by slot flag
//! - `patterns`: keyword tables per bank (category -> role + increment)
//! - `classifier`: scoring passes, class adjustments, derived outputs

pub mod slots;
pub mod patterns;
pub mod classifier;

pub use classifier::{classify_modules, ModuleClassification};
pub use slots::SlotBank;
