//! Fleet Threat Scoring
//!
//! - `balance`: fleet-wide role averages from per-hull role records
//! - `scorer`: bounded [0, 10] composite threat score
//! - `recommendations`: deterministic composition advisories

pub mod balance;
pub mod scorer;
pub mod recommendations;

pub use balance::aggregate_role_balance;
pub use recommendations::build_recommendations;
pub use scorer::{score_threat, ThreatBreakdown};
