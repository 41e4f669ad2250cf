//! Error taxonomy for analysis entry points

use thiserror::Error;

/// Failures surfaced by the top-level analysis calls.
///
/// Missing role data and absent doctrine matches are NOT errors: the former
/// degrades to the generic default vector, the latter classifies as
/// `DoctrineClassification::Unknown`.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Precondition violation: composition analysis needs a real fleet.
    /// Fatal to the call only; no scoring runs.
    #[error("fleet too small for composition analysis: {size} ships (minimum {min})")]
    FleetTooSmall { size: usize, min: usize },

    /// Upstream data-fetch failure, propagated unchanged.
    #[error("killmail provider error: {0}")]
    Provider(#[from] anyhow::Error),
}
