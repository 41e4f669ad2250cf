//! Composite [0, 10] fleet threat score
//!
//! `threat = min(10, size_score * role_effectiveness + doctrine_bonus)`:
//! - size_score: logarithmic in fleet size, capped at 10
//! - role_effectiveness: weighted dps / logistics / disruption terms in [0, 1]
//! - doctrine_bonus: doctrine-match confidence scaled by 2.0

use crate::config;
use crate::doctrine::band_score;
use crate::types::RoleDistribution;

/// Threat score with its factor breakdown.
#[derive(Debug, Clone, Copy)]
pub struct ThreatBreakdown {
    /// Final score, [0, 10], rounded to one decimal
    pub threat: f64,
    pub size_score: f64,
    pub role_effectiveness: f64,
    pub doctrine_bonus: f64,
}

/// Score a fleet's threat from its size, role balance, and doctrine-match
/// confidence.
pub fn score_threat(
    fleet_size: usize,
    balance: &RoleDistribution,
    doctrine_confidence: f64,
) -> ThreatBreakdown {
    let cfg = &config::get().threat;

    let size_score = (((fleet_size + 1) as f64).ln() * cfg.size_log_multiplier).min(cfg.max_score);

    // Logistics uses the global band, distinct from per-doctrine bands
    let logistics_term = band_score(
        balance.logistics,
        cfg.logistics_band_min,
        cfg.logistics_band_max,
    );
    let dps_term = (balance.dps * cfg.dps_multiplier).min(1.0);
    let disruption_term = ((balance.ewar + balance.tackle) * cfg.disruption_multiplier).min(1.0);

    let role_effectiveness = cfg.dps_weight * dps_term
        + cfg.logistics_weight * logistics_term
        + cfg.disruption_weight * disruption_term;

    let doctrine_bonus = doctrine_confidence * cfg.doctrine_bonus_multiplier;

    let raw = (size_score * role_effectiveness + doctrine_bonus).min(cfg.max_score);
    let threat = (raw * 10.0).round() / 10.0;

    ThreatBreakdown {
        threat,
        size_score,
        role_effectiveness,
        doctrine_bonus,
    }
}
