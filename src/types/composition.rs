//! Fleet composition analysis output types

use serde::{Deserialize, Serialize};

use super::{DoctrineClassification, EngagementRange, RoleDistribution, TacticalRole, TankType};

/// Display banding over the numeric [0, 10] threat score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ThreatLevel {
    Minimal,
    Low,
    Moderate,
    High,
    Critical,
}

impl ThreatLevel {
    /// Band a numeric threat score into a display label.
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            ThreatLevel::Critical
        } else if score >= 6.0 {
            ThreatLevel::High
        } else if score >= 4.0 {
            ThreatLevel::Moderate
        } else if score >= 2.0 {
            ThreatLevel::Low
        } else {
            ThreatLevel::Minimal
        }
    }
}

impl std::fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThreatLevel::Minimal => write!(f, "MINIMAL"),
            ThreatLevel::Low => write!(f, "LOW"),
            ThreatLevel::Moderate => write!(f, "MODERATE"),
            ThreatLevel::High => write!(f, "HIGH"),
            ThreatLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Tactical context lifted from the matched doctrine (None for Unknown).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TacticalAssessment {
    pub tank_type: Option<TankType>,
    pub engagement_range: Option<EngagementRange>,
    pub tactical_role: Option<TacticalRole>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

impl TacticalAssessment {
    /// Assessment for a fleet with no doctrine match.
    pub fn unknown() -> Self {
        Self {
            tank_type: None,
            engagement_range: None,
            tactical_role: None,
            strengths: Vec::new(),
            weaknesses: Vec::new(),
        }
    }
}

/// Complete composition report for a fleet. Built fresh per call; no shared
/// mutable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetCompositionResult {
    pub fleet_size: usize,
    pub doctrine_classification: DoctrineClassification,
    pub tactical_assessment: TacticalAssessment,
    /// Fleet-wide role averages; each component is the average fraction of
    /// ships exhibiting that role, NOT normalized to sum to 1
    pub role_distribution: RoleDistribution,
    /// Composite threat score, [0, 10], one decimal
    pub threat_score: f64,
    pub threat_level: ThreatLevel,
    /// Ordered, deduplicated, capped at 8 entries
    pub recommendations: Vec<String>,
}
