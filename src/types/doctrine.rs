//! Doctrine catalog types and match results

use serde::{Deserialize, Serialize};

/// Primary tank type of a doctrine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TankType {
    Shield,
    Armor,
    Hull,
}

impl std::fmt::Display for TankType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TankType::Shield => write!(f, "shield"),
            TankType::Armor => write!(f, "armor"),
            TankType::Hull => write!(f, "hull"),
        }
    }
}

/// Intended engagement envelope of a doctrine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EngagementRange {
    Brawl,
    Medium,
    Long,
    Extreme,
}

impl std::fmt::Display for EngagementRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngagementRange::Brawl => write!(f, "brawl"),
            EngagementRange::Medium => write!(f, "medium"),
            EngagementRange::Long => write!(f, "long"),
            EngagementRange::Extreme => write!(f, "extreme"),
        }
    }
}

/// Tactical archetype of a doctrine; keys doctrine-specific recommendations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TacticalRole {
    AlphaStrike,
    SustainedDps,
    Kiting,
    Brawling,
    DronePlatform,
    SkirmishHarass,
}

impl std::fmt::Display for TacticalRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TacticalRole::AlphaStrike => write!(f, "alpha_strike"),
            TacticalRole::SustainedDps => write!(f, "sustained_dps"),
            TacticalRole::Kiting => write!(f, "kiting"),
            TacticalRole::Brawling => write!(f, "brawling"),
            TacticalRole::DronePlatform => write!(f, "drone_platform"),
            TacticalRole::SkirmishHarass => write!(f, "skirmish_harass"),
        }
    }
}

/// Optimal logistics share of the fleet for a doctrine, both ends in [0, 1].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LogisticsBand {
    pub min: f64,
    pub max: f64,
}

/// A named fleet composition template the matcher classifies against.
///
/// Catalog entries are immutable configuration data, built once at startup
/// and shared read-only across concurrent calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctrinePattern {
    /// Stable catalog key, e.g. "muninn_artillery"
    pub key: String,
    /// Human-readable name, e.g. "Artillery Muninns"
    pub name: String,
    /// Mainline hull type ids; at least one must be present in a fleet for
    /// the doctrine to score at all
    pub primary_ship_ids: Vec<u32>,
    /// Logistics / links / tackle hull type ids supporting the mainline
    pub support_ship_ids: Vec<u32>,
    pub tank_type: TankType,
    pub engagement_range: EngagementRange,
    /// Fleets below this size never match this doctrine
    pub min_fleet_size: usize,
    /// Optimal logistics share of the fleet
    pub logistics_ratio: LogisticsBand,
    pub tactical_role: TacticalRole,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Match quality banding over the composite score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchQuality {
    /// score >= 0.90
    Excellent,
    /// score >= 0.80
    Good,
    /// score >= 0.70
    Fair,
    /// 0 < score < 0.70: suggestive but below the confidence threshold
    Partial,
}

impl std::fmt::Display for MatchQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchQuality::Excellent => write!(f, "excellent"),
            MatchQuality::Good => write!(f, "good"),
            MatchQuality::Fair => write!(f, "fair"),
            MatchQuality::Partial => write!(f, "partial"),
        }
    }
}

/// Outcome of scoring a fleet against the whole catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "result")]
pub enum DoctrineClassification {
    /// Best pattern scored at or above the confidence threshold
    Confident {
        doctrine_key: String,
        doctrine_name: String,
        confidence: f64,
        quality: MatchQuality,
    },
    /// Best pattern scored above zero but below the confidence threshold
    Partial {
        doctrine_key: String,
        doctrine_name: String,
        confidence: f64,
        caveat: String,
    },
    /// Every pattern scored zero
    Unknown,
}

impl DoctrineClassification {
    /// Match confidence in [0, 1]; zero for Unknown.
    pub fn confidence(&self) -> f64 {
        match self {
            DoctrineClassification::Confident { confidence, .. }
            | DoctrineClassification::Partial { confidence, .. } => *confidence,
            DoctrineClassification::Unknown => 0.0,
        }
    }

    /// Catalog key of the matched doctrine, if any.
    pub fn doctrine_key(&self) -> Option<&str> {
        match self {
            DoctrineClassification::Confident { doctrine_key, .. }
            | DoctrineClassification::Partial { doctrine_key, .. } => Some(doctrine_key),
            DoctrineClassification::Unknown => None,
        }
    }
}
