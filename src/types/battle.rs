//! Battle detection types: BattleCluster, BattleType, IntensityLevel

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scale classification for a battle cluster.
///
/// Assigned by a first-match-wins threshold ladder over participant count,
/// ISK destroyed, and killmail count (in that order).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BattleType {
    MajorBattle,
    FleetEngagement,
    MediumEngagement,
    HighValueFight,
    ExtendedSkirmish,
    SmallGangFight,
}

impl std::fmt::Display for BattleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BattleType::MajorBattle => write!(f, "major_battle"),
            BattleType::FleetEngagement => write!(f, "fleet_engagement"),
            BattleType::MediumEngagement => write!(f, "medium_engagement"),
            BattleType::HighValueFight => write!(f, "high_value_fight"),
            BattleType::ExtendedSkirmish => write!(f, "extended_skirmish"),
            BattleType::SmallGangFight => write!(f, "small_gang_fight"),
        }
    }
}

/// ISK-per-participant intensity banding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl std::fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntensityLevel::Low => write!(f, "low"),
            IntensityLevel::Medium => write!(f, "medium"),
            IntensityLevel::High => write!(f, "high"),
            IntensityLevel::VeryHigh => write!(f, "very_high"),
        }
    }
}

/// A group of killmails treated as one engagement by system + time proximity.
///
/// Ephemeral: computed on demand from the killmail set, classified, returned.
/// The engine never persists clusters; that is the caller's concern.
#[derive(Debug, Clone, Serialize)]
pub struct BattleCluster {
    /// Derived id, `"{system_id}-{bucket_epoch}"`
    pub id: String,
    pub system_id: u32,
    /// Start of the cluster's time bucket
    pub time_bucket: DateTime<Utc>,
    pub killmail_count: usize,
    pub total_isk_destroyed: f64,
    /// Distinct attacker + victim character ids across the cluster
    pub total_participants: usize,
    pub battle_type: BattleType,
    pub intensity_level: IntensityLevel,
    /// Heuristic label banded from killmail count, not a measured duration
    pub duration_estimate: &'static str,
}
