//! Analysis Configuration - all scoring thresholds as operator-tunable TOML values
//!
//! Each section struct implements `Default` with values matching the
//! documented constants, ensuring zero-change behavior when no config file
//! is present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for the combat intelligence engine.
///
/// Load with `AnalysisConfig::load()` which searches:
/// 1. `$AEGIS_CONFIG` env var
/// 2. `./analysis_config.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Battle clustering parameters
    #[serde(default)]
    pub clustering: ClusteringConfig,

    /// Battle classification thresholds
    #[serde(default)]
    pub battle: BattleThresholdConfig,

    /// Doctrine matching weights and bands
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Fleet threat scoring parameters
    #[serde(default)]
    pub threat: ThreatConfig,

    /// Recommendation rule thresholds
    #[serde(default)]
    pub recommendations: RecommendationConfig,

    /// Module role classification tuning
    #[serde(default)]
    pub roles: RoleConfig,
}

impl AnalysisConfig {
    /// Load configuration using the standard search order.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("AEGIS_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded analysis config from AEGIS_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from AEGIS_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "AEGIS_CONFIG points to non-existent file, falling back");
            }
        }

        let cwd_path = Path::new("analysis_config.toml");
        if cwd_path.exists() {
            match Self::load_from_file(cwd_path) {
                Ok(config) => {
                    info!("Loaded analysis config from ./analysis_config.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse ./analysis_config.toml, using defaults");
                }
            }
        }

        info!("No analysis config file found, using built-in defaults");
        Self::default()
    }

    /// Load and parse a specific TOML file.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

// ============================================================================
// Clustering
// ============================================================================

/// Battle clustering parameters (time-bucket grouping).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Time bucket width in minutes; kills in the same system within the
    /// same bucket form one cluster
    pub bucket_minutes: u32,
    /// Default lookback window for subject battle queries (days)
    pub lookback_days: u32,
    /// Minimum attackers for a killmail to count as a multi-pilot engagement
    pub min_attackers: u32,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            bucket_minutes: 30,
            lookback_days: 30,
            min_attackers: 5,
        }
    }
}

// ============================================================================
// Battle Classification
// ============================================================================

/// Thresholds for the battle-type ladder and intensity banding.
///
/// The participant rules are checked before the ISK rule, which is checked
/// before the killmail-count rule; first match wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleThresholdConfig {
    /// Participants at or above this => major battle
    pub major_battle_participants: usize,
    /// Participants at or above this => fleet engagement
    pub fleet_engagement_participants: usize,
    /// Participants at or above this => medium engagement
    pub medium_engagement_participants: usize,
    /// ISK destroyed at or above this => high value fight (1B default)
    pub high_value_isk: f64,
    /// Killmails at or above this => extended skirmish
    pub extended_skirmish_killmails: usize,

    /// ISK-per-participant banding for intensity
    pub intensity_very_high_isk: f64,
    pub intensity_high_isk: f64,
    pub intensity_medium_isk: f64,
}

impl Default for BattleThresholdConfig {
    fn default() -> Self {
        Self {
            major_battle_participants: 100,
            fleet_engagement_participants: 50,
            medium_engagement_participants: 20,
            high_value_isk: 1_000_000_000.0,
            extended_skirmish_killmails: 10,
            intensity_very_high_isk: 100_000_000.0,
            intensity_high_isk: 50_000_000.0,
            intensity_medium_isk: 20_000_000.0,
        }
    }
}

// ============================================================================
// Doctrine Matching
// ============================================================================

/// Weights and bands for doctrine pattern scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Weight of the primary-hull ratio score (0.5)
    pub primary_weight: f64,
    /// Weight of the support-hull ratio score (0.3)
    pub support_weight: f64,
    /// Weight of the logistics ratio score (0.2)
    pub logistics_weight: f64,

    /// Composite score at or above this is a confident match
    pub confident_threshold: f64,
    /// Quality banding within confident matches
    pub excellent_threshold: f64,
    pub good_threshold: f64,

    /// Optimal support-hull share of the fleet
    pub support_band_min: f64,
    pub support_band_max: f64,
    /// Flat credit when a fleet has zero support hulls (support is optional
    /// evidence, unlike primary hulls)
    pub no_support_credit: f64,

    /// Fleets below this size are exempt from logistics-ratio discipline
    pub small_gang_size: usize,
    /// Flat logistics score applied to exempt small gangs
    pub small_gang_logistics_score: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            primary_weight: 0.5,
            support_weight: 0.3,
            logistics_weight: 0.2,
            confident_threshold: 0.70,
            excellent_threshold: 0.90,
            good_threshold: 0.80,
            support_band_min: 0.15,
            support_band_max: 0.30,
            no_support_credit: 0.3,
            small_gang_size: 5,
            small_gang_logistics_score: 0.8,
        }
    }
}

// ============================================================================
// Threat Scoring
// ============================================================================

/// Fleet threat scoring weights and global logistics bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreatConfig {
    /// Fleets below this size are rejected before any scoring runs
    pub min_fleet_size: usize,

    /// Global logistics band for role effectiveness (distinct from the
    /// per-doctrine bands)
    pub logistics_band_min: f64,
    pub logistics_band_max: f64,

    /// Role effectiveness weights
    pub dps_weight: f64,
    pub logistics_weight: f64,
    pub disruption_weight: f64,

    /// Saturation multipliers inside the effectiveness terms
    pub dps_multiplier: f64,
    pub disruption_multiplier: f64,

    /// size_score = min(max_score, ln(fleet_size + 1) * size_log_multiplier)
    pub size_log_multiplier: f64,
    /// doctrine_bonus = doctrine_confidence * doctrine_bonus_multiplier
    pub doctrine_bonus_multiplier: f64,
    /// Upper bound of the threat score
    pub max_score: f64,
}

impl Default for ThreatConfig {
    fn default() -> Self {
        Self {
            min_fleet_size: 5,
            logistics_band_min: 0.10,
            logistics_band_max: 0.35,
            dps_weight: 0.5,
            logistics_weight: 0.3,
            disruption_weight: 0.2,
            dps_multiplier: 1.5,
            disruption_multiplier: 3.0,
            size_log_multiplier: 2.0,
            doctrine_bonus_multiplier: 2.0,
            max_score: 10.0,
        }
    }
}

// ============================================================================
// Recommendations
// ============================================================================

/// Fleet-share floors that trigger composition recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Ewar share below this triggers an advisory
    pub ewar_floor: f64,
    /// Tackle share below this triggers an advisory
    pub tackle_floor: f64,
    /// Command share below this triggers an advisory
    pub command_floor: f64,
    /// Hard cap on emitted recommendations
    pub max_items: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            ewar_floor: 0.05,
            tackle_floor: 0.05,
            command_floor: 0.02,
            max_items: 8,
        }
    }
}

// ============================================================================
// Role Classification
// ============================================================================

/// Module role classification tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleConfig {
    /// Roles at or above this confidence count as secondary roles
    pub secondary_role_threshold: f64,
}

impl Default for RoleConfig {
    fn default() -> Self {
        Self {
            secondary_role_threshold: 0.3,
        }
    }
}
