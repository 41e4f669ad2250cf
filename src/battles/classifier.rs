//! Battle type / intensity / duration classification
//!
//! Pure functions over a cluster's raw counts, no I/O. The battle-type
//! ladder is first-match-wins: participant thresholds are checked before
//! the ISK threshold, which is checked before the killmail-count threshold.

use crate::config;
use crate::types::{BattleType, IntensityLevel};

/// Classify a cluster's counts into (battle type, intensity, duration label).
pub fn classify_cluster(
    total_participants: usize,
    total_isk_destroyed: f64,
    killmail_count: usize,
) -> (BattleType, IntensityLevel, &'static str) {
    (
        battle_type(total_participants, total_isk_destroyed, killmail_count),
        intensity_level(total_isk_destroyed, total_participants),
        duration_estimate(killmail_count),
    )
}

/// First-match-wins threshold ladder.
///
/// Participant rules fire before the ISK rule: a 55-pilot fight that drops
/// 2B ISK is a fleet engagement, not a high-value fight.
fn battle_type(participants: usize, isk_destroyed: f64, killmails: usize) -> BattleType {
    let t = &config::get().battle;

    if participants >= t.major_battle_participants {
        BattleType::MajorBattle
    } else if participants >= t.fleet_engagement_participants {
        BattleType::FleetEngagement
    } else if participants >= t.medium_engagement_participants {
        BattleType::MediumEngagement
    } else if isk_destroyed >= t.high_value_isk {
        BattleType::HighValueFight
    } else if killmails >= t.extended_skirmish_killmails {
        BattleType::ExtendedSkirmish
    } else {
        BattleType::SmallGangFight
    }
}

/// ISK destroyed per participant, banded.
fn intensity_level(isk_destroyed: f64, participants: usize) -> IntensityLevel {
    let t = &config::get().battle;
    let isk_per_participant = isk_destroyed / participants.max(1) as f64;

    if isk_per_participant >= t.intensity_very_high_isk {
        IntensityLevel::VeryHigh
    } else if isk_per_participant >= t.intensity_high_isk {
        IntensityLevel::High
    } else if isk_per_participant >= t.intensity_medium_isk {
        IntensityLevel::Medium
    } else {
        IntensityLevel::Low
    }
}

/// Heuristic duration label banded from killmail count. Not a measured
/// duration; kills per cluster correlate loosely with engagement length.
fn duration_estimate(killmail_count: usize) -> &'static str {
    if killmail_count >= 20 {
        "30+ minutes"
    } else if killmail_count >= 10 {
        "15-30 minutes"
    } else if killmail_count >= 5 {
        "5-15 minutes"
    } else {
        "<5 minutes"
    }
}
