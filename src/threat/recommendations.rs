//! Deterministic composition recommendations
//!
//! Rules run in a fixed order (logistics, ewar, tackle, command, doctrine
//! tip, confidence advice); output keeps that order, deduplicated and
//! capped. No priority sort beyond list order.

use crate::config;
use crate::types::{DoctrineClassification, RoleDistribution, TacticalRole};

/// Build the advisory list for a fleet's composition.
pub fn build_recommendations(
    balance: &RoleDistribution,
    classification: &DoctrineClassification,
    tactical_role: Option<TacticalRole>,
) -> Vec<String> {
    let threat_cfg = &config::get().threat;
    let rec_cfg = &config::get().recommendations;
    let matching_cfg = &config::get().matching;

    let mut recs: Vec<String> = Vec::new();

    if balance.logistics < threat_cfg.logistics_band_min {
        recs.push(format!(
            "Logistics share is {:.0}% — bring it above {:.0}% to sustain the fleet under fire",
            balance.logistics * 100.0,
            threat_cfg.logistics_band_min * 100.0
        ));
    } else if balance.logistics > threat_cfg.logistics_band_max {
        recs.push(format!(
            "Logistics share is {:.0}% — above {:.0}% it displaces damage; swap excess logi for mainline hulls",
            balance.logistics * 100.0,
            threat_cfg.logistics_band_max * 100.0
        ));
    }

    if balance.ewar < rec_cfg.ewar_floor {
        recs.push(
            "No meaningful ewar presence — add jammers, damps, or painters to degrade hostile damage"
                .to_string(),
        );
    }
    if balance.tackle < rec_cfg.tackle_floor {
        recs.push(
            "Tackle is thin — add fast tackle to control engagement range and stop extractions"
                .to_string(),
        );
    }
    if balance.command < rec_cfg.command_floor {
        recs.push("No command bursts detected — a links ship is a large force multiplier".to_string());
    }

    if let Some(role) = tactical_role {
        recs.push(tactical_tip(role).to_string());
    }

    if classification.confidence() < matching_cfg.confident_threshold {
        recs.push(
            "Composition does not match a known doctrine — standardize hulls to concentrate logistics and damage"
                .to_string(),
        );
    }

    dedup_preserving_order(&mut recs);
    recs.truncate(rec_cfg.max_items);
    recs
}

/// Doctrine-specific tactical tip, keyed by the matched doctrine's archetype.
fn tactical_tip(role: TacticalRole) -> &'static str {
    match role {
        TacticalRole::AlphaStrike => {
            "Alpha doctrine: call targets tightly and volley-sync; stragglers waste your advantage"
        }
        TacticalRole::SustainedDps => {
            "Sustained-dps doctrine: anchor up and hold range; attrition favors you in long fights"
        }
        TacticalRole::Kiting => {
            "Kiting doctrine: keep transversal high and disengage before hostile tackle lands"
        }
        TacticalRole::Brawling => {
            "Brawl doctrine: commit decisively — half-committed brawls lose both the field and the fleet"
        }
        TacticalRole::DronePlatform => {
            "Drone doctrine: pre-assign drone focus and recall early against smartbomb battleships"
        }
        TacticalRole::SkirmishHarass => {
            "Skirmish doctrine: strike isolated targets and never take a fair fight"
        }
    }
}

fn dedup_preserving_order(recs: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    recs.retain(|r| seen.insert(r.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confident() -> DoctrineClassification {
        DoctrineClassification::Confident {
            doctrine_key: "armor_zealots".to_string(),
            doctrine_name: "Armor Zealots".to_string(),
            confidence: 0.95,
            quality: crate::types::MatchQuality::Excellent,
        }
    }

    fn balanced() -> RoleDistribution {
        RoleDistribution {
            dps: 0.7,
            logistics: 0.2,
            ewar: 0.1,
            tackle: 0.1,
            command: 0.05,
            support: 0.1,
        }
    }

    #[test]
    fn well_balanced_doctrine_fleet_gets_only_the_tactical_tip() {
        let recs = build_recommendations(&balanced(), &confident(), Some(TacticalRole::Kiting));
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("Kiting"));
    }

    #[test]
    fn low_logistics_advisory_comes_first() {
        let balance = RoleDistribution {
            logistics: 0.02,
            ..balanced()
        };
        let recs = build_recommendations(&balance, &confident(), None);
        assert!(recs[0].contains("Logistics share"));
        assert!(recs[0].contains("above"));
    }

    #[test]
    fn excess_logistics_advisory() {
        let balance = RoleDistribution {
            logistics: 0.5,
            ..balanced()
        };
        let recs = build_recommendations(&balance, &confident(), None);
        assert!(recs[0].contains("displaces damage"));
    }

    #[test]
    fn missing_roles_each_trigger_an_advisory_in_order() {
        let balance = RoleDistribution {
            dps: 0.5,
            logistics: 0.2,
            ewar: 0.0,
            tackle: 0.0,
            command: 0.0,
            support: 0.0,
        };
        let recs = build_recommendations(&balance, &confident(), None);
        assert!(recs[0].contains("ewar"));
        assert!(recs[1].contains("Tackle"));
        assert!(recs[2].contains("command bursts"));
    }

    #[test]
    fn unknown_doctrine_gets_standardize_advice() {
        let recs =
            build_recommendations(&balanced(), &DoctrineClassification::Unknown, None);
        assert!(recs.iter().any(|r| r.contains("standardize")));
    }

    #[test]
    fn output_is_capped() {
        let balance = RoleDistribution::default(); // everything missing
        let recs = build_recommendations(
            &balance,
            &DoctrineClassification::Unknown,
            Some(TacticalRole::Brawling),
        );
        assert!(recs.len() <= config::get().recommendations.max_items);
        // Deterministic: same input, same list
        let again = build_recommendations(
            &balance,
            &DoctrineClassification::Unknown,
            Some(TacticalRole::Brawling),
        );
        assert_eq!(recs, again);
    }
}
