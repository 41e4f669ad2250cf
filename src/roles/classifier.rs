//! Per-module role scoring, ship-class adjustments, and derived outputs

use tracing::debug;

use crate::config;
use crate::types::{FittedModule, RoleDistribution, ShipClass, ShipRole, ShipRoleRecord};

use super::patterns::categories_for;
use super::slots::SlotBank;

/// Complete classification output for one ship's fit.
#[derive(Debug, Clone)]
pub struct ModuleClassification {
    /// Confidence over the six roles, every component in [0, 1]
    pub role_confidence: RoleDistribution,
    /// Arg-max role (canonical-order tie-break)
    pub primary_role: ShipRole,
    /// Roles above the secondary threshold, descending, primary excluded
    pub secondary_roles: Vec<ShipRole>,
    /// How well the fit matches the hull: class/primary-role multiplier
    /// times the primary role's confidence, clamped to [0, 1]
    pub ship_appropriateness: f64,
}

impl ModuleClassification {
    /// Convert an ingestion-time classification into the repository record
    /// shape consumed by fleet scoring.
    pub fn into_record(self, ship_type_id: u32) -> ShipRoleRecord {
        ShipRoleRecord {
            ship_type_id,
            primary_role: self.primary_role,
            role_distribution: self.role_confidence,
            confidence_score: self.ship_appropriateness,
        }
    }
}

/// Classify a ship's fitted modules into role confidences.
///
/// Passes, in order:
/// 1. Partition modules into slot banks by flag; non-fitting flags ignored.
/// 2. Keyword matching per bank: each hit adds the category's increment to
///    its role, saturating at 1.0. Unmatched modules contribute nothing.
/// 3. Additive ship-class adjustment (e.g. dedicated logistics hulls +0.5
///    logistics), then a final clamp of every component into [0, 1].
///
/// An empty module list yields an all-zero vector plus whatever the class
/// adjustment contributes.
pub fn classify_modules(modules: &[FittedModule], ship_class: ShipClass) -> ModuleClassification {
    let mut confidence = RoleDistribution::default();

    for module in modules {
        let Some(bank) = SlotBank::from_flag(module.slot_flag) else {
            continue;
        };
        let name = module.type_name.to_lowercase();
        for cat in categories_for(bank) {
            if cat.keywords.iter().any(|kw| name.contains(kw)) {
                confidence.add_capped(cat.role, cat.increment);
                debug!(
                    module = %module.type_name,
                    category = cat.category,
                    role = %cat.role,
                    "module keyword match"
                );
            }
        }
    }

    apply_class_adjustment(&mut confidence, ship_class);
    confidence.clamp_all();

    let primary_role = confidence.primary_role();
    let secondary_roles =
        confidence.secondary_roles(primary_role, config::get().roles.secondary_role_threshold);
    let ship_appropriateness =
        (appropriateness_multiplier(ship_class, primary_role) * confidence.get(primary_role))
            .clamp(0.0, 1.0);

    ModuleClassification {
        role_confidence: confidence,
        primary_role,
        secondary_roles,
        ship_appropriateness,
    }
}

/// Additive role bonuses for hull classes whose purpose is unambiguous.
fn apply_class_adjustment(confidence: &mut RoleDistribution, ship_class: ShipClass) {
    match ship_class {
        ShipClass::Logistics => confidence.add_capped(ShipRole::Logistics, 0.5),
        ShipClass::CommandShip => confidence.add_capped(ShipRole::Command, 0.4),
        ShipClass::Interceptor => confidence.add_capped(ShipRole::Tackle, 0.4),
        ShipClass::Recon => confidence.add_capped(ShipRole::Ewar, 0.3),
        ShipClass::Battleship => confidence.add_capped(ShipRole::Dps, 0.15),
        ShipClass::Frigate
        | ShipClass::Destroyer
        | ShipClass::Cruiser
        | ShipClass::Battlecruiser
        | ShipClass::Unknown => {}
    }
}

/// How natural a primary role is for a hull class.
///
/// Values above 1.0 reward fits matching the hull's purpose; values below
/// 1.0 discount off-purpose fits (e.g. a battleship flown as tackle).
fn appropriateness_multiplier(ship_class: ShipClass, primary_role: ShipRole) -> f64 {
    match (ship_class, primary_role) {
        (ShipClass::Logistics, ShipRole::Logistics) => 1.2,
        (ShipClass::CommandShip, ShipRole::Command) => 1.2,
        (ShipClass::Interceptor, ShipRole::Tackle) => 1.2,
        (ShipClass::Recon, ShipRole::Ewar) => 1.2,
        (ShipClass::Battleship, ShipRole::Dps) => 1.1,
        (ShipClass::Battlecruiser, ShipRole::Dps | ShipRole::Command) => 1.05,
        (ShipClass::Frigate | ShipClass::Destroyer, ShipRole::Tackle | ShipRole::Dps) => 1.0,
        (ShipClass::Cruiser, _) => 1.0,
        (ShipClass::Battleship, ShipRole::Tackle) => 0.5,
        (ShipClass::Logistics, ShipRole::Dps) => 0.6,
        (ShipClass::Unknown, _) => 0.8,
        _ => 0.9,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(slot_flag: u32, type_name: &str) -> FittedModule {
        FittedModule {
            slot_flag,
            type_id: 0,
            type_name: type_name.to_string(),
        }
    }

    #[test]
    fn empty_module_list_yields_zero_vector() {
        let result = classify_modules(&[], ShipClass::Unknown);
        for role in ShipRole::ALL {
            assert!(result.role_confidence.get(role).abs() < f64::EPSILON);
        }
        // Deterministic tie-break: first role in canonical order
        assert_eq!(result.primary_role, ShipRole::Tackle);
        assert!(result.secondary_roles.is_empty());
        assert!(result.ship_appropriateness.abs() < f64::EPSILON);
    }

    #[test]
    fn artillery_fit_classifies_as_dps() {
        let modules = vec![
            module(27, "720mm Howitzer Artillery II"),
            module(28, "720mm Howitzer Artillery II"),
            module(29, "720mm Howitzer Artillery II"),
            module(11, "Gyrostabilizer II"),
        ];
        let result = classify_modules(&modules, ShipClass::Cruiser);
        assert_eq!(result.primary_role, ShipRole::Dps);
        assert!(result.role_confidence.dps > 0.8);
    }

    #[test]
    fn logistics_fit_on_logistics_hull() {
        let modules = vec![
            module(27, "Large Remote Shield Booster II"),
            module(28, "Large Remote Shield Booster II"),
        ];
        let result = classify_modules(&modules, ShipClass::Logistics);
        assert_eq!(result.primary_role, ShipRole::Logistics);
        // 0.4 + 0.4 + 0.5 class bonus, clamped
        assert!((result.role_confidence.logistics - 1.0).abs() < f64::EPSILON);
        // 1.2 multiplier * 1.0 confidence, clamped to 1.0
        assert!((result.ship_appropriateness - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tackle_ewar_mix_produces_secondary_roles() {
        let modules = vec![
            module(19, "Warp Scrambler II"),
            module(20, "Stasis Webifier II"),
            module(21, "Multispectral Jammer II"),
        ];
        let result = classify_modules(&modules, ShipClass::Frigate);
        assert_eq!(result.primary_role, ShipRole::Tackle);
        assert_eq!(result.secondary_roles, vec![ShipRole::Ewar]);
    }

    #[test]
    fn confidence_never_exceeds_one() {
        // Eight weapons would add 2.4 uncapped
        let modules: Vec<FittedModule> = (27..=34)
            .map(|flag| module(flag, "425mm AutoCannon II"))
            .collect();
        let result = classify_modules(&modules, ShipClass::Battleship);
        for role in ShipRole::ALL {
            let c = result.role_confidence.get(role);
            assert!((0.0..=1.0).contains(&c), "role {role} out of range: {c}");
        }
    }

    #[test]
    fn unmatched_modules_contribute_nothing() {
        let modules = vec![
            module(27, "Improved Cloaking Device II"),
            module(5, "Warp Scrambler II"), // cargo flag, ignored
        ];
        let result = classify_modules(&modules, ShipClass::Unknown);
        for role in ShipRole::ALL {
            assert!(result.role_confidence.get(role).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn classification_converts_to_repository_record() {
        let modules = vec![
            module(27, "Large Remote Shield Booster II"),
            module(28, "Large Remote Shield Booster II"),
        ];
        let record = classify_modules(&modules, ShipClass::Logistics).into_record(11978);
        assert_eq!(record.ship_type_id, 11978);
        assert_eq!(record.primary_role, ShipRole::Logistics);
        assert!((record.role_distribution.logistics - 1.0).abs() < f64::EPSILON);
        assert!(record.confidence_score > 0.9);
    }

    #[test]
    fn classification_is_idempotent() {
        let modules = vec![
            module(27, "Heavy Missile Launcher II"),
            module(19, "Warp Disruptor II"),
        ];
        let a = classify_modules(&modules, ShipClass::Cruiser);
        let b = classify_modules(&modules, ShipClass::Cruiser);
        assert_eq!(a.role_confidence, b.role_confidence);
        assert_eq!(a.primary_role, b.primary_role);
        assert_eq!(a.secondary_roles, b.secondary_roles);
    }
}
