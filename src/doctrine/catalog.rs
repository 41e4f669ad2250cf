//! Static doctrine catalog
//!
//! The catalog is immutable configuration data: an indexed, read-only list
//! of patterns built once at startup and shared (via `Arc`) across
//! concurrent calls. The compiled-in defaults cover widely flown nullsec
//! doctrines; operators can replace them with a TOML file.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::types::{
    DoctrinePattern, EngagementRange, LogisticsBand, TacticalRole, TankType,
};

/// Immutable, indexed doctrine catalog.
pub struct DoctrineCatalog {
    patterns: Vec<DoctrinePattern>,
    by_key: HashMap<String, usize>,
}

impl DoctrineCatalog {
    /// Build a catalog from a pattern list. Later duplicates of a key win
    /// the index, matching TOML override semantics.
    pub fn new(patterns: Vec<DoctrinePattern>) -> Self {
        let by_key = patterns
            .iter()
            .enumerate()
            .map(|(i, p)| (p.key.clone(), i))
            .collect();
        Self { patterns, by_key }
    }

    /// The compiled-in default catalog.
    pub fn builtin() -> Self {
        info!(doctrines = builtin_patterns().len(), "Built default doctrine catalog");
        Self::new(builtin_patterns())
    }

    /// Load a catalog from a TOML file (`[[doctrine]]` array of tables).
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        #[derive(Deserialize)]
        struct CatalogFile {
            doctrine: Vec<DoctrinePattern>,
        }

        let contents = std::fs::read_to_string(path)?;
        let file: CatalogFile = toml::from_str(&contents)?;
        info!(path = %path.display(), doctrines = file.doctrine.len(), "Loaded doctrine catalog");
        Ok(Self::new(file.doctrine))
    }

    /// All patterns, in catalog order.
    pub fn patterns(&self) -> &[DoctrinePattern] {
        &self.patterns
    }

    /// Look up a pattern by its stable key.
    pub fn by_key(&self, key: &str) -> Option<&DoctrinePattern> {
        self.by_key.get(key).map(|&i| &self.patterns[i])
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Hull type ids used by the builtin catalog.
///
/// Catalog data, not logic: operators can swap these out via TOML without
/// touching code.
pub mod hulls {
    // HACs / mainline cruisers
    pub const MUNINN: u32 = 12015;
    pub const ZEALOT: u32 = 12003;
    pub const ISHTAR: u32 = 12005;
    pub const EAGLE: u32 = 12011;
    pub const CERBERUS: u32 = 11993;
    // Battlecruisers / battleships
    pub const FEROX: u32 = 16227;
    pub const HURRICANE: u32 = 24702;
    pub const MACHARIEL: u32 = 17738;
    // Logistics
    pub const GUARDIAN: u32 = 11987;
    pub const BASILISK: u32 = 11985;
    pub const SCIMITAR: u32 = 11978;
    pub const ONEIROS: u32 = 11989;
    // Support
    pub const SABRE: u32 = 22456;
    pub const HUGINN: u32 = 11961;
    pub const LACHESIS: u32 = 11971;
    pub const DAMNATION: u32 = 22474;
    pub const VULTURE: u32 = 22446;
    pub const SLEIPNIR: u32 = 22444;
    pub const STILETTO: u32 = 11198;
    pub const MALEDICTION: u32 = 11186;
}

fn builtin_patterns() -> Vec<DoctrinePattern> {
    use hulls::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    vec![
        DoctrinePattern {
            key: "muninn_artillery".to_string(),
            name: "Artillery Muninns".to_string(),
            primary_ship_ids: vec![MUNINN],
            support_ship_ids: vec![SCIMITAR, SABRE, HUGINN, STILETTO],
            tank_type: TankType::Shield,
            engagement_range: EngagementRange::Long,
            min_fleet_size: 15,
            logistics_ratio: LogisticsBand { min: 0.10, max: 0.25 },
            tactical_role: TacticalRole::AlphaStrike,
            strengths: strings(&["volley damage", "mobility", "range control"]),
            weaknesses: strings(&["sustained brawls", "ecm pressure"]),
        },
        DoctrinePattern {
            key: "armor_zealots".to_string(),
            name: "Armor Zealots".to_string(),
            primary_ship_ids: vec![ZEALOT],
            support_ship_ids: vec![GUARDIAN, DAMNATION, MALEDICTION],
            tank_type: TankType::Armor,
            engagement_range: EngagementRange::Medium,
            min_fleet_size: 10,
            logistics_ratio: LogisticsBand { min: 0.15, max: 0.30 },
            tactical_role: TacticalRole::Kiting,
            strengths: strings(&["laser alpha", "strong resists", "speed"]),
            weaknesses: strings(&["capacitor pressure", "kinetic damage"]),
        },
        DoctrinePattern {
            key: "ferox_rail".to_string(),
            name: "Railgun Feroxes".to_string(),
            primary_ship_ids: vec![FEROX],
            support_ship_ids: vec![BASILISK, SABRE, LACHESIS],
            tank_type: TankType::Shield,
            engagement_range: EngagementRange::Long,
            min_fleet_size: 20,
            logistics_ratio: LogisticsBand { min: 0.10, max: 0.20 },
            tactical_role: TacticalRole::SustainedDps,
            strengths: strings(&["cheap", "good projection", "easy to fly"]),
            weaknesses: strings(&["slow", "weak once tackled"]),
        },
        DoctrinePattern {
            key: "machariel_alpha".to_string(),
            name: "Alpha Machariels".to_string(),
            primary_ship_ids: vec![MACHARIEL],
            support_ship_ids: vec![SCIMITAR, HUGINN, SABRE],
            tank_type: TankType::Shield,
            engagement_range: EngagementRange::Long,
            min_fleet_size: 15,
            logistics_ratio: LogisticsBand { min: 0.10, max: 0.25 },
            tactical_role: TacticalRole::AlphaStrike,
            strengths: strings(&["battleship alpha", "battlecruiser speed"]),
            weaknesses: strings(&["expensive", "bomber bait"]),
        },
        DoctrinePattern {
            key: "eagle_rail".to_string(),
            name: "Railgun Eagles".to_string(),
            primary_ship_ids: vec![EAGLE],
            support_ship_ids: vec![BASILISK, VULTURE, SABRE],
            tank_type: TankType::Shield,
            engagement_range: EngagementRange::Extreme,
            min_fleet_size: 20,
            logistics_ratio: LogisticsBand { min: 0.12, max: 0.25 },
            tactical_role: TacticalRole::SustainedDps,
            strengths: strings(&["extreme range", "kinetic lock", "tanky"]),
            weaknesses: strings(&["low dps up close", "slow align"]),
        },
        DoctrinePattern {
            key: "ishtar_sentry".to_string(),
            name: "Sentry Ishtars".to_string(),
            primary_ship_ids: vec![ISHTAR],
            support_ship_ids: vec![GUARDIAN, ONEIROS, LACHESIS],
            tank_type: TankType::Armor,
            engagement_range: EngagementRange::Medium,
            min_fleet_size: 10,
            logistics_ratio: LogisticsBand { min: 0.15, max: 0.35 },
            tactical_role: TacticalRole::DronePlatform,
            strengths: strings(&["drone projection", "selectable damage"]),
            weaknesses: strings(&["drone attrition", "smartbomb battleships"]),
        },
        DoctrinePattern {
            key: "cerb_missiles".to_string(),
            name: "Missile Cerberuses".to_string(),
            primary_ship_ids: vec![CERBERUS],
            support_ship_ids: vec![SCIMITAR, BASILISK, STILETTO],
            tank_type: TankType::Shield,
            engagement_range: EngagementRange::Extreme,
            min_fleet_size: 10,
            logistics_ratio: LogisticsBand { min: 0.10, max: 0.30 },
            tactical_role: TacticalRole::Kiting,
            strengths: strings(&["range", "applies at all speeds"]),
            weaknesses: strings(&["delayed damage", "defender pressure"]),
        },
        DoctrinePattern {
            key: "sleipnir_brawl".to_string(),
            name: "Brawling Sleipnirs".to_string(),
            primary_ship_ids: vec![SLEIPNIR, HURRICANE],
            support_ship_ids: vec![SCIMITAR, HUGINN, SABRE],
            tank_type: TankType::Shield,
            engagement_range: EngagementRange::Brawl,
            min_fleet_size: 5,
            logistics_ratio: LogisticsBand { min: 0.10, max: 0.30 },
            tactical_role: TacticalRole::Brawling,
            strengths: strings(&["high dps", "strong links", "hard to break"]),
            weaknesses: strings(&["must commit", "kited easily"]),
        },
    ]
}
