//! Declarative keyword tables for module role classification
//!
//! Each table entry is (category, keywords, role, increment): a module whose
//! lower-cased name contains any keyword adds `increment` to `role`,
//! saturating at 1.0. A module may match several categories (e.g. a
//! "warp scrambler" is tackle only, but a "remote shield booster" matched in
//! a high slot is logistics). Unmatched modules contribute nothing.

use crate::types::ShipRole;

use super::slots::SlotBank;

/// One keyword category: any keyword hit adds `increment` to `role`.
pub struct KeywordCategory {
    /// Category label, used in trace logging only
    pub category: &'static str,
    pub keywords: &'static [&'static str],
    pub role: ShipRole,
    pub increment: f64,
}

/// High slot categories: turrets/launchers, remote repair, neuts, command bursts.
pub const HIGH_SLOT_CATEGORIES: &[KeywordCategory] = &[
    KeywordCategory {
        category: "weapon",
        keywords: &[
            "autocannon",
            "artillery",
            "howitzer",
            "blaster",
            "railgun",
            "pulse laser",
            "beam laser",
            "launcher",
            "missile",
            "torpedo",
            "vorton",
        ],
        role: ShipRole::Dps,
        increment: 0.3,
    },
    KeywordCategory {
        category: "remote_repair",
        keywords: &[
            "remote shield booster",
            "remote armor repairer",
            "remote hull repairer",
            "remote capacitor transmitter",
        ],
        role: ShipRole::Logistics,
        increment: 0.4,
    },
    KeywordCategory {
        category: "energy_neutralizer",
        keywords: &["energy neutralizer", "energy nosferatu"],
        role: ShipRole::Ewar,
        increment: 0.25,
    },
    KeywordCategory {
        category: "command_burst",
        keywords: &["command burst", "warfare link"],
        role: ShipRole::Command,
        increment: 0.5,
    },
];

/// Mid slot categories: tackle, ewar, shield logi, local tank, utility.
pub const MID_SLOT_CATEGORIES: &[KeywordCategory] = &[
    KeywordCategory {
        category: "tackle",
        keywords: &[
            "warp scrambler",
            "warp disruptor",
            "stasis webifier",
            "stasis grappler",
            "interdiction sphere launcher",
        ],
        role: ShipRole::Tackle,
        increment: 0.4,
    },
    KeywordCategory {
        category: "ewar",
        keywords: &[
            "ecm",
            "multispectral jammer",
            "sensor dampener",
            "tracking disruptor",
            "guidance disruptor",
            "target painter",
        ],
        role: ShipRole::Ewar,
        increment: 0.4,
    },
    KeywordCategory {
        category: "shield_logi",
        keywords: &["shield transporter", "ancillary remote shield"],
        role: ShipRole::Logistics,
        increment: 0.4,
    },
    KeywordCategory {
        category: "tank",
        keywords: &["shield extender", "shield hardener", "shield booster", "invulnerability"],
        role: ShipRole::Support,
        increment: 0.15,
    },
    KeywordCategory {
        category: "utility",
        keywords: &["capacitor booster", "sensor booster", "tracking computer"],
        role: ShipRole::Support,
        increment: 0.1,
    },
];

/// Low slot categories: damage mods, armor tank, armor logi rigs live in rigs.
pub const LOW_SLOT_CATEGORIES: &[KeywordCategory] = &[
    KeywordCategory {
        category: "damage",
        keywords: &[
            "gyrostabilizer",
            "heat sink",
            "magnetic field stabilizer",
            "ballistic control",
            "drone damage amplifier",
            "entropic radiation sink",
        ],
        role: ShipRole::Dps,
        increment: 0.2,
    },
    KeywordCategory {
        category: "tank",
        keywords: &[
            "armor plate",
            "steel plates",
            "armor hardener",
            "armor repairer",
            "damage control",
            "adaptive nano plating",
            "energized adaptive",
        ],
        role: ShipRole::Support,
        increment: 0.15,
    },
    KeywordCategory {
        category: "armor_logi",
        keywords: &["power diagnostic", "capacitor power relay"],
        role: ShipRole::Logistics,
        increment: 0.1,
    },
];

/// Rig categories.
pub const RIG_CATEGORIES: &[KeywordCategory] = &[
    KeywordCategory {
        category: "dps_rig",
        keywords: &[
            "burst aerator",
            "collision accelerator",
            "energy locus",
            "bay loading accelerator",
            "projectile ambit",
            "hybrid locus",
        ],
        role: ShipRole::Dps,
        increment: 0.15,
    },
    KeywordCategory {
        category: "tank_rig",
        keywords: &["trimark armor", "core defense", "anti-em", "anti-thermal", "anti-kinetic", "anti-explosive"],
        role: ShipRole::Support,
        increment: 0.1,
    },
    KeywordCategory {
        category: "logistics_rig",
        keywords: &["remote repair augmentor", "capacitor control circuit"],
        role: ShipRole::Logistics,
        increment: 0.1,
    },
];

/// Keyword table for a slot bank.
pub fn categories_for(bank: SlotBank) -> &'static [KeywordCategory] {
    match bank {
        SlotBank::High => HIGH_SLOT_CATEGORIES,
        SlotBank::Mid => MID_SLOT_CATEGORIES,
        SlotBank::Low => LOW_SLOT_CATEGORIES,
        SlotBank::Rig => RIG_CATEGORIES,
    }
}
