//! Normalized killmail records as consumed from the external ingestion pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single killmail, normalized at the ingestion boundary.
///
/// The upstream feed delivers payloads under several historical key shapes;
/// the ingestion pipeline flattens them into this DTO before the engine ever
/// sees them, so nothing downstream branches on input shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KillmailEvent {
    /// Unique killmail id assigned by the upstream feed
    pub killmail_id: u64,
    /// Time the kill occurred
    pub time: DateTime<Utc>,
    /// Solar system where the kill occurred
    pub solar_system_id: u32,
    /// Character id of the victim (0 when the victim is a structure/NPC)
    pub victim_character_id: u64,
    /// Hull type id of the destroyed ship
    pub victim_ship_type_id: u32,
    /// Number of attackers on the killmail
    pub attacker_count: u32,
    /// Total ISK value destroyed (hull + fittings + cargo)
    pub total_value: f64,
    /// Character ids of everyone on the killmail (attackers; the victim is
    /// tracked separately via `victim_character_id`)
    #[serde(default)]
    pub participant_ids: Vec<u64>,
}

impl KillmailEvent {
    /// Whether `subject` appears among the attackers (a "kill" for them).
    pub fn is_kill_for(&self, subject_id: u64) -> bool {
        self.participant_ids.contains(&subject_id)
    }

    /// Whether `subject` is the victim (a "loss" for them).
    pub fn is_loss_for(&self, subject_id: u64) -> bool {
        self.victim_character_id == subject_id
    }
}

/// A fitted module on a victim's ship, as reported on the killmail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedModule {
    /// Fitting slot flag (high 27-34, mid 19-26, low 11-18, rig 92-94)
    pub slot_flag: u32,
    /// Module type id
    pub type_id: u32,
    /// Module type name, e.g. "720mm Howitzer Artillery II"
    pub type_name: String,
}

/// Subject of a battle query: whose engagement history are we looking at.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum Subject {
    Character(u64),
    Corporation(u64),
    SolarSystem(u32),
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Subject::Character(id) => write!(f, "character {id}"),
            Subject::Corporation(id) => write!(f, "corporation {id}"),
            Subject::SolarSystem(id) => write!(f, "system {id}"),
        }
    }
}
