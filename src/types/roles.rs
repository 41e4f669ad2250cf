//! Tactical role types: ShipRole, RoleDistribution, ShipRoleRecord, ShipClass

use serde::{Deserialize, Serialize};

/// The six tactical roles a ship can fill in a fleet.
///
/// `ALL` is the canonical order; arg-max ties resolve to the earliest entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ShipRole {
    Tackle,
    Logistics,
    Ewar,
    Dps,
    Command,
    Support,
}

impl ShipRole {
    /// Canonical role order, used for deterministic iteration and tie-breaks.
    pub const ALL: [ShipRole; 6] = [
        ShipRole::Tackle,
        ShipRole::Logistics,
        ShipRole::Ewar,
        ShipRole::Dps,
        ShipRole::Command,
        ShipRole::Support,
    ];
}

impl std::fmt::Display for ShipRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShipRole::Tackle => write!(f, "tackle"),
            ShipRole::Logistics => write!(f, "logistics"),
            ShipRole::Ewar => write!(f, "ewar"),
            ShipRole::Dps => write!(f, "dps"),
            ShipRole::Command => write!(f, "command"),
            ShipRole::Support => write!(f, "support"),
        }
    }
}

/// Confidence vector over the six tactical roles, every component in [0, 1].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct RoleDistribution {
    pub tackle: f64,
    pub logistics: f64,
    pub ewar: f64,
    pub dps: f64,
    pub command: f64,
    pub support: f64,
}

impl RoleDistribution {
    /// Read a single role's confidence.
    pub fn get(&self, role: ShipRole) -> f64 {
        match role {
            ShipRole::Tackle => self.tackle,
            ShipRole::Logistics => self.logistics,
            ShipRole::Ewar => self.ewar,
            ShipRole::Dps => self.dps,
            ShipRole::Command => self.command,
            ShipRole::Support => self.support,
        }
    }

    fn get_mut(&mut self, role: ShipRole) -> &mut f64 {
        match role {
            ShipRole::Tackle => &mut self.tackle,
            ShipRole::Logistics => &mut self.logistics,
            ShipRole::Ewar => &mut self.ewar,
            ShipRole::Dps => &mut self.dps,
            ShipRole::Command => &mut self.command,
            ShipRole::Support => &mut self.support,
        }
    }

    /// Add `increment` to `role`, saturating at 1.0.
    pub fn add_capped(&mut self, role: ShipRole, increment: f64) {
        let slot = self.get_mut(role);
        *slot = (*slot + increment).min(1.0);
    }

    /// Clamp every component into [0, 1]. Final normalization pass after
    /// ship-class adjustments.
    pub fn clamp_all(&mut self) {
        for role in ShipRole::ALL {
            let slot = self.get_mut(role);
            *slot = slot.clamp(0.0, 1.0);
        }
    }

    /// Arg-max role; ties resolve to the earliest role in canonical order.
    pub fn primary_role(&self) -> ShipRole {
        let mut best = ShipRole::ALL[0];
        let mut best_score = self.get(best);
        for role in ShipRole::ALL {
            let score = self.get(role);
            if score > best_score {
                best = role;
                best_score = score;
            }
        }
        best
    }

    /// Roles with confidence >= `threshold`, excluding `primary`, sorted
    /// descending by confidence (ties keep canonical order).
    pub fn secondary_roles(&self, primary: ShipRole, threshold: f64) -> Vec<ShipRole> {
        let mut roles: Vec<ShipRole> = ShipRole::ALL
            .into_iter()
            .filter(|r| *r != primary && self.get(*r) >= threshold)
            .collect();
        roles.sort_by(|a, b| {
            self.get(*b)
                .partial_cmp(&self.get(*a))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        roles
    }

    /// The documented fallback when no role data exists for a hull.
    pub fn generic_default() -> Self {
        Self {
            dps: 0.5,
            support: 0.5,
            ..Self::default()
        }
    }
}

/// Precomputed role data for a hull type, supplied by an external repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipRoleRecord {
    pub ship_type_id: u32,
    pub primary_role: ShipRole,
    pub role_distribution: RoleDistribution,
    /// Confidence in the role assignment itself, [0, 1]
    pub confidence_score: f64,
}

impl ShipRoleRecord {
    /// Fallback record for hulls the repository has never seen.
    pub fn generic(ship_type_id: u32) -> Self {
        Self {
            ship_type_id,
            primary_role: ShipRole::Dps,
            role_distribution: RoleDistribution::generic_default(),
            confidence_score: 0.3,
        }
    }
}

/// Broad hull classification used for role-confidence adjustments.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShipClass {
    Frigate,
    Destroyer,
    Cruiser,
    Battlecruiser,
    Battleship,
    /// Dedicated logistics hulls (Guardian, Basilisk, Scimitar, Oneiros, ...)
    Logistics,
    /// Command ships (Damnation, Vulture, Sleipnir, Claymore, ...)
    CommandShip,
    /// Fast tackle interceptors
    Interceptor,
    /// Combat/force recon ewar platforms
    Recon,
    #[default]
    Unknown,
}

impl std::fmt::Display for ShipClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShipClass::Frigate => write!(f, "frigate"),
            ShipClass::Destroyer => write!(f, "destroyer"),
            ShipClass::Cruiser => write!(f, "cruiser"),
            ShipClass::Battlecruiser => write!(f, "battlecruiser"),
            ShipClass::Battleship => write!(f, "battleship"),
            ShipClass::Logistics => write!(f, "logistics"),
            ShipClass::CommandShip => write!(f, "command_ship"),
            ShipClass::Interceptor => write!(f, "interceptor"),
            ShipClass::Recon => write!(f, "recon"),
            ShipClass::Unknown => write!(f, "unknown"),
        }
    }
}
