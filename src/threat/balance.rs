//! Fleet-wide role balance aggregation

use tracing::debug;

use crate::providers::ShipRoleRepository;
use crate::types::{RoleDistribution, ShipRole};

/// Average each member's role vector across the fleet.
///
/// Hulls missing from the repository fall back to the generic default
/// (`dps: 0.5, support: 0.5`) — absent role data is a documented fallback,
/// never an error. Each component is the average fraction of ships
/// exhibiting that role; the vector is deliberately NOT normalized to sum
/// to 1 (every ship carries its own 0..1 budget per role).
///
/// An empty fleet yields the zero vector.
pub fn aggregate_role_balance(
    fleet: &[u32],
    repository: &dyn ShipRoleRepository,
) -> RoleDistribution {
    if fleet.is_empty() {
        return RoleDistribution::default();
    }

    let mut sums = [0.0f64; 6];
    let mut defaulted = 0usize;
    for &ship_type_id in fleet {
        let dist = match repository.role_record(ship_type_id) {
            Some(record) => record.role_distribution,
            None => {
                defaulted += 1;
                RoleDistribution::generic_default()
            }
        };
        for (i, role) in ShipRole::ALL.into_iter().enumerate() {
            sums[i] += dist.get(role);
        }
    }
    if defaulted > 0 {
        debug!(defaulted, fleet = fleet.len(), "hulls without role data used generic default");
    }

    let n = fleet.len() as f64;
    RoleDistribution {
        tackle: sums[0] / n,
        logistics: sums[1] / n,
        ewar: sums[2] / n,
        dps: sums[3] / n,
        command: sums[4] / n,
        support: sums[5] / n,
    }
}
