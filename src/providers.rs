//! External collaborator seams: killmail feed and ship role repository
//!
//! The engine treats both as completed reads: timeouts and retries are the
//! collaborator's responsibility, and fetch failures propagate to the
//! caller unchanged.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::types::{KillmailEvent, ShipRoleRecord, Subject};

/// Source of killmail events for a subject within a lookback window.
///
/// Implementations are expected to pre-filter to multi-pilot engagements
/// (`attacker_count >= 5`); the clusterer re-applies the filter as a guard.
#[async_trait]
pub trait KillmailProvider: Send + Sync {
    /// Fetch the subject's killmails at or after `since`.
    async fn killmails(
        &self,
        subject: Subject,
        since: DateTime<Utc>,
    ) -> anyhow::Result<Vec<KillmailEvent>>;
}

/// Read-only lookup of precomputed role data per hull type.
///
/// Absent entries are a documented fallback (the generic dps/support
/// split), never an error.
pub trait ShipRoleRepository: Send + Sync {
    fn role_record(&self, ship_type_id: u32) -> Option<ShipRoleRecord>;
}

/// In-memory role repository, used by the CLI and tests.
#[derive(Debug, Default)]
pub struct StaticShipRoleRepository {
    records: HashMap<u32, ShipRoleRecord>,
}

impl StaticShipRoleRepository {
    pub fn new(records: Vec<ShipRoleRecord>) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.ship_type_id, r)).collect(),
        }
    }

    /// Load records from a JSON array file.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let records: Vec<ShipRoleRecord> = serde_json::from_str(&contents)?;
        info!(path = %path.display(), records = records.len(), "Loaded ship role records");
        Ok(Self::new(records))
    }
}

impl ShipRoleRepository for StaticShipRoleRepository {
    fn role_record(&self, ship_type_id: u32) -> Option<ShipRoleRecord> {
        self.records.get(&ship_type_id).cloned()
    }
}

/// Killmail provider backed by a JSON array file. Filters by subject and
/// window in memory; production deployments substitute a query-backed
/// implementation.
pub struct JsonKillmailProvider {
    events: Vec<KillmailEvent>,
}

impl JsonKillmailProvider {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let events: Vec<KillmailEvent> = serde_json::from_str(&contents)?;
        info!(path = %path.display(), events = events.len(), "Loaded killmail events");
        Ok(Self { events })
    }

    pub fn new(events: Vec<KillmailEvent>) -> Self {
        Self { events }
    }

    fn involves(event: &KillmailEvent, subject: Subject) -> bool {
        match subject {
            Subject::Character(id) => event.is_kill_for(id) || event.is_loss_for(id),
            // Corporation membership is not resolvable from the normalized
            // event alone; corp-scoped files are expected to be pre-filtered
            // by the exporter, so the window filter is all that applies.
            Subject::Corporation(_) => true,
            Subject::SolarSystem(id) => event.solar_system_id == id,
        }
    }
}

#[async_trait]
impl KillmailProvider for JsonKillmailProvider {
    async fn killmails(
        &self,
        subject: Subject,
        since: DateTime<Utc>,
    ) -> anyhow::Result<Vec<KillmailEvent>> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.time >= since && Self::involves(e, subject))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(id: u64, system: u32, epoch: i64, participants: &[u64], victim: u64) -> KillmailEvent {
        KillmailEvent {
            killmail_id: id,
            time: Utc.timestamp_opt(epoch, 0).single().expect("valid ts"),
            solar_system_id: system,
            victim_character_id: victim,
            victim_ship_type_id: 587,
            attacker_count: 8,
            total_value: 10e6,
            participant_ids: participants.to_vec(),
        }
    }

    #[tokio::test]
    async fn json_provider_filters_by_subject_and_window() {
        let provider = JsonKillmailProvider::new(vec![
            event(1, 30002187, 1_700_000_000, &[11, 12], 99),
            event(2, 30002187, 1_700_100_000, &[13], 11), // loss for 11
            event(3, 30000142, 1_600_000_000, &[11], 98), // too old
        ]);

        let since = Utc.timestamp_opt(1_650_000_000, 0).single().expect("valid ts");
        let kms = provider
            .killmails(Subject::Character(11), since)
            .await
            .expect("fetch");
        assert_eq!(kms.len(), 2);

        let system_kms = provider
            .killmails(Subject::SolarSystem(30000142), since)
            .await
            .expect("fetch");
        assert!(system_kms.is_empty());
    }

    #[test]
    fn static_repository_lookup() {
        let repo = StaticShipRoleRepository::new(vec![ShipRoleRecord::generic(12015)]);
        assert!(repo.role_record(12015).is_some());
        assert!(repo.role_record(99999).is_none());
    }
}
