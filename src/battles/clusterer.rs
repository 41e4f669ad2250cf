//! Time-bucket battle clustering
//!
//! Killmails are keyed by `(solar_system_id, time_bucket)` where the bucket
//! is the kill time floored to a fixed width (30 minutes by default). Each
//! key's group becomes one cluster.
//!
//! Adjacent buckets are NOT merged: a battle straddling a bucket boundary
//! reports as two clusters. This is a deliberate approximation — the
//! downstream classification thresholds were tuned against bucketed counts,
//! and a sliding-window merge would measurably change battle counts for
//! consumers. Widen `clustering.bucket_minutes` in the config instead.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, TimeZone, Utc};
use tracing::debug;

use crate::config;
use crate::types::{BattleCluster, KillmailEvent};

use super::classifier::classify_cluster;

/// Groups killmail events into classified battle clusters.
///
/// Stateless; clusters are recomputed from the event set on every call.
pub struct BattleClusterer;

impl BattleClusterer {
    /// Cluster and classify a set of killmail events.
    ///
    /// Events below the multi-pilot attacker floor are dropped (the upstream
    /// query is expected to pre-filter, this is a guard). Returns clusters
    /// ordered by time bucket, most recent first; clusters sharing a bucket
    /// keep their grouping order (stable sort).
    pub fn cluster(events: &[KillmailEvent]) -> Vec<BattleCluster> {
        let cfg = config::get();
        let bucket_secs = i64::from(cfg.clustering.bucket_minutes) * 60;
        let min_attackers = cfg.clustering.min_attackers;

        let mut groups: HashMap<(u32, i64), Vec<&KillmailEvent>> = HashMap::new();
        for event in events {
            if event.attacker_count < min_attackers {
                continue;
            }
            let bucket = event.time.timestamp().div_euclid(bucket_secs) * bucket_secs;
            groups
                .entry((event.solar_system_id, bucket))
                .or_default()
                .push(event);
        }

        let mut clusters: Vec<BattleCluster> = groups
            .into_iter()
            .filter_map(|((system_id, bucket), group)| {
                Self::build_cluster(system_id, bucket, &group)
            })
            .collect();

        clusters.sort_by(|a, b| b.time_bucket.cmp(&a.time_bucket));
        debug!(
            events = events.len(),
            clusters = clusters.len(),
            "clustered killmail events"
        );
        clusters
    }

    fn build_cluster(
        system_id: u32,
        bucket_epoch: i64,
        group: &[&KillmailEvent],
    ) -> Option<BattleCluster> {
        let time_bucket: DateTime<Utc> = Utc.timestamp_opt(bucket_epoch, 0).single()?;

        let killmail_count = group.len();
        let total_isk_destroyed: f64 = group.iter().map(|e| e.total_value).sum();

        // Distinct attacker + victim ids across the whole group
        let mut participants: HashSet<u64> = HashSet::new();
        for event in group {
            participants.extend(event.participant_ids.iter().copied());
            if event.victim_character_id != 0 {
                participants.insert(event.victim_character_id);
            }
        }
        let total_participants = participants.len();

        let (battle_type, intensity_level, duration_estimate) =
            classify_cluster(total_participants, total_isk_destroyed, killmail_count);

        Some(BattleCluster {
            id: format!("{system_id}-{bucket_epoch}"),
            system_id,
            time_bucket,
            killmail_count,
            total_isk_destroyed,
            total_participants,
            battle_type,
            intensity_level,
            duration_estimate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BattleType;
    use chrono::Duration;

    fn event(
        id: u64,
        system: u32,
        time: DateTime<Utc>,
        attackers: u32,
        value: f64,
        participants: &[u64],
        victim: u64,
    ) -> KillmailEvent {
        KillmailEvent {
            killmail_id: id,
            time,
            solar_system_id: system,
            victim_character_id: victim,
            victim_ship_type_id: 587,
            attacker_count: attackers,
            total_value: value,
            participant_ids: participants.to_vec(),
        }
    }

    fn t0() -> DateTime<Utc> {
        // Exactly on a 30-minute boundary
        Utc.timestamp_opt(1_700_000_000 / 1800 * 1800, 0).single().expect("valid ts")
    }

    #[test]
    fn same_system_same_bucket_forms_one_cluster() {
        let base = t0();
        let events = vec![
            event(1, 30002187, base, 10, 50e6, &[1, 2, 3], 100),
            event(2, 30002187, base + Duration::minutes(10), 10, 80e6, &[2, 3, 4], 101),
            event(3, 30002187, base + Duration::minutes(29), 10, 20e6, &[1, 4], 102),
        ];
        let clusters = BattleClusterer::cluster(&events);
        assert_eq!(clusters.len(), 1);
        let c = &clusters[0];
        assert_eq!(c.killmail_count, 3);
        assert!((c.total_isk_destroyed - 150e6).abs() < 1.0);
        // attackers {1,2,3,4} + victims {100,101,102}
        assert_eq!(c.total_participants, 7);
    }

    #[test]
    fn bucket_boundary_splits_battle_into_two_clusters() {
        let base = t0();
        let events = vec![
            event(1, 30002187, base + Duration::minutes(29), 10, 50e6, &[1, 2], 100),
            event(2, 30002187, base + Duration::minutes(31), 10, 50e6, &[1, 2], 101),
        ];
        let clusters = BattleClusterer::cluster(&events);
        // Accepted approximation: no adjacent-bucket merge
        assert_eq!(clusters.len(), 2);
    }

    #[test]
    fn different_systems_never_merge() {
        let base = t0();
        let events = vec![
            event(1, 30002187, base, 10, 50e6, &[1, 2], 100),
            event(2, 30000142, base, 10, 50e6, &[1, 2], 101),
        ];
        let clusters = BattleClusterer::cluster(&events);
        assert_eq!(clusters.len(), 2);
    }

    #[test]
    fn clusters_ordered_most_recent_first() {
        let base = t0();
        let events = vec![
            event(1, 30002187, base, 10, 50e6, &[1], 100),
            event(2, 30002187, base + Duration::hours(2), 10, 50e6, &[1], 101),
            event(3, 30002187, base + Duration::hours(1), 10, 50e6, &[1], 102),
        ];
        let clusters = BattleClusterer::cluster(&events);
        assert_eq!(clusters.len(), 3);
        assert!(clusters[0].time_bucket > clusters[1].time_bucket);
        assert!(clusters[1].time_bucket > clusters[2].time_bucket);
    }

    #[test]
    fn small_gang_events_are_filtered() {
        let base = t0();
        let events = vec![
            event(1, 30002187, base, 4, 50e6, &[1, 2], 100), // below floor
            event(2, 30002187, base, 5, 50e6, &[1, 2], 101), // at floor
        ];
        let clusters = BattleClusterer::cluster(&events);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].killmail_count, 1);
    }

    #[test]
    fn structure_victims_do_not_count_as_participants() {
        let base = t0();
        let events = vec![event(1, 30002187, base, 10, 2e9, &[1, 2, 3], 0)];
        let clusters = BattleClusterer::cluster(&events);
        assert_eq!(clusters[0].total_participants, 3);
        assert_eq!(clusters[0].battle_type, BattleType::HighValueFight);
    }
}
