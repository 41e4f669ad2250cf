//! Top-level orchestration: fleet composition analysis and battle reports
//!
//! `FleetAnalyzer` wires doctrine matching, role balance, threat scoring and
//! recommendations into one composition report per fleet; `BattleReporter`
//! fetches a subject's killmails and runs the clustering pipeline. Both are
//! pure over their inputs — the only async boundary is the external fetch.

mod error;

pub use error::AnalysisError;

use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::battles::BattleClusterer;
use crate::config;
use crate::doctrine::{DoctrineCatalog, DoctrineMatcher};
use crate::providers::{KillmailProvider, ShipRoleRepository};
use crate::threat::{aggregate_role_balance, build_recommendations, score_threat};
use crate::types::{
    BattleCluster, FleetCompositionResult, Subject, TacticalAssessment, ThreatLevel,
};

/// Scores fleet compositions against the doctrine catalog and role data.
///
/// Cheap to clone (shared immutable catalog and repository); safe to use
/// from any number of tasks concurrently.
#[derive(Clone)]
pub struct FleetAnalyzer {
    catalog: Arc<DoctrineCatalog>,
    roles: Arc<dyn ShipRoleRepository>,
}

impl FleetAnalyzer {
    pub fn new(catalog: Arc<DoctrineCatalog>, roles: Arc<dyn ShipRoleRepository>) -> Self {
        Self { catalog, roles }
    }

    /// Full composition analysis for one fleet (multiset of hull type ids).
    ///
    /// Rejects fleets below the minimum size before any scoring executes.
    /// Unknown hulls degrade to the generic role default; a fleet matching
    /// no doctrine classifies as Unknown. Neither is an error.
    pub fn analyze_fleet_composition(
        &self,
        fleet: &[u32],
    ) -> Result<FleetCompositionResult, AnalysisError> {
        let min = config::get().threat.min_fleet_size;
        if fleet.len() < min {
            return Err(AnalysisError::FleetTooSmall {
                size: fleet.len(),
                min,
            });
        }

        let classification = DoctrineMatcher::match_fleet(&self.catalog, fleet);
        let balance = aggregate_role_balance(fleet, self.roles.as_ref());

        let matched_pattern = classification
            .doctrine_key()
            .and_then(|key| self.catalog.by_key(key));
        let tactical_assessment = matched_pattern.map_or_else(TacticalAssessment::unknown, |p| {
            TacticalAssessment {
                tank_type: Some(p.tank_type),
                engagement_range: Some(p.engagement_range),
                tactical_role: Some(p.tactical_role),
                strengths: p.strengths.clone(),
                weaknesses: p.weaknesses.clone(),
            }
        });

        let breakdown = score_threat(fleet.len(), &balance, classification.confidence());
        let recommendations = build_recommendations(
            &balance,
            &classification,
            matched_pattern.map(|p| p.tactical_role),
        );

        debug!(
            fleet_size = fleet.len(),
            doctrine = classification.doctrine_key().unwrap_or("unknown"),
            threat = breakdown.threat,
            "fleet composition analyzed"
        );

        Ok(FleetCompositionResult {
            fleet_size: fleet.len(),
            doctrine_classification: classification,
            tactical_assessment,
            role_distribution: balance,
            threat_score: breakdown.threat,
            threat_level: ThreatLevel::from_score(breakdown.threat),
            recommendations,
        })
    }

    /// Batch analysis: one independent task per fleet, no ordering
    /// guarantee between computations, no shared accumulator. One fleet's
    /// failure never affects the others. Results are returned in input
    /// order.
    pub async fn analyze_many(
        &self,
        fleets: Vec<Vec<u32>>,
    ) -> Vec<Result<FleetCompositionResult, AnalysisError>> {
        let mut set: JoinSet<(usize, Result<FleetCompositionResult, AnalysisError>)> =
            JoinSet::new();
        for (index, fleet) in fleets.into_iter().enumerate() {
            let analyzer = self.clone();
            set.spawn(async move { (index, analyzer.analyze_fleet_composition(&fleet)) });
        }

        let mut results: Vec<Option<Result<FleetCompositionResult, AnalysisError>>> = Vec::new();
        results.resize_with(set.len(), || None);
        while let Some(joined) = set.join_next().await {
            if let Ok((index, result)) = joined {
                results[index] = Some(result);
            }
        }
        results
            .into_iter()
            .map(|slot| {
                slot.unwrap_or_else(|| {
                    Err(AnalysisError::Provider(anyhow::anyhow!(
                        "analysis task panicked"
                    )))
                })
            })
            .collect()
    }
}

/// Fetches a subject's killmails and derives classified battle clusters.
pub struct BattleReporter;

impl BattleReporter {
    /// Battle clusters for a subject over a lookback window, most recent
    /// first. Provider failures propagate unchanged.
    pub async fn battles_for_subject(
        provider: &dyn KillmailProvider,
        subject: Subject,
        lookback_days: u32,
    ) -> Result<Vec<BattleCluster>, AnalysisError> {
        let since = Utc::now() - Duration::days(i64::from(lookback_days));
        let events = provider.killmails(subject, since).await?;
        let clusters = BattleClusterer::cluster(&events);
        info!(
            %subject,
            lookback_days,
            events = events.len(),
            battles = clusters.len(),
            "battle report built"
        );
        Ok(clusters)
    }
}
