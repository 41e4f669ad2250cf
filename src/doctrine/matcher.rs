//! Fleet-to-doctrine scoring
//!
//! Each pattern scores three ratios (primary hulls, support hulls,
//! logistics share) through piecewise band functions, combined with
//! 0.5/0.3/0.2 weights. A primary hull is mandatory evidence: zero primary
//! matches zero out the whole pattern. Support is optional evidence and
//! earns flat partial credit when absent.

use tracing::debug;

use crate::config;
use crate::types::{DoctrineClassification, DoctrinePattern, MatchQuality};

use super::catalog::DoctrineCatalog;

/// Factor breakdown for one pattern.
#[derive(Debug, Clone, Copy)]
pub struct PatternScore {
    /// Weighted composite, [0, 1]
    pub score: f64,
    pub primary_score: f64,
    pub support_score: f64,
    pub logistics_score: f64,
}

impl PatternScore {
    const ZERO: Self = Self {
        score: 0.0,
        primary_score: 0.0,
        support_score: 0.0,
        logistics_score: 0.0,
    };
}

/// In-band/out-of-band piecewise score: 1.0 inside [min, max], proportional
/// ramp `ratio/min` below, proportional decay `max/ratio` above.
///
/// Shared between per-doctrine logistics scoring and the global logistics
/// band in threat scoring.
pub fn band_score(ratio: f64, min: f64, max: f64) -> f64 {
    if ratio >= min && ratio <= max {
        1.0
    } else if ratio < min {
        if min > 0.0 { ratio / min } else { 0.0 }
    } else {
        max / ratio
    }
}

/// Scores fleets against the doctrine catalog. Stateless and pure.
pub struct DoctrineMatcher;

impl DoctrineMatcher {
    /// Score every catalog pattern and classify the best match.
    ///
    /// Best score >= the confidence threshold is a confident match with a
    /// quality band; a positive score below it is partial; all-zero is
    /// unknown.
    pub fn match_fleet(catalog: &DoctrineCatalog, fleet: &[u32]) -> DoctrineClassification {
        let cfg = &config::get().matching;

        let mut best: Option<(&DoctrinePattern, PatternScore)> = None;
        for pattern in catalog.patterns() {
            let scored = Self::score_pattern(pattern, fleet);
            debug!(
                doctrine = %pattern.key,
                score = scored.score,
                primary = scored.primary_score,
                support = scored.support_score,
                logistics = scored.logistics_score,
                "scored doctrine pattern"
            );
            if best.map_or(true, |(_, b)| scored.score > b.score) {
                best = Some((pattern, scored));
            }
        }

        let Some((pattern, scored)) = best else {
            return DoctrineClassification::Unknown;
        };
        if scored.score <= 0.0 {
            return DoctrineClassification::Unknown;
        }

        if scored.score >= cfg.confident_threshold {
            let quality = if scored.score >= cfg.excellent_threshold {
                MatchQuality::Excellent
            } else if scored.score >= cfg.good_threshold {
                MatchQuality::Good
            } else {
                MatchQuality::Fair
            };
            DoctrineClassification::Confident {
                doctrine_key: pattern.key.clone(),
                doctrine_name: pattern.name.clone(),
                confidence: scored.score,
                quality,
            }
        } else {
            DoctrineClassification::Partial {
                doctrine_key: pattern.key.clone(),
                doctrine_name: pattern.name.clone(),
                confidence: scored.score,
                caveat: format!(
                    "composition resembles {} but scores below the {:.2} confidence threshold",
                    pattern.name, cfg.confident_threshold
                ),
            }
        }
    }

    /// Score one pattern against a fleet (multiset of hull type ids).
    pub fn score_pattern(pattern: &DoctrinePattern, fleet: &[u32]) -> PatternScore {
        let cfg = &config::get().matching;
        let fleet_size = fleet.len();

        // Gate: undersized fleets never match
        if fleet_size < pattern.min_fleet_size {
            return PatternScore::ZERO;
        }

        let primary_count = fleet
            .iter()
            .filter(|id| pattern.primary_ship_ids.contains(id))
            .count();
        // A primary hull is mandatory evidence; no partial credit without one
        if primary_count == 0 {
            return PatternScore::ZERO;
        }

        let support_count = fleet
            .iter()
            .filter(|id| pattern.support_ship_ids.contains(id))
            .count();

        let primary_ratio = primary_count as f64 / fleet_size as f64;
        let support_ratio = support_count as f64 / fleet_size as f64;

        let primary_score = primary_ratio_score(primary_ratio);
        let support_score = if support_count == 0 {
            cfg.no_support_credit
        } else {
            band_score(support_ratio, cfg.support_band_min, cfg.support_band_max)
        };
        // Logistics share is measured over the same support-hull set;
        // small gangs are exempt from logistics-ratio discipline
        let logistics_score = if fleet_size < cfg.small_gang_size {
            cfg.small_gang_logistics_score
        } else {
            band_score(
                support_ratio,
                pattern.logistics_ratio.min,
                pattern.logistics_ratio.max,
            )
        };

        let score = (cfg.primary_weight * primary_score
            + cfg.support_weight * support_score
            + cfg.logistics_weight * logistics_score)
            .min(1.0);

        PatternScore {
            score,
            primary_score,
            support_score,
            logistics_score,
        }
    }
}

/// Piecewise primary-hull ratio score.
///
/// Optimal band [0.5, 0.8]; ramp `r*2` in [0.3, 0.5); decay `1-(r-0.8)*2`
/// above 0.8; `r*3` below 0.3.
fn primary_ratio_score(ratio: f64) -> f64 {
    if (0.5..=0.8).contains(&ratio) {
        1.0
    } else if (0.3..0.5).contains(&ratio) {
        ratio * 2.0
    } else if ratio > 0.8 {
        (1.0 - (ratio - 0.8) * 2.0).max(0.0)
    } else {
        ratio * 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doctrine::catalog::hulls;

    fn fleet(counts: &[(u32, usize)]) -> Vec<u32> {
        counts
            .iter()
            .flat_map(|&(id, n)| std::iter::repeat(id).take(n))
            .collect()
    }

    fn zealot_pattern() -> DoctrinePattern {
        DoctrineCatalog::builtin()
            .by_key("armor_zealots")
            .expect("builtin key")
            .clone()
    }

    #[test]
    fn band_score_shape() {
        assert!((band_score(0.20, 0.15, 0.30) - 1.0).abs() < f64::EPSILON);
        assert!((band_score(0.15, 0.15, 0.30) - 1.0).abs() < f64::EPSILON);
        assert!((band_score(0.30, 0.15, 0.30) - 1.0).abs() < f64::EPSILON);
        assert!((band_score(0.075, 0.15, 0.30) - 0.5).abs() < 1e-9);
        assert!((band_score(0.60, 0.15, 0.30) - 0.5).abs() < 1e-9);
        assert!(band_score(0.0, 0.15, 0.30).abs() < f64::EPSILON);
    }

    #[test]
    fn primary_ratio_piecewise_regions() {
        assert!((primary_ratio_score(0.5) - 1.0).abs() < f64::EPSILON);
        assert!((primary_ratio_score(0.8) - 1.0).abs() < f64::EPSILON);
        assert!((primary_ratio_score(0.4) - 0.8).abs() < 1e-9);
        assert!((primary_ratio_score(0.9) - 0.8).abs() < 1e-9);
        assert!((primary_ratio_score(0.2) - 0.6).abs() < 1e-9);
        assert!((primary_ratio_score(1.0) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn zero_primary_scores_zero_regardless_of_support() {
        let pattern = zealot_pattern();
        // 15 ships, perfect logistics ratio, but no Zealots at all
        let f = fleet(&[(hulls::MUNINN, 12), (hulls::GUARDIAN, 3)]);
        let scored = DoctrineMatcher::score_pattern(&pattern, &f);
        assert!(scored.score.abs() < f64::EPSILON);
    }

    #[test]
    fn min_fleet_size_boundary() {
        let pattern = zealot_pattern();
        assert_eq!(pattern.min_fleet_size, 10);

        // Exactly at the minimum: accepted
        let at = fleet(&[(hulls::ZEALOT, 8), (hulls::GUARDIAN, 2)]);
        assert!(DoctrineMatcher::score_pattern(&pattern, &at).score > 0.0);

        // One below: rejected
        let below = fleet(&[(hulls::ZEALOT, 7), (hulls::GUARDIAN, 2)]);
        assert!(DoctrineMatcher::score_pattern(&pattern, &below).score.abs() < f64::EPSILON);
    }

    #[test]
    fn ten_primary_two_support_scenario() {
        // primary ratio 10/12 = 0.833 (decay region), support ratio 0.167
        // (in both the support band and the zealot logistics band)
        let pattern = zealot_pattern();
        let f = fleet(&[(hulls::ZEALOT, 10), (hulls::GUARDIAN, 2)]);
        let scored = DoctrineMatcher::score_pattern(&pattern, &f);

        let expected_primary = 1.0 - (10.0 / 12.0 - 0.8) * 2.0;
        assert!((scored.primary_score - expected_primary).abs() < 1e-9);
        assert!((scored.support_score - 1.0).abs() < f64::EPSILON);
        assert!((scored.logistics_score - 1.0).abs() < f64::EPSILON);

        let expected = 0.5 * expected_primary + 0.3 + 0.2;
        assert!((scored.score - expected).abs() < 1e-9);
        assert!(scored.score >= 0.70, "scenario should clear the confident threshold");
    }

    #[test]
    fn confident_match_quality_banding() {
        let catalog = DoctrineCatalog::builtin();
        let f = fleet(&[(hulls::ZEALOT, 10), (hulls::GUARDIAN, 2)]);
        match DoctrineMatcher::match_fleet(&catalog, &f) {
            DoctrineClassification::Confident {
                doctrine_key,
                quality,
                confidence,
                ..
            } => {
                assert_eq!(doctrine_key, "armor_zealots");
                assert_eq!(quality, MatchQuality::Excellent);
                assert!(confidence >= 0.90);
            }
            other => panic!("expected confident match, got {other:?}"),
        }
    }

    #[test]
    fn no_support_still_earns_flat_credit() {
        let pattern = zealot_pattern();
        let f = fleet(&[(hulls::ZEALOT, 12)]);
        let scored = DoctrineMatcher::score_pattern(&pattern, &f);
        assert!((scored.support_score - 0.3).abs() < f64::EPSILON);
        // Logistics ratio of 0 is below the band: zero logistics score
        assert!(scored.logistics_score.abs() < f64::EPSILON);
        assert!(scored.score > 0.0);
    }

    #[test]
    fn unrecognized_fleet_is_unknown() {
        let catalog = DoctrineCatalog::builtin();
        // Industrial hull ids, matching nothing
        let f = fleet(&[(648, 10), (649, 5)]);
        assert!(matches!(
            DoctrineMatcher::match_fleet(&catalog, &f),
            DoctrineClassification::Unknown
        ));
    }

    #[test]
    fn weak_resemblance_reports_partial_with_caveat() {
        let catalog = DoctrineCatalog::builtin();
        // 2 Zealots in a 10-ship fleet of otherwise unknown hulls:
        // primary ratio 0.2 -> 0.6, support 0 -> 0.3, logistics 0 -> 0
        // composite = 0.39, below 0.70
        let f = fleet(&[(hulls::ZEALOT, 2), (99999, 8)]);
        match DoctrineMatcher::match_fleet(&catalog, &f) {
            DoctrineClassification::Partial {
                doctrine_key,
                confidence,
                caveat,
                ..
            } => {
                assert_eq!(doctrine_key, "armor_zealots");
                assert!(confidence > 0.0 && confidence < 0.70);
                assert!(caveat.contains("below"));
            }
            other => panic!("expected partial match, got {other:?}"),
        }
    }

    #[test]
    fn matching_is_idempotent() {
        let catalog = DoctrineCatalog::builtin();
        let f = fleet(&[(hulls::MUNINN, 20), (hulls::SCIMITAR, 4)]);
        let a = DoctrineMatcher::match_fleet(&catalog, &f);
        let b = DoctrineMatcher::match_fleet(&catalog, &f);
        assert!((a.confidence() - b.confidence()).abs() < f64::EPSILON);
        assert_eq!(a.doctrine_key(), b.doctrine_key());
    }
}
