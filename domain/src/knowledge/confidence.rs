//! Confidence model
//!
//! Pure scoring logic shared by every tier. Base strength comes from the
//! tier's own matching technique (lexical overlap, recency, library
//! curation); this module maps it into a confidence with per-tier floors
//! and ceilings:
//!
//! - no tier below network ever exceeds [`SINGLE_TIER_CEILING`], reserving
//!   headroom to signal "still uncertain" even on a strong local match;
//! - network-sourced knowledge is unverified, so it is capped lower at
//!   [`NETWORK_CEILING`];
//! - a curated domain-library hit starts from a higher floor than recent
//!   chatter of the same strength;
//! - no match at all is exactly `0.0`.

use crate::knowledge::tier::Tier;

/// Ceiling for any single tier below the network-aggregated level
pub const SINGLE_TIER_CEILING: f64 = 0.95;

/// Ceiling for unverified, network-sourced knowledge
pub const NETWORK_CEILING: f64 = 0.85;

/// Confidence bonus per corroborating peer during fusion
pub const CORROBORATION_BONUS: f64 = 0.05;

/// Map a tier's raw match strength into a confidence score
///
/// Returns exactly `0.0` when nothing matched (`strength <= 0`), otherwise
/// a linear ramp between the tier's floor and ceiling.
pub fn score(strength: f64, tier: Tier) -> f64 {
    if strength <= 0.0 {
        return 0.0;
    }
    let (floor, ceiling) = bounds(tier);
    floor + (ceiling - floor) * strength.clamp(0.0, 1.0)
}

/// The `(floor, ceiling)` confidence bounds for a tier
pub fn bounds(tier: Tier) -> (f64, f64) {
    match tier {
        Tier::Local => (0.30, SINGLE_TIER_CEILING),
        Tier::History => (0.25, SINGLE_TIER_CEILING),
        Tier::DomainLibrary => (0.50, SINGLE_TIER_CEILING),
        // Peer confidence comes from fusion, not from a strength ramp;
        // a lone peer passes its constituent confidence through.
        Tier::Peer => (0.0, SINGLE_TIER_CEILING),
        Tier::Network => (0.20, NETWORK_CEILING),
    }
}

/// Fuse independent peer confidences into a composite
///
/// Composite = max constituent confidence plus a small bonus per
/// corroborating peer (a peer beyond the best one that also answered),
/// capped at [`SINGLE_TIER_CEILING`]. Zero responders yields `0.0`.
pub fn fuse(confidences: &[f64]) -> f64 {
    let responders: Vec<f64> = confidences.iter().copied().filter(|c| *c > 0.0).collect();
    let Some(max) = responders.iter().copied().reduce(f64::max) else {
        return 0.0;
    };
    let bonus = CORROBORATION_BONUS * (responders.len() - 1) as f64;
    (max + bonus).min(SINGLE_TIER_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_is_exactly_zero() {
        for tier in Tier::ESCALATION_ORDER {
            assert_eq!(score(0.0, tier), 0.0);
            assert_eq!(score(-1.0, tier), 0.0);
        }
    }

    #[test]
    fn test_full_strength_hits_the_ceiling() {
        assert_eq!(score(1.0, Tier::Local), SINGLE_TIER_CEILING);
        assert_eq!(score(1.0, Tier::History), SINGLE_TIER_CEILING);
        assert_eq!(score(1.0, Tier::DomainLibrary), SINGLE_TIER_CEILING);
        assert_eq!(score(1.0, Tier::Network), NETWORK_CEILING);
    }

    #[test]
    fn test_scores_stay_in_range() {
        for tier in Tier::ESCALATION_ORDER {
            for strength in [0.01, 0.25, 0.5, 0.75, 1.0, 3.0] {
                let c = score(strength, tier);
                assert!((0.0..=SINGLE_TIER_CEILING).contains(&c));
            }
        }
    }

    #[test]
    fn test_curated_library_beats_local_at_equal_strength() {
        let strength = 0.6;
        assert!(score(strength, Tier::DomainLibrary) > score(strength, Tier::Local));
        assert!(score(strength, Tier::DomainLibrary) > score(strength, Tier::History));
    }

    #[test]
    fn test_network_capped_below_curated_sources() {
        assert!(score(1.0, Tier::Network) < score(1.0, Tier::DomainLibrary));
    }

    #[test]
    fn test_fuse_empty_is_zero() {
        assert_eq!(fuse(&[]), 0.0);
        assert_eq!(fuse(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_fuse_single_peer_passes_through() {
        assert!((fuse(&[0.7]) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_fuse_corroboration_raises_composite() {
        let composite = fuse(&[0.82, 0.80]);
        assert!(composite > 0.82);
        assert!((composite - 0.87).abs() < 1e-9);
    }

    #[test]
    fn test_fuse_ignores_silent_peers() {
        // A peer that found nothing does not corroborate.
        assert!((fuse(&[0.82, 0.0]) - 0.82).abs() < 1e-9);
    }

    #[test]
    fn test_fuse_is_capped() {
        assert_eq!(fuse(&[0.94, 0.9, 0.9, 0.9]), SINGLE_TIER_CEILING);
    }
}
