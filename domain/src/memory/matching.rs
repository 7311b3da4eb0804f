//! Lexical matching over recorded exchanges.
//!
//! Both the local and history tiers use the same bounded technique: token
//! overlap between the incoming query and stored queries, walked
//! newest-first so ties break toward recency.

use crate::core::query::Query;
use crate::memory::exchange::Exchange;
use std::collections::HashSet;

/// A successful lexical match against a stored exchange
#[derive(Debug, Clone, PartialEq)]
pub struct MatchHit {
    /// Overlap strength in `[0.0, 1.0]`
    pub strength: f64,
    /// The recommendation the matched exchange carried
    pub recommendation: String,
    /// Description of the matched stored query (for the provenance trail)
    pub matched_description: String,
}

/// Normalize text into lowercase alphanumeric tokens
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

/// Token overlap between a query and a candidate text
///
/// `|query tokens ∩ candidate tokens| / |query tokens|`; `0.0` when either
/// side has no tokens.
pub fn overlap(query_text: &str, candidate_text: &str) -> f64 {
    let query_tokens: HashSet<String> = tokenize(query_text).into_iter().collect();
    if query_tokens.is_empty() {
        return 0.0;
    }
    let candidate_tokens: HashSet<String> = tokenize(candidate_text).into_iter().collect();
    if candidate_tokens.is_empty() {
        return 0.0;
    }
    let shared = query_tokens.intersection(&candidate_tokens).count();
    shared as f64 / query_tokens.len() as f64
}

/// Find the best-overlapping exchange, newest first
///
/// Exchanges whose solution carries no recommendation are skipped — there
/// is nothing to recommend back. Only strictly greater overlap displaces an
/// earlier hit, so equal-strength ties go to the most recent exchange.
pub fn best_match<'a>(
    query: &Query,
    exchanges: impl Iterator<Item = &'a Exchange>,
) -> Option<MatchHit> {
    let mut best: Option<MatchHit> = None;
    for exchange in exchanges {
        if !exchange.solution.has_recommendation() {
            continue;
        }
        let strength = overlap(query.description(), exchange.query.description());
        if strength <= 0.0 {
            continue;
        }
        if best.as_ref().is_none_or(|b| strength > b.strength) {
            best = Some(MatchHit {
                strength,
                recommendation: exchange.solution.recommendation.clone(),
                matched_description: exchange.query.description().to_string(),
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::solution::Solution;
    use crate::knowledge::tier::Tier;

    fn exchange(question: &str, answer: &str) -> Exchange {
        Exchange::new(
            Query::new(question),
            Solution::found(Tier::Local, answer, 0.6, vec![]),
        )
    }

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(
            tokenize("How do we Shard-the_index?"),
            vec!["how", "do", "we", "shard", "the", "index"]
        );
    }

    #[test]
    fn test_overlap_identical_text_is_full() {
        assert_eq!(overlap("shard the index", "shard the index"), 1.0);
    }

    #[test]
    fn test_overlap_disjoint_is_zero() {
        assert_eq!(overlap("shard the index", "rotate your keys"), 0.0);
    }

    #[test]
    fn test_overlap_empty_sides() {
        assert_eq!(overlap("", "anything"), 0.0);
        assert_eq!(overlap("anything", "??!"), 0.0);
    }

    #[test]
    fn test_best_match_picks_strongest() {
        let stored = vec![
            exchange("how do we rotate keys", "use a kms"),
            exchange("how do we shard the index", "consistent hashing"),
        ];
        let hit = best_match(
            &Query::new("how do we shard the index"),
            stored.iter().rev(),
        )
        .unwrap();
        assert_eq!(hit.recommendation, "consistent hashing");
        assert_eq!(hit.strength, 1.0);
    }

    #[test]
    fn test_ties_break_toward_recency() {
        let older = exchange("scale the cache", "older answer");
        let newer = exchange("scale the cache", "newer answer");
        let stored = vec![older, newer];
        // newest-first iteration, strictly-greater displacement
        let hit = best_match(&Query::new("scale the cache"), stored.iter().rev()).unwrap();
        assert_eq!(hit.recommendation, "newer answer");
    }

    #[test]
    fn test_skips_exchanges_without_recommendation() {
        let empty = Exchange::new(Query::new("scale the cache"), Solution::none(Tier::Local));
        let stored = vec![empty];
        assert!(best_match(&Query::new("scale the cache"), stored.iter().rev()).is_none());
    }
}
