//! Escalation observer port
//!
//! Defines the callback interface for watching an escalation walk.

use cascade_domain::{Solution, Tier};

/// Callbacks fired as the engine walks the tiers
///
/// Implementations live at the presentation edge (console progress, test
/// instrumentation) and must be cheap: they are called inline on the
/// resolve path.
pub trait EscalationObserver: Send + Sync {
    /// Called when a tier is about to be consulted
    fn on_tier_start(&self, tier: Tier);

    /// Called with the solution a tier produced
    fn on_tier_complete(&self, tier: Tier, solution: &Solution);

    /// Called when a tier's solution clears the threshold and ends the walk
    fn on_short_circuit(&self, _tier: Tier, _confidence: f64) {}

    /// Called when the wall-clock budget runs out before the walk finishes
    fn on_budget_exhausted(&self, _last_tier: Tier) {}
}

/// No-op observer for when progress reporting is not needed
pub struct NoObserver;

impl EscalationObserver for NoObserver {
    fn on_tier_start(&self, _tier: Tier) {}
    fn on_tier_complete(&self, _tier: Tier, _solution: &Solution) {}
}
