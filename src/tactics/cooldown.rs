//! Reuse penalty: how long an ability still has to wait on its own cooldown.
//!
//! The cooldown clock of a cast starts once that cast completes, so the time
//! elapsed since the previous use is the summed cast time of everything cast
//! after it.

use std::borrow::Borrow;

use crate::tactics::model::Ability;

/// Extra wait (seconds, never negative) before `candidate` may fire after `prefix`.
pub fn reuse_penalty<A: Borrow<Ability>>(candidate: &Ability, prefix: &[A]) -> f64 {
    let Some(last_use) = prefix
        .iter()
        .rposition(|used| used.borrow().id == candidate.id)
    else {
        return 0.0;
    };

    let elapsed: f64 = prefix[last_use + 1..]
        .iter()
        .map(|used| used.borrow().cast)
        .sum();

    let cooldown = candidate.max_rank_cooldown();
    if elapsed >= cooldown {
        0.0
    } else {
        cooldown - elapsed
    }
}
