use std::borrow::Borrow;

use crate::tactics::cooldown::reuse_penalty;
use crate::tactics::model::Ability;

/// Total time (seconds) to play out `sequence`: every cast plus any wait on
/// cooldowns accrued earlier in the same sequence.
///
/// The fight ends on the final cast, so its own cooldown is never paid.
pub fn sequence_benchmark<A: Borrow<Ability>>(sequence: &[A]) -> f64 {
    sequence
        .iter()
        .enumerate()
        .map(|(position, ability)| {
            let ability = ability.borrow();
            ability.cast + reuse_penalty(ability, &sequence[..position])
        })
        .sum()
}
