use serde::Serialize;

use crate::tactics::model::Ability;

/// Fastest lethal rotation found for one matchup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// Seconds needed to slay the target; `f64::INFINITY` when no rotation kills.
    pub benchmark: f64,
    pub rotation: Vec<Ability>,
}

impl Solution {
    /// Sentinel for "no lethal rotation exists".
    pub fn unsolved() -> Self {
        Self {
            benchmark: f64::INFINITY,
            rotation: Vec::new(),
        }
    }

    pub fn is_lethal(&self) -> bool {
        self.benchmark.is_finite()
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self::unsolved()
    }
}

/// Best-so-far accumulator for a single search. One per fight, never shared.
#[derive(Debug, Default)]
pub struct BestSolutionTracker {
    best: Solution,
    leaves_evaluated: u64,
}

impl BestSolutionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn best(&self) -> &Solution {
        &self.best
    }

    pub fn leaves_evaluated(&self) -> u64 {
        self.leaves_evaluated
    }

    /// Records a lethal rotation. It replaces the current best only when
    /// strictly faster, so on ties the earliest rotation offered is kept.
    /// Returns whether the rotation was taken.
    pub fn offer(&mut self, benchmark: f64, rotation: &[&Ability]) -> bool {
        self.leaves_evaluated += 1;
        if benchmark >= self.best.benchmark {
            return false;
        }

        tracing::debug!(
            benchmark,
            casts = rotation.len(),
            "found new best round of spells"
        );
        self.best.benchmark = benchmark;
        self.best.rotation = rotation.iter().map(|&ability| ability.clone()).collect();
        true
    }

    pub fn into_solution(self) -> Solution {
        self.best
    }
}
