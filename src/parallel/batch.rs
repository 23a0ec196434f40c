//! All-vs-all matchup fan-out.
//!
//! Each matchup owns its own search state, so matchups run on independent
//! rayon tasks with no locking. A failing matchup is logged and recorded; it
//! never aborts the rest of the batch.

use rayon::prelude::*;
use serde::Serialize;

use crate::config::TacticsConfig;
use crate::matchup::{run_matchup, Matchup};
use crate::parallel::pool::WorkerPool;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedMatchup {
    pub matchup: Matchup,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub completed: usize,
    /// Completed matchups where the attacker had no lethal rotation.
    pub unsolved: usize,
    pub failed: Vec<FailedMatchup>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.completed + self.failed.len()
    }
}

/// Every ordered pair of distinct champions, in input order.
///
/// # Example
/// ```
/// # use fight_tactics::parallel::all_matchups;
/// let pairs = all_matchups(&["annie".to_string(), "garen".to_string()]);
/// assert_eq!(pairs.len(), 2);
/// assert_eq!(pairs[0].attacker, "annie");
/// assert_eq!(pairs[1].attacker, "garen");
/// ```
pub fn all_matchups(names: &[String]) -> Vec<Matchup> {
    names
        .iter()
        .flat_map(|attacker| {
            names
                .iter()
                .filter(move |target| *target != attacker)
                .map(move |target| Matchup::new(attacker.clone(), target.clone()))
        })
        .collect()
}

/// Solves `matchups` in parallel on `pool`, writing one report per matchup.
pub fn run_matchups(
    config: &TacticsConfig,
    matchups: &[Matchup],
    pool: &WorkerPool,
) -> BatchSummary {
    let results: Vec<_> = pool.install(|| {
        matchups
            .par_iter()
            .map(|matchup| (matchup, run_matchup(config, matchup)))
            .collect()
    });

    let mut summary = BatchSummary::default();
    for (matchup, result) in results {
        match result {
            Ok(outcome) => {
                summary.completed += 1;
                if !outcome.solution.is_lethal() {
                    summary.unsolved += 1;
                }
            }
            Err(err) => {
                tracing::warn!(
                    attacker = %matchup.attacker,
                    target = %matchup.target,
                    "could not generate fight tactics: {err}"
                );
                summary.failed.push(FailedMatchup {
                    matchup: matchup.clone(),
                    error: err.to_string(),
                });
            }
        }
    }
    summary
}
