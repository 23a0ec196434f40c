//! Exhaustive depth-first rotation search.
//!
//! Every usable ability deals strictly positive damage, so each branch reaches
//! a lethal leaf after at most `ceil(health / min damage)` casts. No branch is
//! pruned on elapsed time: the returned rotation is optimal, not greedy.

use crate::tactics::benchmark::sequence_benchmark;
use crate::tactics::model::{Ability, Combatant};
use crate::tactics::solution::{BestSolutionTracker, Solution};

/// Enumerates the rotations an attacker can play until the target falls.
#[derive(Debug, Clone)]
pub struct RotationSearch<'a> {
    abilities: Vec<&'a Ability>,
}

impl<'a> RotationSearch<'a> {
    /// Branches only over abilities with positive max-rank damage, in the
    /// attacker's declared order.
    pub fn new(attacker: &'a Combatant) -> Self {
        Self {
            abilities: attacker.usable_abilities().collect(),
        }
    }

    pub fn branching_factor(&self) -> usize {
        self.abilities.len()
    }

    /// Feeds every lethal rotation against `target_health` to `tracker`.
    pub fn run(&self, target_health: f64, tracker: &mut BestSolutionTracker) {
        self.visit_leaves(target_health, |rotation| {
            tracker.offer(sequence_benchmark(rotation), rotation);
        });
    }

    /// Calls `visit` once per lethal rotation: one whose final cast brings
    /// `target_health` to zero or below and whose shorter prefixes do not.
    ///
    /// Leaves are visited depth-first, left to right over the ability list,
    /// which fixes which of several equally fast rotations a tracker keeps.
    /// A non-finite `target_health` has no lethal rotation and visits nothing.
    pub fn visit_leaves<F>(&self, target_health: f64, mut visit: F)
    where
        F: FnMut(&[&'a Ability]),
    {
        if !target_health.is_finite() {
            return;
        }
        let mut candidate = Vec::new();
        self.extend(target_health, &mut candidate, &mut visit);
    }

    fn extend<F>(&self, remaining_health: f64, candidate: &mut Vec<&'a Ability>, visit: &mut F)
    where
        F: FnMut(&[&'a Ability]),
    {
        for &ability in &self.abilities {
            let remaining = remaining_health - ability.max_rank_damage();
            candidate.push(ability);
            if remaining <= 0.0 {
                visit(candidate.as_slice());
            } else {
                self.extend(remaining, candidate, visit);
            }
            candidate.pop();
        }
    }
}

/// Fastest rotation for `attacker` to slay `target`.
///
/// Returns [`Solution::unsolved`] when the attacker has no damaging ability.
pub fn fight(attacker: &Combatant, target: &Combatant) -> Solution {
    let search = RotationSearch::new(attacker);
    let mut tracker = BestSolutionTracker::new();

    if search.branching_factor() == 0 {
        tracing::warn!(
            attacker = %attacker.name,
            target = %target.name,
            "attacker has no damaging ability; no lethal rotation exists"
        );
        return tracker.into_solution();
    }

    search.run(target.health_points, &mut tracker);

    tracing::info!(
        attacker = %attacker.name,
        target = %target.name,
        leaves = tracker.leaves_evaluated(),
        "best solution found: enemy slayed in {:.2}s",
        tracker.best().benchmark
    );
    tracker.into_solution()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ability(id: &str, damage: f64, cooldown: f64, cast: f64) -> Ability {
        Ability {
            id: id.to_string(),
            name: id.to_uppercase(),
            max_rank: 1,
            damage: vec![damage],
            cooldown: vec![cooldown],
            cast,
        }
    }

    fn combatant(health_points: f64, abilities: Vec<Ability>) -> Combatant {
        Combatant {
            name: "mock".to_string(),
            health_points,
            abilities,
        }
    }

    #[test]
    fn zero_damage_abilities_are_not_branched_on() {
        let attacker = combatant(
            100.0,
            vec![
                ability("passive", 0.0, 0.0, 0.0),
                ability("q", 10.0, 1.0, 0.5),
            ],
        );
        assert_eq!(RotationSearch::new(&attacker).branching_factor(), 1);
    }

    #[test]
    fn tracker_sees_every_lethal_leaf() {
        let attacker = combatant(
            0.0,
            vec![ability("q", 10.0, 4.0, 1.0), ability("e", 15.0, 3.0, 1.5)],
        );
        let search = RotationSearch::new(&attacker);
        let mut tracker = BestSolutionTracker::new();
        search.run(30.0, &mut tracker);

        let mut leaves = Vec::new();
        search.visit_leaves(30.0, |rotation| {
            leaves.push(rotation.iter().map(|a| a.id.as_str()).collect::<String>());
        });
        assert_eq!(leaves, vec!["qqq", "qqe", "qeq", "qee", "eqq", "eqe", "ee"]);
        assert_eq!(tracker.leaves_evaluated(), 7);
    }

    #[test]
    fn ties_keep_the_first_rotation_in_search_order() {
        let attacker = combatant(
            0.0,
            vec![ability("q", 10.0, 4.0, 1.0), ability("e", 15.0, 3.0, 1.5)],
        );
        let target = combatant(30.0, Vec::new());
        let solution = fight(&attacker, &target);

        let ids: Vec<_> = solution.rotation.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(solution.benchmark, 6.0);
        assert_eq!(ids, vec!["q", "e", "q"]);
    }

    #[test]
    fn no_damaging_ability_returns_sentinel() {
        let attacker = combatant(100.0, vec![ability("shield", 0.0, 10.0, 0.5)]);
        let target = combatant(50.0, Vec::new());
        let solution = fight(&attacker, &target);
        assert_eq!(solution, Solution::unsolved());
    }

    #[test]
    fn empty_ability_list_returns_sentinel() {
        let attacker = combatant(100.0, Vec::new());
        let target = combatant(50.0, Vec::new());
        assert!(!fight(&attacker, &target).is_lethal());
    }

    #[test]
    fn negative_damage_is_not_branched_on() {
        let attacker = combatant(100.0, vec![ability("heal", -5.0, 0.0, 1.0)]);
        let target = combatant(10.0, Vec::new());
        assert_eq!(RotationSearch::new(&attacker).branching_factor(), 0);
        assert_eq!(fight(&attacker, &target), Solution::unsolved());
    }

    #[test]
    fn non_finite_health_visits_no_leaves() {
        let attacker = combatant(100.0, vec![ability("q", 10.0, 1.0, 0.5)]);
        let search = RotationSearch::new(&attacker);
        for health in [f64::INFINITY, f64::NAN] {
            let mut leaves = 0;
            search.visit_leaves(health, |_| leaves += 1);
            assert_eq!(leaves, 0);
        }
        assert!(!fight(&attacker, &combatant(f64::NAN, Vec::new())).is_lethal());
    }
}
