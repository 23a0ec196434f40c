use serde::{Deserialize, Serialize};

/// A castable ability with per-rank damage and cooldown tables.
///
/// Only the values at `max_rank - 1` are used by the solver; lower ranks are
/// kept so that champion files round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub id: String,
    pub name: String,
    pub max_rank: usize,
    #[serde(default)]
    pub damage: Vec<f64>,
    #[serde(default)]
    pub cooldown: Vec<f64>,
    #[serde(default)]
    pub cast: f64,
}

impl Ability {
    /// Damage dealt per cast at max rank. Missing rank entries read as zero.
    pub fn max_rank_damage(&self) -> f64 {
        rank_value(&self.damage, self.max_rank)
    }

    /// Cooldown in seconds at max rank. Missing rank entries read as zero.
    pub fn max_rank_cooldown(&self) -> f64 {
        rank_value(&self.cooldown, self.max_rank)
    }

    /// Only abilities with strictly positive max-rank damage enter a rotation;
    /// zero, negative and NaN damage never bring a target closer to death.
    pub fn is_usable(&self) -> bool {
        self.max_rank_damage() > 0.0
    }
}

fn rank_value(values: &[f64], max_rank: usize) -> f64 {
    max_rank
        .checked_sub(1)
        .and_then(|index| values.get(index))
        .copied()
        .unwrap_or(0.0)
}

/// Attacker or target of a fight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub health_points: f64,
    /// Iteration order of the rotation search; decides ties.
    pub abilities: Vec<Ability>,
}

impl Combatant {
    pub fn usable_abilities(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.iter().filter(|ability| ability.is_usable())
    }
}
