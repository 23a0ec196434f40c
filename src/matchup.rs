//! One attacker-vs-target run: load both champions, solve, persist the report.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::TacticsConfig;
use crate::data::champion::{load_champion, ChampionRecord};
use crate::data::validate::validate_champion;
use crate::error::{Result, TacticsError};
use crate::report::{fight_report_path, render_report, write_report};
use crate::tactics::{fight, Solution};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Matchup {
    pub attacker: String,
    pub target: String,
}

impl Matchup {
    pub fn new(attacker: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            attacker: attacker.into(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchupOutcome {
    pub matchup: Matchup,
    pub solution: Solution,
    pub report: String,
    pub report_path: PathBuf,
}

pub fn run_matchup(config: &TacticsConfig, matchup: &Matchup) -> Result<MatchupOutcome> {
    tracing::info!(champion = %matchup.attacker, "loading champion data");
    let attacker = load_valid_champion(config, &matchup.attacker)?;
    tracing::info!(champion = %matchup.target, "loading champion data");
    let target = load_valid_champion(config, &matchup.target)?;

    tracing::info!(
        attacker = %attacker.name,
        target = %target.name,
        "finding fight tactics"
    );
    let solution = fight(&attacker.to_combatant(), &target.to_combatant());

    let report = render_report(&solution, target.stats.health_points);
    let report_path = fight_report_path(&config.fights_dir, &attacker.name, &target.name);
    write_report(&report_path, &report)?;

    Ok(MatchupOutcome {
        matchup: matchup.clone(),
        solution,
        report,
        report_path,
    })
}

/// Rejects champions the search cannot handle (non-positive health, rank
/// tables shorter than `max_rank`). Warnings are logged and let through.
fn load_valid_champion(config: &TacticsConfig, name: &str) -> Result<ChampionRecord> {
    let champion = load_champion(&config.champions_dir, name)?;
    let report = validate_champion(&champion);
    for diag in &report.diagnostics {
        tracing::warn!(champion = %champion.name, "{diag}");
    }
    if report.has_errors() {
        return Err(TacticsError::InvalidChampion {
            champion: champion.name,
            issues: report.error_count(),
        });
    }
    Ok(champion)
}
