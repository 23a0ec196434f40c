use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::TacticsConfig;
use crate::data::champion::list_champions;
use crate::data::import::import_datadragon_file;
use crate::data::validate::{validate_champion_path, ValidationSeverity};
use crate::matchup::{run_matchup, Matchup};
use crate::parallel::{all_matchups, run_matchups, WorkerPool};

const USAGE: &str = "usage: loltactics <fight|tactics|import|validate>";

/// League of Legends fight tactics.
#[derive(Parser, Debug)]
#[command(name = "loltactics", version)]
pub struct Cli {
    /// Directory holding champion YAML files (env: LOLTACTICS_CHAMPIONS_DIR)
    #[arg(long, global = true)]
    pub champions_dir: Option<PathBuf>,

    /// Directory fight reports are written to (env: LOLTACTICS_FIGHTS_DIR)
    #[arg(long, global = true)]
    pub fights_dir: Option<PathBuf>,

    /// Worker threads for `tactics`, 0 for all cores (env: LOLTACTICS_WORKERS)
    #[arg(long, global = true)]
    pub workers: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Find the fastest rotation for the first champion to slay the second
    #[command(visible_alias = "f")]
    Fight {
        champion1: String,
        champion2: String,
        /// Print the solution as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
    /// Generate fight tactics for every pair of stored champions
    #[command(visible_alias = "t")]
    Tactics,
    /// Import a Data Dragon champion JSON file into the champions directory
    #[command(visible_alias = "d")]
    Import { path: PathBuf },
    /// Validate one champion file, or the whole champions directory
    Validate { path: Option<PathBuf> },
}

impl Cli {
    /// Environment config with command-line flags applied on top.
    pub fn config(&self, base: TacticsConfig) -> TacticsConfig {
        TacticsConfig {
            champions_dir: self.champions_dir.clone().unwrap_or(base.champions_dir),
            fights_dir: self.fights_dir.clone().unwrap_or(base.fights_dir),
            workers: self.workers.unwrap_or(base.workers),
        }
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            if let Err(io_err) = err.print() {
                tracing::warn!("failed to print usage error: {io_err}");
            }
            return err.exit_code();
        }
    };
    let config = cli.config(TacticsConfig::from_env());

    match cli.command {
        Some(Command::Fight {
            champion1,
            champion2,
            json,
        }) => handle_fight(&config, &champion1, &champion2, json),
        Some(Command::Tactics) => handle_tactics(&config),
        Some(Command::Import { path }) => handle_import(&config, &path),
        Some(Command::Validate { path }) => handle_validate(&config, path),
        None => {
            eprintln!("{USAGE}");
            2
        }
    }
}

fn handle_fight(config: &TacticsConfig, champion1: &str, champion2: &str, as_json: bool) -> i32 {
    let matchup = Matchup::new(champion1.to_lowercase(), champion2.to_lowercase());
    match run_matchup(config, &matchup) {
        Ok(outcome) => {
            tracing::info!(path = %outcome.report_path.display(), "fight report written");
            if !as_json {
                print!("{}", outcome.report);
                return 0;
            }
            match serde_json::to_string_pretty(&outcome.solution) {
                Ok(payload) => {
                    println!("{payload}");
                    0
                }
                Err(err) => {
                    eprintln!("failed to serialize fight solution: {err}");
                    1
                }
            }
        }
        Err(err) => {
            eprintln!("champion fight failed: {err}");
            1
        }
    }
}

fn handle_tactics(config: &TacticsConfig) -> i32 {
    let names = match list_champions(&config.champions_dir) {
        Ok(names) => names,
        Err(err) => {
            eprintln!(
                "listing champions data files in path '{}' failed: {err}",
                config.champions_dir.display()
            );
            return 1;
        }
    };

    let matchups = all_matchups(&names);
    let summary = run_matchups(config, &matchups, &WorkerPool::with_workers(config.workers));
    println!(
        "tactics complete: matchups={}, completed={}, unsolved={}, failed={}",
        summary.total(),
        summary.completed,
        summary.unsolved,
        summary.failed.len()
    );

    if summary.failed.is_empty() {
        0
    } else {
        for failure in &summary.failed {
            eprintln!(
                "- {} vs {}: {}",
                failure.matchup.attacker, failure.matchup.target, failure.error
            );
        }
        1
    }
}

fn handle_import(config: &TacticsConfig, path: &Path) -> i32 {
    let report = match import_datadragon_file(path, &config.champions_dir) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("import failed: {err}");
            return 1;
        }
    };

    for imported in &report.imported {
        println!(
            "imported champion='{}', spells={}, output='{}'",
            imported.champion, imported.spell_count, imported.output_path
        );
    }
    println!(
        "import complete: imported={}, failed={}",
        report.imported.len(),
        report.failed.len()
    );

    if report.has_failures() {
        for failure in &report.failed {
            eprintln!("- {}: {}", failure.key, failure.reason);
        }
        1
    } else {
        0
    }
}

fn handle_validate(config: &TacticsConfig, path: Option<PathBuf>) -> i32 {
    let path = path.unwrap_or_else(|| config.champions_dir.clone());

    let report = match validate_champion_path(&path) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("validation failed: {err}");
            return 1;
        }
    };

    for diag in &report.diagnostics {
        if diag.severity == ValidationSeverity::Warning {
            eprintln!("{diag}");
        }
    }

    if report.has_errors() {
        eprintln!("validation failed: {} issue(s)", report.error_count());
        for diag in &report.diagnostics {
            if diag.severity == ValidationSeverity::Error {
                eprintln!("- {diag}");
            }
        }
        1
    } else {
        println!("validation passed: {}", path.display());
        0
    }
}
