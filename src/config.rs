//! Runtime configuration: data directories and worker count.
//!
//! Resolution order is defaults, then `LOLTACTICS_*` environment variables,
//! then command-line flags (applied by the CLI).

use std::env;
use std::path::PathBuf;

pub const DEFAULT_CHAMPIONS_DIR: &str = "champions/lol";
pub const DEFAULT_FIGHTS_DIR: &str = "fights";

pub const CHAMPIONS_DIR_ENV: &str = "LOLTACTICS_CHAMPIONS_DIR";
pub const FIGHTS_DIR_ENV: &str = "LOLTACTICS_FIGHTS_DIR";
pub const WORKERS_ENV: &str = "LOLTACTICS_WORKERS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TacticsConfig {
    pub champions_dir: PathBuf,
    pub fights_dir: PathBuf,
    /// Worker threads for matchup batches. 0 uses the rayon default (all cores).
    pub workers: usize,
}

impl Default for TacticsConfig {
    fn default() -> Self {
        Self {
            champions_dir: PathBuf::from(DEFAULT_CHAMPIONS_DIR),
            fights_dir: PathBuf::from(DEFAULT_FIGHTS_DIR),
            workers: 0,
        }
    }
}

impl TacticsConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup; unset or empty
    /// values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let value_of = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(dir) = value_of(CHAMPIONS_DIR_ENV) {
            config.champions_dir = PathBuf::from(dir);
        }
        if let Some(dir) = value_of(FIGHTS_DIR_ENV) {
            config.fights_dir = PathBuf::from(dir);
        }
        if let Some(raw) = value_of(WORKERS_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(workers) => config.workers = workers,
                Err(_) => tracing::warn!(
                    "invalid {WORKERS_ENV} '{raw}', defaulting to {}",
                    config.workers
                ),
            }
        }
        config
    }
}
