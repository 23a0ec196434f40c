//! Champion records as stored on disk: one YAML file per champion under the
//! champions directory (default `champions/lol/<name>.yml`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TacticsError};
use crate::tactics::{Ability, Combatant};

pub const CHAMPION_FILE_EXTENSION: &str = "yml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub passive: Passive,
    pub stats: Stats,
    #[serde(default)]
    pub spells: Vec<Ability>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Passive {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub health_points: f64,
    #[serde(default)]
    pub attack_damage: f64,
    #[serde(default)]
    pub attack_speed: f64,
}

impl ChampionRecord {
    /// Solver view of this champion. Spell order is kept as the search order.
    pub fn to_combatant(&self) -> Combatant {
        Combatant {
            name: self.name.clone(),
            health_points: self.stats.health_points,
            abilities: self.spells.clone(),
        }
    }
}

/// File name key for a champion: lowercase, spaces removed.
pub fn champion_key(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn champion_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.{}", champion_key(name), CHAMPION_FILE_EXTENSION))
}

pub fn read_champion(path: &Path) -> Result<ChampionRecord> {
    let raw = fs::read_to_string(path).map_err(|err| TacticsError::io(path, err))?;
    serde_yaml::from_str(&raw).map_err(|source| TacticsError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `champion` as YAML, creating parent directories as needed.
pub fn write_champion(champion: &ChampionRecord, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| TacticsError::io(parent, err))?;
    }
    let payload = serde_yaml::to_string(champion).map_err(TacticsError::YamlWrite)?;
    fs::write(path, payload).map_err(|err| TacticsError::io(path, err))
}

/// Loads a champion by name from `dir`.
pub fn load_champion(dir: &Path, name: &str) -> Result<ChampionRecord> {
    let path = champion_path(dir, name);
    if !path.is_file() {
        return Err(TacticsError::ChampionNotFound(name.to_string()));
    }
    read_champion(&path)
}

/// Sorted file stems of every champion file in `dir`.
pub fn list_champions(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|err| TacticsError::io(dir, err))?;
    let mut names = Vec::new();
    for entry in entries {
        let path = entry.map_err(|err| TacticsError::io(dir, err))?.path();
        let is_champion_file = path.is_file()
            && path.extension().and_then(|ext| ext.to_str()) == Some(CHAMPION_FILE_EXTENSION);
        if !is_champion_file {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            names.push(stem.to_string());
        }
    }
    names.sort();
    Ok(names)
}
