//! Import of Riot Data Dragon champion documents (`champion/<Key>.json` or
//! `championFull.json`) into champion YAML files.
//!
//! Data Dragon carries neither cast times nor a basic-attack spell; casts are
//! imported as 0 and the basic attack is synthesized from the champion stats.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::champion::{champion_path, write_champion, ChampionRecord, Passive, Stats};
use crate::error::{Result, TacticsError};
use crate::tactics::Ability;

pub const BASIC_ATTACK_ID: &str = "aa";
pub const BASIC_ATTACK_NAME: &str = "Auto Attack";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportedChampion {
    pub champion: String,
    pub output_path: String,
    pub spell_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedImport {
    /// Key of the entry in the document's `data` map.
    pub key: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub source_path: String,
    pub imported: Vec<ImportedChampion>,
    pub failed: Vec<FailedImport>,
}

impl ImportReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// `{"data": {"<Key>": {...}, ...}}`, as served for one champion
/// (`champion/<Key>.json`) or for all of them (`championFull.json`).
/// Entries stay raw so one malformed champion does not reject the rest.
#[derive(Debug, Deserialize)]
struct WrappedDocument {
    data: BTreeMap<String, serde_json::Value>,
}

/// One champion entry of a Data Dragon document.
#[derive(Debug)]
pub struct DataDragonEntry {
    pub key: String,
    pub champion: serde_json::Result<DataDragonChampion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataDragonChampion {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub passive: Option<DataDragonPassive>,
    pub stats: DataDragonStats,
    #[serde(default)]
    pub spells: Vec<DataDragonSpell>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataDragonPassive {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataDragonStats {
    pub hp: f64,
    #[serde(default)]
    pub attackdamage: f64,
    #[serde(default)]
    pub attackspeedoffset: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataDragonSpell {
    pub id: String,
    pub name: String,
    pub maxrank: usize,
    #[serde(default)]
    pub cooldown: Vec<f64>,
    /// 1-based: index 0 is always null.
    #[serde(default)]
    pub effect: Vec<Option<Vec<f64>>>,
}

/// Parses either a Data Dragon response (`{"data": {...}}`) holding any number
/// of champions, in key order, or a bare champion object.
pub fn parse_datadragon_champions(raw: &str) -> serde_json::Result<Vec<DataDragonEntry>> {
    let document: serde_json::Value = serde_json::from_str(raw)?;
    if document.get("data").is_none() {
        let champion: DataDragonChampion = serde_json::from_value(document)?;
        return Ok(vec![DataDragonEntry {
            key: champion.id.clone(),
            champion: Ok(champion),
        }]);
    }

    let wrapped: WrappedDocument = serde_json::from_value(document)?;
    Ok(wrapped
        .data
        .into_iter()
        .map(|(key, value)| DataDragonEntry {
            key,
            champion: serde_json::from_value(value),
        })
        .collect())
}

pub fn map_datadragon_champion(champion: DataDragonChampion) -> ChampionRecord {
    let stats = Stats {
        health_points: champion.stats.hp,
        attack_damage: champion.stats.attackdamage,
        attack_speed: champion.stats.attackspeedoffset,
    };

    let mut spells = Vec::with_capacity(champion.spells.len() + 1);
    spells.push(Ability {
        id: BASIC_ATTACK_ID.to_string(),
        name: BASIC_ATTACK_NAME.to_string(),
        max_rank: 1,
        damage: vec![stats.attack_damage],
        cooldown: vec![stats.attack_speed],
        cast: 0.0,
    });
    spells.extend(champion.spells.into_iter().map(|spell| {
        let damage = spell.effect.into_iter().nth(1).flatten().unwrap_or_default();
        Ability {
            id: spell.id,
            name: spell.name,
            max_rank: spell.maxrank,
            damage,
            cooldown: spell.cooldown,
            cast: 0.0,
        }
    }));

    let passive = champion
        .passive
        .map(|passive| Passive {
            name: passive.name,
            description: passive.description,
        })
        .unwrap_or_default();

    ChampionRecord {
        id: champion.id,
        name: champion.name,
        title: champion.title,
        tags: champion.tags.join(", "),
        passive,
        stats,
        spells,
    }
}

/// Converts every champion in the Data Dragon document at `source` and stores
/// each under `champions_dir`, keyed by champion id. A champion that cannot be
/// decoded or written is logged and reported; the others are still stored.
pub fn import_datadragon_file(source: &Path, champions_dir: &Path) -> Result<ImportReport> {
    let raw = fs::read_to_string(source).map_err(|err| TacticsError::io(source, err))?;
    let entries = parse_datadragon_champions(&raw).map_err(|source_err| TacticsError::Json {
        path: source.to_path_buf(),
        source: source_err,
    })?;
    if entries.is_empty() {
        return Err(TacticsError::EmptyDataDragon);
    }

    let mut report = ImportReport {
        source_path: source.display().to_string(),
        imported: Vec::with_capacity(entries.len()),
        failed: Vec::new(),
    };

    for DataDragonEntry { key, champion } in entries {
        let stored = champion
            .map_err(|err| err.to_string())
            .and_then(|champion| {
                store_champion(champion, champions_dir).map_err(|err| err.to_string())
            });
        match stored {
            Ok(imported) => {
                tracing::info!(
                    champion = %imported.champion,
                    path = %imported.output_path,
                    "stored champion data"
                );
                report.imported.push(imported);
            }
            Err(reason) => {
                tracing::warn!(champion = %key, "could not store champion data: {reason}");
                report.failed.push(FailedImport { key, reason });
            }
        }
    }

    Ok(report)
}

fn store_champion(
    champion: DataDragonChampion,
    champions_dir: &Path,
) -> Result<ImportedChampion> {
    let record = map_datadragon_champion(champion);
    let output = champion_path(champions_dir, &record.id);
    write_champion(&record, &output)?;
    Ok(ImportedChampion {
        champion: record.name,
        output_path: output.display().to_string(),
        spell_count: record.spells.len(),
    })
}
