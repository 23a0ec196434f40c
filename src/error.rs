use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TacticsError {
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse champion YAML '{}': {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to serialize champion YAML: {0}")]
    YamlWrite(#[source] serde_yaml::Error),

    #[error("failed to parse Data Dragon JSON '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("champion not found: {0}")]
    ChampionNotFound(String),

    #[error("Data Dragon document has no champion entry")]
    EmptyDataDragon,

    #[error("invalid champion data '{champion}': {issues} error(s)")]
    InvalidChampion { champion: String, issues: usize },
}

impl TacticsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TacticsError>;
