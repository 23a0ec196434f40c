pub mod champion;
pub mod import;
pub mod validate;

pub use champion::{
    champion_key, champion_path, list_champions, load_champion, read_champion, write_champion,
    ChampionRecord, Passive, Stats,
};
pub use import::{
    import_datadragon_file, map_datadragon_champion, parse_datadragon_champions, FailedImport,
    ImportReport, ImportedChampion,
};
pub use validate::{validate_champion, validate_champion_path, ValidationReport, ValidationSeverity};
