use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use fight_tactics::data::{
    champion_path, import_datadragon_file, list_champions, load_champion, read_champion,
    validate_champion_path, write_champion, ChampionRecord, Passive, Stats,
};
use fight_tactics::tactics::{fight, Ability};
use fight_tactics::TacticsError;

fn unique_temp_dir(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("fight-tactics-{name}-{stamp}"));
    fs::create_dir_all(&dir).expect("temp dir should be created");
    dir
}

fn spell(id: &str, damage: Vec<f64>, cooldown: Vec<f64>, cast: f64) -> Ability {
    Ability {
        id: id.to_string(),
        name: id.to_uppercase(),
        max_rank: damage.len(),
        damage,
        cooldown,
        cast,
    }
}

fn champion(name: &str, health_points: f64, spells: Vec<Ability>) -> ChampionRecord {
    ChampionRecord {
        id: name.replace(' ', ""),
        name: name.to_string(),
        title: "the Test Dummy".to_string(),
        tags: "Fighter, Tank".to_string(),
        passive: Passive {
            name: "Sturdy".to_string(),
            description: "Does nothing.".to_string(),
        },
        stats: Stats {
            health_points,
            attack_damage: 10.0,
            attack_speed: 0.0,
        },
        spells,
    }
}

#[test]
fn written_champion_reads_back_identically() {
    let dir = unique_temp_dir("roundtrip");
    let record = champion(
        "Lee Sin",
        645.0,
        vec![
            spell("aa", vec![10.0], vec![0.0], 0.5),
            spell("q", vec![55.0, 80.0, 105.0], vec![10.0, 9.0, 8.0], 0.25),
        ],
    );

    let path = champion_path(&dir.join("nested"), &record.name);
    write_champion(&record, &path).expect("write should succeed");
    assert!(path.ends_with("leesin.yml"));

    let loaded = read_champion(&path).expect("read should succeed");
    assert_eq!(loaded, record);
    assert_eq!(load_champion(&dir.join("nested"), "LEE SIN").expect("load"), record);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn list_champions_returns_sorted_yml_stems_only() {
    let dir = unique_temp_dir("list");
    for name in ["garen", "annie", "zed"] {
        write_champion(&champion(name, 100.0, Vec::new()), &champion_path(&dir, name))
            .expect("write should succeed");
    }
    fs::write(dir.join("notes.txt"), "not a champion").expect("write notes");

    assert_eq!(
        list_champions(&dir).expect("list"),
        vec!["annie".to_string(), "garen".to_string(), "zed".to_string()]
    );

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn missing_champion_is_reported_by_name() {
    let dir = unique_temp_dir("missing");
    match load_champion(&dir, "nobody") {
        Err(TacticsError::ChampionNotFound(name)) => assert_eq!(name, "nobody"),
        other => panic!("expected ChampionNotFound, got {other:?}"),
    }
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let dir = unique_temp_dir("malformed");
    let path = dir.join("broken.yml");
    fs::write(&path, "name: [unterminated").expect("write fixture");
    assert!(matches!(read_champion(&path), Err(TacticsError::Yaml { .. })));
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn imported_datadragon_champion_can_fight() {
    let dir = unique_temp_dir("import");
    let source = dir.join("Annie.json");
    fs::write(
        &source,
        r#"{
            "data": {
                "Annie": {
                    "id": "Annie",
                    "name": "Annie",
                    "title": "the Dark Child",
                    "tags": ["Mage"],
                    "passive": {"name": "Pyromania", "description": "Stun."},
                    "stats": {"hp": 594, "attackdamage": 50},
                    "spells": [
                        {
                            "id": "AnnieQ",
                            "name": "Disintegrate",
                            "maxrank": 5,
                            "cooldown": [4, 4, 4, 4, 4],
                            "effect": [null, [80, 115, 150, 185, 220]]
                        }
                    ]
                }
            }
        }"#,
    )
    .expect("write fixture");

    let champions_dir = dir.join("champions");
    let report = import_datadragon_file(&source, &champions_dir).expect("import should succeed");
    assert!(!report.has_failures());
    assert_eq!(report.imported.len(), 1);
    assert_eq!(report.imported[0].champion, "Annie");
    assert_eq!(report.imported[0].spell_count, 2);

    let annie = load_champion(&champions_dir, "annie").expect("imported file should load");
    assert_eq!(annie.spells[0].id, "aa");

    // cast times are 0 after import, so auto attacks with no cooldown are free
    let dummy = champion("Dummy", 300.0, Vec::new());
    let solution = fight(&annie.to_combatant(), &dummy.to_combatant());
    assert!(solution.is_lethal());
    assert_eq!(solution.benchmark, 0.0);

    let validation = validate_champion_path(&champions_dir).expect("validate dir");
    assert!(!validation.has_errors(), "{:?}", validation.diagnostics);

    let _ = fs::remove_dir_all(dir);
}

const TWO_CHAMPION_DOCUMENT: &str = r#"{
    "type": "champion",
    "data": {
        "Annie": {
            "id": "Annie",
            "name": "Annie",
            "stats": {"hp": 594, "attackdamage": 50},
            "spells": [{"id": "AnnieQ", "name": "Disintegrate", "maxrank": 1,
                        "cooldown": [4], "effect": [null, [80]]}]
        },
        "Garen": {
            "id": "Garen",
            "name": "Garen",
            "stats": {"hp": 690, "attackdamage": 69},
            "spells": []
        }
    }
}"#;

#[test]
fn full_document_imports_every_champion() {
    let dir = unique_temp_dir("import-all");
    let source = dir.join("championFull.json");
    fs::write(&source, TWO_CHAMPION_DOCUMENT).expect("write fixture");

    let champions_dir = dir.join("champions");
    let report = import_datadragon_file(&source, &champions_dir).expect("import should succeed");
    let names: Vec<_> = report.imported.iter().map(|c| c.champion.as_str()).collect();
    assert_eq!(names, vec!["Annie", "Garen"]);
    assert!(report.failed.is_empty());

    let stored = list_champions(&champions_dir).expect("list champions");
    assert_eq!(stored, vec!["annie".to_string(), "garen".to_string()]);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn one_unwritable_champion_does_not_stop_the_import() {
    let dir = unique_temp_dir("import-partial");
    let source = dir.join("championFull.json");
    fs::write(&source, TWO_CHAMPION_DOCUMENT).expect("write fixture");

    let champions_dir = dir.join("champions");
    // a directory where garen.yml should go makes that single write fail
    fs::create_dir_all(champion_path(&champions_dir, "garen")).expect("blocking dir");

    let report = import_datadragon_file(&source, &champions_dir).expect("import should run");
    assert!(report.has_failures());
    assert_eq!(report.imported.len(), 1);
    assert_eq!(report.imported[0].champion, "Annie");
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].key, "Garen");
    assert!(load_champion(&champions_dir, "annie").is_ok());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn validate_directory_collects_errors_from_every_file() {
    let dir = unique_temp_dir("validate");
    write_champion(
        &champion("Good", 500.0, vec![spell("q", vec![20.0], vec![1.0], 0.5)]),
        &champion_path(&dir, "good"),
    )
    .expect("write good");
    write_champion(
        &champion("Bad", -1.0, vec![spell("q", vec![20.0], vec![1.0], -0.5)]),
        &champion_path(&dir, "bad"),
    )
    .expect("write bad");

    let report = validate_champion_path(&dir).expect("validate dir");
    assert_eq!(report.error_count(), 2);

    let _ = fs::remove_dir_all(dir);
}
