//! Plain-text fight reports (`fights/<attacker>_vs_<target>.loltactics`).

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::data::champion::champion_key;
use crate::error::{Result, TacticsError};
use crate::tactics::Solution;

pub const REPORT_FILE_EXTENSION: &str = "loltactics";

/// Champion names are reduced to their file keys, as for champion files.
pub fn fight_report_path(dir: &Path, attacker: &str, target: &str) -> PathBuf {
    dir.join(format!(
        "{}_vs_{}.{REPORT_FILE_EXTENSION}",
        champion_key(attacker),
        champion_key(target)
    ))
}

/// One line per cast with the target health before and after it, then the
/// total time. A rotation that never kills is reported as such.
pub fn render_report(solution: &Solution, target_health: f64) -> String {
    if !solution.is_lethal() {
        return "No lethal rotation found\n".to_string();
    }

    let mut out = String::new();
    let mut hp = target_health;
    for ability in &solution.rotation {
        let damage = ability.max_rank_damage();
        let _ = writeln!(
            &mut out,
            "{}: {:.2} (hp: {:.2} -> {:.2})",
            ability.id,
            damage,
            hp,
            hp - damage
        );
        hp -= damage;
    }
    let _ = write!(&mut out, "\nEnemy defeated in {:.2}s\n", solution.benchmark);
    out
}

pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| TacticsError::io(parent, err))?;
    }
    fs::write(path, contents).map_err(|err| TacticsError::io(path, err))
}
