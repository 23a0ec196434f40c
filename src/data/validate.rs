use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::data::champion::{champion_path, list_champions, read_champion, ChampionRecord};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == ValidationSeverity::Error)
            .count()
    }

    pub fn extend(&mut self, other: ValidationReport) {
        self.diagnostics.extend(other.diagnostics);
    }
}

/// Checks the invariants the rotation search relies on: positive health and
/// per-rank tables long enough to hold the max-rank entry.
pub fn validate_champion(champion: &ChampionRecord) -> ValidationReport {
    let mut report = ValidationReport::default();
    let base_context = format!("champion '{}'", champion.id);

    if champion.name.trim().is_empty() {
        report.push(
            ValidationSeverity::Error,
            format!("{base_context}.name"),
            "missing non-empty 'name'",
        );
    }

    let health = champion.stats.health_points;
    if !(health.is_finite() && health > 0.0) {
        report.push(
            ValidationSeverity::Error,
            format!("{base_context}.stats.health_points"),
            format!("health must be positive, got {health}"),
        );
    }

    let mut seen_ids = HashSet::new();
    for (index, spell) in champion.spells.iter().enumerate() {
        let context = format!("{base_context}.spells[{index}] id='{}'", spell.id);

        if spell.id.trim().is_empty() {
            report.push(ValidationSeverity::Error, context.clone(), "missing non-empty 'id'");
        } else if !seen_ids.insert(spell.id.as_str()) {
            report.push(
                ValidationSeverity::Error,
                context.clone(),
                format!("duplicate spell id '{}'", spell.id),
            );
        }

        if spell.max_rank == 0 {
            report.push(
                ValidationSeverity::Error,
                format!("{context}.max_rank"),
                "max_rank must be at least 1",
            );
        }

        for (field, values) in [("damage", &spell.damage), ("cooldown", &spell.cooldown)] {
            // Missing ranks read as 0, which Data Dragon emits for utility spells.
            if values.len() < spell.max_rank {
                report.push(
                    ValidationSeverity::Warning,
                    format!("{context}.{field}"),
                    format!(
                        "expected {} rank value(s), found {}; missing ranks count as 0",
                        spell.max_rank,
                        values.len()
                    ),
                );
            }
            if values.iter().any(|value| !value.is_finite() || *value < 0.0) {
                report.push(
                    ValidationSeverity::Error,
                    format!("{context}.{field}"),
                    "values must be finite and non-negative",
                );
            }
        }

        if !spell.cast.is_finite() || spell.cast < 0.0 {
            report.push(
                ValidationSeverity::Error,
                format!("{context}.cast"),
                format!("cast time must be finite and non-negative, got {}", spell.cast),
            );
        }
    }

    if !champion.spells.iter().any(|spell| spell.is_usable()) {
        report.push(
            ValidationSeverity::Warning,
            format!("{base_context}.spells"),
            "no spell deals damage at max rank; no rotation can be lethal",
        );
    }

    report
}

/// Validates a single champion file, or every champion file when `path` is a directory.
pub fn validate_champion_path(path: &Path) -> Result<ValidationReport> {
    if !path.is_dir() {
        return Ok(validate_champion(&read_champion(path)?));
    }

    let mut report = ValidationReport::default();
    for name in list_champions(path)? {
        report.extend(validate_champion(&read_champion(&champion_path(path, &name))?));
    }
    Ok(report)
}
