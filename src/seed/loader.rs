//! Catalog files (TOML or JSON) and their validation.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{SectionInfo, builtin_catalog};
use crate::config::CatalogConfig;
use crate::core::{Catalog, Lesson};
use crate::error::{EwError, Result};

/// On-disk catalog layout.
///
/// ```toml
/// [[sections]]
/// key = 1
/// title = "Section 1 – FCRA Basics"
///
/// [[lessons]]
/// id = "S1P1"
/// title = "FCRA 101 Part 1 – Name the Parties"
/// kind = "reading"
/// total = 3
/// section = 1
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub sections: Vec<SectionInfo>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

/// A loaded catalog together with its section titles.
#[derive(Debug, Clone)]
pub struct SeedCatalog {
    pub sections: Vec<SectionInfo>,
    pub catalog: Catalog,
}

impl SeedCatalog {
    #[must_use]
    pub fn section_title(&self, key: u32) -> Option<&str> {
        self.sections
            .iter()
            .find(|section| section.key == key)
            .map(|section| section.title.as_str())
    }

    /// Title for display, falling back to `Section N`.
    #[must_use]
    pub fn section_label(&self, key: u32) -> String {
        self.section_title(key)
            .map_or_else(|| format!("Section {key}"), str::to_string)
    }

    #[must_use]
    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            sections: self.sections.clone(),
            lessons: self.catalog.lessons().to_vec(),
        }
    }
}

/// Load the catalog at `config.path`, or the built-in catalog when unset.
pub fn load_catalog(config: &CatalogConfig) -> Result<SeedCatalog> {
    match config.path.as_deref() {
        Some(path) => load_catalog_file(path, config.allow_duplicate_ids),
        None => {
            debug!("using built-in catalog");
            Ok(builtin_catalog())
        }
    }
}

pub fn load_catalog_file(path: &Path, allow_duplicate_ids: bool) -> Result<SeedCatalog> {
    from_file(read_catalog_file(path)?, allow_duplicate_ids)
}

/// Read and parse a catalog file without validating its lessons.
pub fn read_catalog_file(path: &Path) -> Result<CatalogFile> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| EwError::Catalog(format!("read catalog {}: {err}", path.display())))?;
    let file = parse_catalog(path, &raw)?;
    debug!(path = %path.display(), lessons = file.lessons.len(), "catalog file parsed");
    Ok(file)
}

fn parse_catalog(path: &Path, raw: &str) -> Result<CatalogFile> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("json") => serde_json::from_str(raw)
            .map_err(|err| EwError::Catalog(format!("parse catalog {}: {err}", path.display()))),
        Some("toml") | None => toml::from_str(raw)
            .map_err(|err| EwError::Catalog(format!("parse catalog {}: {err}", path.display()))),
        Some(other) => Err(EwError::Catalog(format!(
            "unsupported catalog format .{other} (expected .toml or .json)"
        ))),
    }
}

/// Validation summary for a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogReport {
    pub valid: bool,
    pub lessons: usize,
    pub sections: usize,
    pub duplicate_ids: Vec<String>,
    pub problems: Vec<String>,
}

/// Check a parsed catalog file. Duplicate ids only count as a problem when
/// they are not allowed.
#[must_use]
pub fn inspect(file: &CatalogFile, allow_duplicate_ids: bool) -> CatalogReport {
    let mut problems = Vec::new();
    if file.lessons.is_empty() {
        problems.push("catalog has no lessons".to_string());
    }
    for (idx, lesson) in file.lessons.iter().enumerate() {
        if lesson.id.trim().is_empty() {
            problems.push(format!("lesson #{} has an empty id", idx + 1));
        }
        if lesson.total == 0 {
            problems.push(format!("lesson {} has total = 0", lesson.id));
        }
    }

    let duplicate_ids = Catalog::new(file.lessons.clone()).duplicate_ids();
    if !duplicate_ids.is_empty() && !allow_duplicate_ids {
        problems.push(format!("duplicate lesson ids: {}", duplicate_ids.join(", ")));
    }

    let sections: HashSet<u32> = file.lessons.iter().map(|lesson| lesson.section).collect();
    CatalogReport {
        valid: problems.is_empty(),
        lessons: file.lessons.len(),
        sections: sections.len(),
        duplicate_ids,
        problems,
    }
}

/// Validate a parsed catalog file and normalise it to the initial state.
///
/// Any `unlocked`/`stars` values in the file are discarded.
pub fn from_file(file: CatalogFile, allow_duplicate_ids: bool) -> Result<SeedCatalog> {
    let report = inspect(&file, allow_duplicate_ids);
    if !report.valid {
        return Err(EwError::Catalog(report.problems.join("; ")));
    }
    if !report.duplicate_ids.is_empty() {
        warn!(
            ids = %report.duplicate_ids.join(","),
            "catalog contains duplicate lesson ids; completions apply to the first match"
        );
    }
    debug!(
        lessons = report.lessons,
        sections = report.sections,
        "catalog validated"
    );

    Ok(SeedCatalog {
        sections: file.sections,
        catalog: Catalog::new(file.lessons),
    })
}
