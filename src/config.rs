use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EwError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub economy: EconomyConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub documents: DocumentsConfig,
    #[serde(default)]
    pub robot: RobotConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>, ew_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("EW_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(ew_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let path = dirs::config_dir()
            .ok_or_else(|| EwError::MissingConfig("config directory not found".to_string()))?
            .join("everyday-winners/config.toml");
        Self::load_patch(&path)
    }

    fn load_project(ew_root: &Path) -> Result<Option<ConfigPatch>> {
        let path = ew_root.join("config.toml");
        Self::load_patch(&path)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| EwError::Config(format!("read config {}: {err}", path.display())))?;
        let mut patch: ConfigPatch = toml::from_str(&raw)
            .map_err(|err| EwError::Config(format!("parse config {}: {err}", path.display())))?;
        if let Some(base) = path.parent() {
            patch.resolve_paths(base);
        }
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.catalog {
            self.catalog.merge(patch);
        }
        if let Some(patch) = patch.economy {
            self.economy.merge(patch);
        }
        if let Some(patch) = patch.display {
            self.display.merge(patch);
        }
        if let Some(patch) = patch.documents {
            self.documents.merge(patch);
        }
        if let Some(patch) = patch.robot {
            self.robot.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("EW_CATALOG_PATH") {
            self.catalog.path = Some(PathBuf::from(value));
        }
        if let Some(value) = env_bool("EW_CATALOG_ALLOW_DUPLICATE_IDS") {
            self.catalog.allow_duplicate_ids = value;
        }

        if let Some(value) = env_u32("EW_ECONOMY_COINS")? {
            self.economy.coins = value;
        }
        if let Some(value) = env_u32("EW_ECONOMY_FLAMES")? {
            self.economy.flames = value;
        }
        if let Some(value) = env_u32("EW_ECONOMY_GEMS")? {
            self.economy.gems = value;
        }
        if let Some(value) = env_u32("EW_ECONOMY_ENERGY")? {
            self.economy.energy = value;
        }

        if let Some(value) = env_u32("EW_DISPLAY_TILE_WIDTH")? {
            self.display.tile_width = value;
        }
        if let Some(value) = env_bool("EW_DISPLAY_SHOW_HINTS") {
            self.display.show_hints = value;
        }
        if let Some(value) = env_bool("EW_DISPLAY_COLOR") {
            self.display.color = value;
        }

        if let Some(value) = env_u64("EW_DOCUMENTS_MAX_BYTES")? {
            self.documents.max_bytes = value;
        }
        if let Some(value) = env_u32("EW_DOCUMENTS_MAX_PARAGRAPHS")? {
            self.documents.max_paragraphs = value;
        }

        if let Some(value) = env_string("EW_ROBOT_FORMAT") {
            self.robot.format = value;
        }
        if let Some(value) = env_bool("EW_ROBOT_INCLUDE_METADATA") {
            self.robot.include_metadata = value;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file (TOML or JSON). The built-in catalog is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub allow_duplicate_ids: bool,
}

impl CatalogConfig {
    fn merge(&mut self, patch: CatalogPatch) {
        if let Some(value) = patch.path {
            self.path = Some(value);
        }
        if let Some(value) = patch.allow_duplicate_ids {
            self.allow_duplicate_ids = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    pub coins: u32,
    pub flames: u32,
    pub gems: u32,
    pub energy: u32,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            coins: 10,
            flames: 0,
            gems: 189,
            energy: 25,
        }
    }
}

impl EconomyConfig {
    fn merge(&mut self, patch: EconomyPatch) {
        if let Some(value) = patch.coins {
            self.coins = value;
        }
        if let Some(value) = patch.flames {
            self.flames = value;
        }
        if let Some(value) = patch.gems {
            self.gems = value;
        }
        if let Some(value) = patch.energy {
            self.energy = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub tile_width: u32,
    pub show_hints: bool,
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tile_width: 44,
            show_hints: true,
            color: true,
        }
    }
}

impl DisplayConfig {
    /// Tile width usable for title truncation.
    #[must_use]
    pub fn title_width(&self) -> usize {
        usize::try_from(self.tile_width).unwrap_or(usize::MAX)
    }

    fn merge(&mut self, patch: DisplayPatch) {
        if let Some(value) = patch.tile_width {
            self.tile_width = value;
        }
        if let Some(value) = patch.show_hints {
            self.show_hints = value;
        }
        if let Some(value) = patch.color {
            self.color = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentsConfig {
    pub max_bytes: u64,
    pub max_paragraphs: u32,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            max_bytes: 2 * 1024 * 1024,
            max_paragraphs: 200,
        }
    }
}

impl DocumentsConfig {
    fn merge(&mut self, patch: DocumentsPatch) {
        if let Some(value) = patch.max_bytes {
            self.max_bytes = value;
        }
        if let Some(value) = patch.max_paragraphs {
            self.max_paragraphs = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotConfig {
    pub format: String,
    pub include_metadata: bool,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            include_metadata: true,
        }
    }
}

impl RobotConfig {
    fn merge(&mut self, patch: RobotPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
        if let Some(value) = patch.include_metadata {
            self.include_metadata = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub catalog: Option<CatalogPatch>,
    pub economy: Option<EconomyPatch>,
    pub display: Option<DisplayPatch>,
    pub documents: Option<DocumentsPatch>,
    pub robot: Option<RobotPatch>,
}

impl ConfigPatch {
    /// Relative paths in a config file are relative to that file's directory.
    fn resolve_paths(&mut self, base: &Path) {
        let Some(path) = self.catalog.as_mut().and_then(|catalog| catalog.path.as_mut()) else {
            return;
        };
        if path.is_relative() {
            *path = base.join(&*path);
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CatalogPatch {
    pub path: Option<PathBuf>,
    pub allow_duplicate_ids: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct EconomyPatch {
    pub coins: Option<u32>,
    pub flames: Option<u32>,
    pub gems: Option<u32>,
    pub energy: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DisplayPatch {
    pub tile_width: Option<u32>,
    pub show_hints: Option<bool>,
    pub color: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DocumentsPatch {
    pub max_bytes: Option<u64>,
    pub max_paragraphs: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RobotPatch {
    pub format: Option<String>,
    pub include_metadata: Option<bool>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().map(|value| {
        matches!(
            value.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

fn env_u32(key: &str) -> Result<Option<u32>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<u32>().map(Some).map_err(|err| {
            EwError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}

fn env_u64(key: &str) -> Result<Option<u64>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<u64>().map(Some).map_err(|err| {
            EwError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}
