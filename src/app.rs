use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::core::SharedEngine;
use crate::error::{EwError, Result};
use crate::seed::{SeedCatalog, Wallet, load_catalog};

/// Everything a command needs for one session. Nothing here outlives the
/// process.
pub struct AppContext {
    pub ew_root: PathBuf,
    pub config_path: PathBuf,
    pub config: Config,
    pub seed: SeedCatalog,
    pub engine: SharedEngine,
    pub wallet: Wallet,
    pub robot_mode: bool,
    pub output_format: OutputFormat,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let ew_root = Self::find_ew_root()?;
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| default_config_path(&ew_root));
        let config = Config::load(cli.config.as_deref(), &ew_root)?;
        let output_format = match (cli.format, cli.robot) {
            (None, true) => OutputFormat::from_config_name(&config.robot.format),
            _ => cli.output_format(),
        };
        Self::with_config(config, ew_root, config_path, output_format, cli.verbose)
    }

    /// Build a session from an already-resolved configuration.
    pub fn with_config(
        config: Config,
        ew_root: PathBuf,
        config_path: PathBuf,
        output_format: OutputFormat,
        verbosity: u8,
    ) -> Result<Self> {
        let seed = load_catalog(&config.catalog)?;
        let engine = SharedEngine::new(seed.catalog.clone());
        let wallet = Wallet::from(&config.economy);

        Ok(Self {
            ew_root,
            config_path,
            config,
            seed,
            engine,
            wallet,
            robot_mode: output_format.is_robot(),
            output_format,
            verbosity,
        })
    }

    /// Emit a robot payload honoring `[robot]` config.
    pub fn emit_robot<T: serde::Serialize>(&self, data: T) -> Result<()> {
        crate::cli::output::emit_data(self.output_format, self.config.robot.include_metadata, data)
    }

    fn find_ew_root() -> Result<PathBuf> {
        if let Ok(root) = std::env::var("EW_ROOT") {
            return Ok(PathBuf::from(root));
        }
        let cwd = std::env::current_dir()?;
        if let Some(found) = find_upwards(&cwd, ".ew") {
            return Ok(found);
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| EwError::MissingConfig("data directory not found".to_string()))?;
        Ok(data_dir.join("everyday-winners"))
    }
}

fn default_config_path(ew_root: &Path) -> PathBuf {
    if ew_root.ends_with(".ew") {
        ew_root.join("config.toml")
    } else {
        dirs::config_dir()
            .unwrap_or_else(|| ew_root.to_path_buf())
            .join("everyday-winners/config.toml")
    }
}

fn find_upwards(start: &Path, name: &str) -> Option<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        let candidate = dir.join(name);
        if candidate.is_dir() {
            return Some(candidate);
        }
        current = dir.parent();
    }
    None
}
