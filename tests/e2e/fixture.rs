//! Isolated `ew` environment for workflow tests.

use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.stdout).unwrap_or_else(|err| {
            panic!("invalid JSON ({err}):\n{}\nstderr:\n{}", self.stdout, self.stderr)
        })
    }
}

pub struct TestFixture {
    pub name: String,
    pub temp_dir: TempDir,
    pub root: PathBuf,
    pub config_path: PathBuf,
}

impl TestFixture {
    pub fn new(name: &str) -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let root = temp_dir.path().join(".ew");
        std::fs::create_dir_all(&root).expect("create .ew");
        let config_path = root.join("config.toml");
        Self {
            name: name.to_string(),
            temp_dir,
            root,
            config_path,
        }
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(&self.config_path, content).expect("write config");
    }

    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(relative);
        std::fs::write(&path, content).expect("write file");
        path
    }

    pub fn run_ew(&self, args: &[&str]) -> CommandOutput {
        let output = Command::new(env!("CARGO_BIN_EXE_ew"))
            .current_dir(self.temp_dir.path())
            .env("EW_ROOT", &self.root)
            .env("EW_CONFIG", &self.config_path)
            .env("EW_DISPLAY_COLOR", "false")
            .env_remove("EW_ROBOT")
            .env_remove("EW_CATALOG_PATH")
            .env_remove("RUST_LOG")
            .args(args)
            .output()
            .expect("run ew");
        let result = CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        if !result.success {
            eprintln!("[{}] ew {:?} failed:\n{}", self.name, args, result.stderr);
        }
        result
    }
}
