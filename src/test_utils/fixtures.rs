use std::path::PathBuf;

use tempfile::TempDir;

/// Catalog file with two short sections, used across tests.
pub const SMALL_CATALOG_TOML: &str = r#"
[[sections]]
key = 1
title = "Basics"

[[sections]]
key = 2
title = "Wrap-up"

[[lessons]]
id = "A1"
title = "First steps"
kind = "reading"
total = 2
section = 1

[[lessons]]
id = "A2"
title = "Quiz"
kind = "core"
total = 1
section = 1

[[lessons]]
id = "B1"
title = "Listen in"
kind = "listening"
total = 3
section = 2
"#;

/// Test fixture providing isolated filesystem environment.
pub struct UnitTestFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl Default for UnitTestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitTestFixture {
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            data_path,
        }
    }

    /// Create a test file with content.
    #[must_use]
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.data_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Write [`SMALL_CATALOG_TOML`] as `catalog.toml`.
    #[must_use]
    pub fn create_small_catalog(&self) -> PathBuf {
        self.create_file("catalog.toml", SMALL_CATALOG_TOML)
    }

    /// Write a `config.toml` pointing `[catalog] path` at `catalog`, plus
    /// any extra TOML.
    #[must_use]
    pub fn create_config(&self, catalog: Option<&std::path::Path>, extra: &str) -> PathBuf {
        let mut content = String::new();
        if let Some(catalog) = catalog {
            content.push_str(&format!("[catalog]\npath = {:?}\n\n", catalog.display().to_string()));
        }
        content.push_str(extra);
        self.create_file("config.toml", &content)
    }
}
