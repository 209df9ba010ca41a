//! Error types for everyday_winners.
//!
//! The progression core never fails: unknown lessons are skipped and star
//! arithmetic is clamped. Everything here belongs to the collaborators around
//! it (configuration, catalog files, document uploads, CLI lookups).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EwError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("missing configuration: {0}")]
    MissingConfig(String),

    #[error("invalid catalog: {0}")]
    Catalog(String),

    #[error("document error: {0}")]
    Document(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}

impl EwError {
    /// Stable machine-readable code used in robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::MissingConfig(_) => "missing_config",
            Self::Catalog(_) => "invalid_catalog",
            Self::Document(_) => "document",
            Self::NotFound(_) => "not_found",
            Self::Terminal(_) => "terminal",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
            Self::TomlDe(_) | Self::TomlSer(_) => "toml",
        }
    }
}

pub type Result<T> = std::result::Result<T, EwError>;
