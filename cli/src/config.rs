//! Optional TOML config plus environment overrides.
//!
//! Looked up at `{config_dir}/questlog/config.toml`. A missing file is not
//! an error; a malformed one is reported and the defaults are used.
//! `QUESTLOG_VARIANT` and `QUESTLOG_REDUCED_MOTION` override the file.

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use questlog_types::ui::UiOptions;
use questlog_types::Variant;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
pub struct QuestlogConfig {
    pub app: Option<AppSection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppSection {
    pub variant: Option<String>,
    pub ascii_only: Option<bool>,
    pub reduced_motion: Option<bool>,
}

impl QuestlogConfig {
    /// Load from the default path. `Ok(None)` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = Self::path() else {
            return Ok(None);
        };
        Self::from_path(&path)
    }

    pub fn from_path(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(source) => Err(ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("questlog").join("config.toml"))
    }
}

/// Final variant and UI options: env overrides config overrides defaults.
#[must_use]
pub fn resolve(config: Option<&QuestlogConfig>) -> (Variant, UiOptions) {
    let app = config.and_then(|cfg| cfg.app.as_ref());

    let variant = variant_from_env()
        .or_else(|| {
            let raw = app.and_then(|app| app.variant.as_deref())?;
            let parsed = Variant::parse(raw);
            if parsed.is_none() {
                tracing::warn!("Unknown variant in config: {}", raw);
            }
            parsed
        })
        .unwrap_or_default();

    let options = UiOptions {
        ascii_only: app.and_then(|app| app.ascii_only).unwrap_or(false),
        reduced_motion: bool_from_env("QUESTLOG_REDUCED_MOTION")
            .or_else(|| app.and_then(|app| app.reduced_motion))
            .unwrap_or(false),
    };

    (variant, options)
}

fn variant_from_env() -> Option<Variant> {
    let value = env::var("QUESTLOG_VARIANT").ok()?;
    let parsed = Variant::parse(&value);
    if parsed.is_none() {
        tracing::warn!("Unknown QUESTLOG_VARIANT: {}", value);
    }
    parsed
}

fn bool_from_env(name: &str) -> Option<bool> {
    let value = env::var(name).ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
