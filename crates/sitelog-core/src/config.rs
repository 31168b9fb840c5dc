//! Configuration types for sitelog.
//!
//! [`Config::load`] reads `~/.config/sitelog/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist, then applies `SITELOG__*`
//! environment overrides (`SITELOG__SERVER__BIND=127.0.0.1:8080`).
//! [`Config::defaults`] returns the same defaults without touching the
//! filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Error;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[parser]
site_prefix         = "I-KO-KLKT-ENB-"
chat_prefix_pattern = '^.*? - [^:]+:\s*'
media_markers       = ["<Media omitted>"]

[server]
bind             = "0.0.0.0:3000"
max_upload_bytes = 10485760
upload_field     = "dataFile"
"#;

const ENV_PREFIX: &str = "SITELOG";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/sitelog/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// `[parser]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    /// Fixed prefix of every long-form site identifier. Matched literally.
    #[serde(default = "default_site_prefix")]
    pub site_prefix: String,
    /// Regex for the timestamp/sender prefix stripped from each line.
    #[serde(default = "default_chat_prefix_pattern")]
    pub chat_prefix_pattern: String,
    /// Lines starting with any of these are dropped before extraction.
    #[serde(default = "default_media_markers")]
    pub media_markers: Vec<String>,
}

fn default_site_prefix() -> String { "I-KO-KLKT-ENB-".to_string() }
fn default_chat_prefix_pattern() -> String { r"^.*? - [^:]+:\s*".to_string() }
fn default_media_markers() -> Vec<String> { vec!["<Media omitted>".to_string()] }

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            site_prefix: default_site_prefix(),
            chat_prefix_pattern: default_chat_prefix_pattern(),
            media_markers: default_media_markers(),
        }
    }
}

/// `[server]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    /// Multipart field name carrying the uploaded log file.
    #[serde(default = "default_upload_field")]
    pub upload_field: String,
}

fn default_bind() -> String { "0.0.0.0:3000".to_string() }
fn default_max_upload_bytes() -> usize { 10 * 1024 * 1024 }
fn default_upload_field() -> String { "dataFile".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_upload_bytes: default_max_upload_bytes(),
            upload_field: default_upload_field(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/sitelog/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> Result<Self, Error> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load an explicit config file on top of the built-in defaults. A
    /// missing file is an error here, unlike [`Config::load`].
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("sitelog")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
