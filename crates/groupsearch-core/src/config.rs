//! Configuration types for groupsearch.
//!
//! [`Config::load`] layers, in order: the built-in defaults below, an optional
//! TOML file, and `GROUPSEARCH__<SECTION>__<KEY>` environment variables.
//! [`Config::defaults`] returns the built-in defaults without touching the
//! filesystem or environment (useful in tests).

use anyhow::ensure;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
bind = "127.0.0.1:8080"

[store]
path      = "groups.db"
pool_size = 8

[search]
max_term_len       = 100
chunk_width        = 3
max_results        = 20
deterministic_ties = false
"#;

const ENV_PREFIX: &str = "GROUPSEARCH";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String { "127.0.0.1:8080".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

/// `[store]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

fn default_store_path() -> PathBuf { PathBuf::from("groups.db") }
fn default_pool_size() -> u32 { 8 }

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            pool_size: default_pool_size(),
        }
    }
}

/// `[search]` section — the knobs of the ranking algorithm.
///
/// Passed explicitly to [`search_groups`](crate::search_groups) and the query
/// builder so tests can vary them per call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    /// Longest accepted term, in characters.
    #[serde(default = "default_max_term_len")]
    pub max_term_len: usize,
    /// Width of each substring probe.
    #[serde(default = "default_chunk_width")]
    pub chunk_width: usize,
    /// Cap on the number of groups returned.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Break score ties by `name`, then `id`. Off by default, in which case the
    /// order of equally scored groups is whatever SQLite produces.
    #[serde(default)]
    pub deterministic_ties: bool,
}

fn default_max_term_len() -> usize { 100 }
fn default_chunk_width() -> usize { 3 }
fn default_max_results() -> usize { 20 }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_term_len: default_max_term_len(),
            chunk_width: default_chunk_width(),
            max_results: default_max_results(),
            deterministic_ties: false,
        }
    }
}

impl SearchConfig {
    /// Reject values the chunker and query builder cannot work with.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.chunk_width > 0, "search.chunk_width must be at least 1");
        ensure!(self.max_term_len > 0, "search.max_term_len must be at least 1");
        ensure!(self.max_results > 0, "search.max_results must be at least 1");
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load configuration layered on top of the built-in defaults.
    ///
    /// An explicit `path` must exist; otherwise the XDG location is read if it
    /// happens to be present.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::from(config_path().as_path()).required(false),
        };

        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        cfg.search.validate()?;
        Ok(cfg)
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
        .join("groupsearch")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
