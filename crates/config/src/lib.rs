//! Configuration for building a MIME database.
//!
//! Configuration is layered with [`figment`], later layers winning:
//!
//! 1. built-in defaults (the bundled database, no extra types),
//! 2. a configuration file in TOML, YAML or JSON (picked by file extension),
//! 3. environment variables prefixed with `MIMER_` (`MIMER_DATABASE=/path/to/db.json`).
//!
//! ```toml
//! # Replace the bundled database entirely.
//! database = "/usr/share/mime-db/db.json"
//!
//! # Add or replace individual definitions on top of it.
//! [types."application/x-mimer"]
//! source = "iana"
//! extensions = ["mimer"]
//! ```

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use mimer_db::{Database, Entry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "MIMER_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// A `mime-db` formatted JSON file used instead of the bundled database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
    /// Definitions added to (or replacing those in) the database.
    pub types: BTreeMap<String, Entry>,
}
impl Config {
    /// Location of the per-user configuration file, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "mimer").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// The layered configuration sources, without extracting them.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
                Some("json") => figment.merge(Json::file(path)),
                _ => figment.merge(Toml::file(path)),
            };
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load configuration from the per-user configuration file (when present)
    /// and the environment.
    #[instrument(level = "debug")]
    pub fn load() -> Result<Self> {
        let path = Self::default_path().filter(|path| path.is_file());
        if path.is_none() {
            tracing::debug!("No configuration file found; using defaults and environment");
        }
        Self::extract(Self::figment(path.as_deref()))
    }

    /// Load configuration from a specific file and the environment.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            exn::bail!(ErrorKind::NotFound(path.to_path_buf()));
        }
        Self::extract(Self::figment(Some(path)))
    }

    fn extract(figment: Figment) -> Result<Self> {
        figment.extract().or_raise(|| ErrorKind::Config)
    }

    /// Assemble the effective database: the configured (or bundled) database
    /// with the configured types layered on top.
    #[instrument(skip_all)]
    pub fn database(&self) -> Result<Database> {
        let mut db = match &self.database {
            Some(path) => Database::from_path(path).or_raise(|| ErrorKind::Database)?,
            None => {
                tracing::info!("No database configured; using bundled MIME database");
                Database::bundled().or_raise(|| ErrorKind::Database)?
            },
        };
        if !self.types.is_empty() {
            tracing::debug!(types = self.types.len(), "Applying configured MIME type definitions");
            db.extend(self.types.iter().map(|(mime_type, entry)| (mime_type, entry.clone())));
        }
        Ok(db)
    }
}
