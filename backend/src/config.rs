//! Application configuration file support.
//!
//! Settings are read from a TOML file and then overridden by environment
//! variables; command-line flags (in the binary) take precedence over both.
//!
//! ```toml
//! [catalog]
//! path = "small_dataset.tsv"
//! columns = ["ra_ep2000", "dec_ep2000", "b"]
//!
//! [query]
//! ra = 10.0
//! dec = 0.0
//! count = 5
//! fov_horizontal = 2.0
//! fov_vertical = 2.0
//!
//! [export]
//! directory = "out"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FovError, FovResult};
use crate::models::{BRIGHTNESS_COLUMN, DEC_COLUMN, RA_COLUMN};

/// Environment variable overriding `catalog.path`.
pub const ENV_CATALOG_PATH: &str = "FOV_CATALOG_PATH";
/// Environment variable overriding `export.directory`.
pub const ENV_EXPORT_DIR: &str = "FOV_EXPORT_DIR";
/// Environment variable overriding `ranking.sort_column`.
pub const ENV_SORT_COLUMN: &str = "FOV_SORT_COLUMN";

/// Full application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub query: QuerySettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub export: ExportSettings,
}

/// Where the catalog lives and which columns to project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_columns")]
    pub columns: Vec<String>,
}

/// Target and window; any value left out is asked for interactively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuerySettings {
    pub ra: Option<f64>,
    pub dec: Option<f64>,
    pub count: Option<usize>,
    pub fov_horizontal: Option<f64>,
    pub fov_vertical: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingSettings {
    #[serde(default = "default_sort_column")]
    pub sort_column: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_export_dir")]
    pub directory: PathBuf,
    #[serde(default = "default_header")]
    pub header: Vec<String>,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("small_dataset.tsv")
}

fn default_delimiter() -> String {
    "\t".to_string()
}

fn default_columns() -> Vec<String> {
    vec![
        RA_COLUMN.to_string(),
        DEC_COLUMN.to_string(),
        BRIGHTNESS_COLUMN.to_string(),
    ]
}

fn default_sort_column() -> String {
    BRIGHTNESS_COLUMN.to_string()
}

fn default_true() -> bool {
    true
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_header() -> Vec<String> {
    crate::io::DEFAULT_EXPORT_HEADER
        .iter()
        .map(|h| h.to_string())
        .collect()
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
            delimiter: default_delimiter(),
            columns: default_columns(),
        }
    }
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            sort_column: default_sort_column(),
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            directory: default_export_dir(),
            header: default_header(),
        }
    }
}

impl CatalogSettings {
    /// The delimiter as a single byte.
    pub fn delimiter_byte(&self) -> FovResult<u8> {
        match self.delimiter.as_bytes() {
            [b] => Ok(*b),
            _ => Err(FovError::config(format!(
                "catalog.delimiter must be a single byte, got {:?}",
                self.delimiter
            ))),
        }
    }
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> FovResult<Self> {
        toml::from_str(content)
            .map_err(|e| FovError::config(format!("Failed to parse config file: {}", e)))
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> FovResult<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| FovError::config(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from the first `fov.toml` found in the standard
    /// locations, or the defaults when there is none.
    ///
    /// Searches, in order: `fov.toml`, `backend/fov.toml`, `../fov.toml`.
    pub fn from_default_location() -> FovResult<Self> {
        let search_paths = [
            PathBuf::from("fov.toml"),
            PathBuf::from("backend/fov.toml"),
            PathBuf::from("../fov.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::debug!("Loading configuration from {}", path.display());
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Apply `FOV_*` environment overrides.
    pub fn apply_env(&mut self) {
        if let Ok(path) = env::var(ENV_CATALOG_PATH) {
            self.catalog.path = PathBuf::from(path);
        }
        if let Ok(dir) = env::var(ENV_EXPORT_DIR) {
            self.export.directory = PathBuf::from(dir);
        }
        if let Ok(column) = env::var(ENV_SORT_COLUMN) {
            self.ranking.sort_column = column;
        }
    }
}
