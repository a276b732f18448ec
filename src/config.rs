use crate::error::{Result, VersionGateError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "versiongate.toml";
pub const BASE_REF_ENV: &str = "GITHUB_BASE_REF";
pub const EVENT_PATH_ENV: &str = "GITHUB_EVENT_PATH";

/// Represents the complete configuration for version-gate.
///
/// Every key is optional; defaults describe the conventional layout with the
/// version file at `Docs/version.json` and a single `release` label.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_version_path")]
    pub version_path: String,

    #[serde(default = "default_release_labels")]
    pub release_labels: Vec<String>,

    #[serde(default)]
    pub baseline: BaselineConfig,

    #[serde(default)]
    pub change_detection: ChangeDetectionConfig,
}

fn default_version_path() -> String {
    "Docs/version.json".to_string()
}

fn default_release_labels() -> Vec<String> {
    vec!["release".to_string()]
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Returns the ordered list of fallback baseline references.
fn default_candidates() -> Vec<String> {
    vec![
        "origin/main".to_string(),
        "origin/master".to_string(),
        "main".to_string(),
        "master".to_string(),
    ]
}

/// How the baseline reference is chosen.
///
/// An explicit target branch is qualified with `remote`; otherwise the first
/// existing entry of `candidates` wins.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BaselineConfig {
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_candidates")]
    pub candidates: Vec<String>,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        BaselineConfig {
            remote: default_remote(),
            candidates: default_candidates(),
        }
    }
}

/// Controls what happens when the diff query itself fails.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ChangeDetectionConfig {
    /// Treat a failed diff as fatal instead of "no change"
    #[serde(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version_path: default_version_path(),
            release_labels: default_release_labels(),
            baseline: BaselineConfig::default(),
            change_detection: ChangeDetectionConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versiongate.toml` in the repository root
/// 3. `.versiongate.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, root: &Path) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(root),
    };

    let Some(path) = path else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        VersionGateError::config(format!("cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&config_str)
        .map_err(|e| VersionGateError::config(format!("invalid {}: {}", path.display(), e)))
}

fn discover_config(root: &Path) -> Option<PathBuf> {
    let local = root.join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(format!(".{}", CONFIG_FILE_NAME)))
        .filter(|path| path.exists())
}

/// Values the CI runner provides through the environment.
///
/// Library code never reads the environment itself; it receives a
/// `CiEnvironment` built here or from CLI arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CiEnvironment {
    /// Target branch of the pull request being validated
    pub base_ref: Option<String>,

    /// Path to the JSON event payload
    pub event_path: Option<PathBuf>,
}

impl CiEnvironment {
    /// Build from explicit values, treating empty strings as unset
    pub fn new(base_ref: Option<String>, event_path: Option<PathBuf>) -> Self {
        CiEnvironment {
            base_ref: base_ref.filter(|r| !r.trim().is_empty()),
            event_path: event_path.filter(|p| !p.as_os_str().is_empty()),
        }
    }

    /// Read `GITHUB_BASE_REF` and `GITHUB_EVENT_PATH`
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(BASE_REF_ENV).ok(),
            std::env::var_os(EVENT_PATH_ENV).map(PathBuf::from),
        )
    }
}
