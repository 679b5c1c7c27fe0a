use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// Convention constants
// =============================================================================

/// Debian mirror preferred when the same header file is listed by several pools
pub const DEFAULT_TRUSTED_POOL: &str = "security.debian.org";

/// Marker in the file name of arch-independent Debian header packages
pub const DEFAULT_COMMON_MARKER: &str = "common";

/// Ubuntu backport releases that get their own build units
pub const DEFAULT_SUPPORTED_BACKPORTS: [&str; 2] = ["16.04", "20.04"];

/// File every Container-Optimized OS build directory must provide
pub const DEFAULT_COS_SOURCE_NAME: &str = "kernel-src.tar.gz";

/// Upstream kernel source archive paired with minikube configs.
/// `{major}` and `{version}` are substituted.
pub const DEFAULT_KERNEL_SOURCE_URL_TEMPLATE: &str =
    "https://cdn.kernel.org/pub/linux/kernel/v{major}.x/linux-{version}.tar.xz";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Grouping configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GrouperConfig {
    pub debian: DebianConfig,
    pub pairs: PairsConfig,
    pub cos: CosConfig,
    pub minikube: MinikubeConfig,
}

/// Debian strategy configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DebianConfig {
    /// Trusted pool markers, highest priority first
    pub trusted_pools: Vec<String>,
    /// Substring identifying the arch-independent header package
    pub common_marker: String,
}

impl Default for DebianConfig {
    fn default() -> Self {
        Self {
            trusted_pools: vec![DEFAULT_TRUSTED_POOL.to_string()],
            common_marker: DEFAULT_COMMON_MARKER.to_string(),
        }
    }
}

/// Ubuntu-style pairs strategy configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PairsConfig {
    /// Backport releases kept apart from the base version
    pub supported_backports: Vec<String>,
}

impl Default for PairsConfig {
    fn default() -> Self {
        Self {
            supported_backports: DEFAULT_SUPPORTED_BACKPORTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Container-Optimized OS strategy configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CosConfig {
    pub source_name: String,
}

impl Default for CosConfig {
    fn default() -> Self {
        Self {
            source_name: DEFAULT_COS_SOURCE_NAME.to_string(),
        }
    }
}

/// Minikube strategy configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MinikubeConfig {
    pub kernel_source_url_template: String,
}

impl Default for MinikubeConfig {
    fn default() -> Self {
        Self {
            kernel_source_url_template: DEFAULT_KERNEL_SOURCE_URL_TEMPLATE.to_string(),
        }
    }
}

impl GrouperConfig {
    /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let body = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the explicitly given file, or the default config file when it
    /// exists, or fall back to defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = config_path();
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Returns the path to the config file for kernel-grouper.
/// Uses $XDG_CONFIG_HOME/kernel-grouper if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/kernel-grouper,
/// or ./kernel-grouper if neither is available.
pub fn config_path() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
        .join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("kernel-grouper")
}
