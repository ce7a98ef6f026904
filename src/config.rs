// Resolver configuration
//
// Loaded from JSON; every field has a default so partial files are fine.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the default bundle search paths
pub const BUNDLE_PATH_ENV: &str = "VIEWPROBE_BUNDLE_PATH";

const DEFAULT_BUNDLE_NAME: &str = "SFSymbols";
const DEFAULT_SEARCH_PATH: &str = "/System/Library/PrivateFrameworks";

static DEFAULT_SEARCH_PATHS: Lazy<Vec<PathBuf>> =
    Lazy::new(|| match std::env::var_os(BUNDLE_PATH_ENV) {
        Some(paths) => std::env::split_paths(&paths).collect(),
        None => vec![PathBuf::from(DEFAULT_SEARCH_PATH)],
    });

/// Where to look for the private resource bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleConfig {
    /// Bundle name, without the `.bundle` extension
    pub name: String,
    /// Directories searched in order
    pub search_paths: Vec<PathBuf>,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_BUNDLE_NAME.to_string(),
            search_paths: DEFAULT_SEARCH_PATHS.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub bundle: BundleConfig,
}

impl ResolverConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse resolver config")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read resolver config '{}'", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Invalid resolver config '{}'", path.display()))
    }
}
