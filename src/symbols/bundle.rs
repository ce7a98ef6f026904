// Private resource bundle loading
//
// A bundle is a `<name>.bundle` directory holding a `manifest.json`. The loader is
// a trait so hosts with their own bundle mechanism can plug it in.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::BundleConfig;
use crate::error::ResourceError;

pub const BUNDLE_EXTENSION: &str = "bundle";
pub const MANIFEST_FILE: &str = "manifest.json";

/// A loaded resource namespace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub identifier: String,
    pub path: PathBuf,
    /// Symbols the bundle declares; empty when the manifest doesn't list them
    pub symbols: Vec<String>,
}

impl Bundle {
    /// Whether the bundle can supply `name`
    ///
    /// A bundle without a symbol list is assumed to supply everything.
    pub fn contains_symbol(&self, name: &str) -> bool {
        self.symbols.is_empty() || self.symbols.iter().any(|symbol| symbol == name)
    }
}

#[derive(Debug, Deserialize)]
struct Manifest {
    identifier: String,
    #[serde(default)]
    symbols: Vec<String>,
}

/// Capability to produce the private resource bundle
pub trait BundleLoader {
    fn load_private_bundle(&self) -> Result<Bundle, ResourceError>;
}

/// Loads the bundle from the filesystem, trying each search path in order
#[derive(Debug, Clone)]
pub struct FsBundleLoader {
    config: BundleConfig,
}

impl FsBundleLoader {
    pub fn new(config: BundleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BundleConfig {
        &self.config
    }

    fn locate(&self) -> Result<PathBuf, ResourceError> {
        let directory = format!("{}.{}", self.config.name, BUNDLE_EXTENSION);

        self.config
            .search_paths
            .iter()
            .map(|root| root.join(&directory))
            .find(|candidate| candidate.is_dir())
            .ok_or_else(|| ResourceError::BundleNotFound {
                name: self.config.name.clone(),
                searched: self.config.search_paths.clone(),
            })
    }

    fn read_manifest(bundle_path: &Path) -> Result<Manifest, ResourceError> {
        let manifest_path = bundle_path.join(MANIFEST_FILE);
        if !manifest_path.is_file() {
            return Err(ResourceError::ManifestMissing {
                path: bundle_path.to_path_buf(),
            });
        }

        let content =
            std::fs::read_to_string(&manifest_path).map_err(|source| ResourceError::LoadFailed {
                path: manifest_path.clone(),
                source,
            })?;

        serde_json::from_str(&content).map_err(|source| ResourceError::InvalidManifest {
            path: manifest_path,
            source,
        })
    }
}

impl BundleLoader for FsBundleLoader {
    fn load_private_bundle(&self) -> Result<Bundle, ResourceError> {
        let path = self.locate()?;
        let manifest = Self::read_manifest(&path)?;

        debug!(
            identifier = %manifest.identifier,
            path = %path.display(),
            symbols = manifest.symbols.len(),
            "loaded private bundle"
        );

        Ok(Bundle {
            identifier: manifest.identifier,
            path,
            symbols: manifest.symbols,
        })
    }
}
