// Error types
//
// Searches never fail; a miss is `None`. The only fallible collaborator is the
// private resource bundle loader.

use std::path::PathBuf;
use thiserror::Error;

/// Why the private resource bundle could not be produced
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No bundle directory with the configured name in any search path
    #[error("bundle '{name}' not found (searched: {searched:?})")]
    BundleNotFound { name: String, searched: Vec<PathBuf> },

    /// The bundle exists but has no manifest to load it through
    #[error("bundle at '{}' has no manifest", path.display())]
    ManifestMissing { path: PathBuf },

    #[error("failed to load bundle manifest '{}'", path.display())]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid bundle manifest '{}'", path.display())]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
