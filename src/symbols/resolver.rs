// Symbol resolution
//
// Combines the label lookups with the bundle loader. The private bundle is
// loaded lazily, at most once per resolver, and only for private symbols.

use once_cell::sync::OnceCell;
use serde::Serialize;
use std::any::Any;
use tracing::{debug, warn};

use super::bundle::{Bundle, BundleLoader, FsBundleLoader};
use super::location::{image_symbol, LocationKind};
use crate::config::ResolverConfig;
use crate::reflect::Node;
use crate::search::find_node_by_type;

/// A symbolic image name plus the resources needed to draw it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedSymbol {
    pub name: String,
    pub location: LocationKind,
    /// Private bundle for `PrivateSystem` symbols; `None` for system symbols or
    /// when the bundle could not be loaded
    pub bundle: Option<Bundle>,
}

pub struct SymbolResolver<L: BundleLoader = FsBundleLoader> {
    loader: L,
    bundle: OnceCell<Option<Bundle>>,
}

impl SymbolResolver<FsBundleLoader> {
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(FsBundleLoader::new(config.bundle.clone()))
    }
}

impl<L: BundleLoader> SymbolResolver<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            bundle: OnceCell::new(),
        }
    }

    /// The private bundle, loaded on first use
    ///
    /// A load failure is logged once and remembered as `None`.
    pub fn private_bundle(&self) -> Option<&Bundle> {
        self.bundle
            .get_or_init(|| match self.loader.load_private_bundle() {
                Ok(bundle) => Some(bundle),
                Err(e) => {
                    warn!("⚠️  Private resource bundle unavailable: {}", e);
                    None
                }
            })
            .as_ref()
    }

    /// Resolve an image node to its symbol
    pub fn resolve(&self, image: Node<'_>) -> Option<ResolvedSymbol> {
        let (name, location) = image_symbol(image)?;

        let bundle = match location {
            LocationKind::System => None,
            LocationKind::PrivateSystem => self.private_bundle().cloned(),
        };

        if let Some(bundle) = &bundle {
            if !bundle.contains_symbol(&name) {
                debug!(symbol = %name, bundle = %bundle.identifier, "symbol not listed in bundle");
            }
        }

        debug!(symbol = %name, location = %location, "resolved image symbol");
        Some(ResolvedSymbol {
            name,
            location,
            bundle,
        })
    }

    /// Find the first value of image type `I` below `root` and resolve it
    pub fn find_symbol<I: Any>(&self, root: Node<'_>) -> Option<ResolvedSymbol> {
        self.resolve(find_node_by_type::<I>(root)?)
    }
}
