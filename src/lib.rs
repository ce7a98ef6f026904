// Viewprobe - introspection over reflectable component trees
//
// Producers describe their values through `Reflect`; the search engine walks the
// resulting views without knowing any concrete shape ahead of time.

pub mod config;
pub mod error;
pub mod reflect;
pub mod search;
pub mod symbols;

#[cfg(test)]
mod fixtures;

pub use config::{BundleConfig, ResolverConfig};
pub use error::ResourceError;
pub use reflect::{Field, Node, Reflect};
pub use search::{find_by_label, find_by_type, flatten_group};
pub use symbols::{LocationKind, ResolvedSymbol, SymbolResolver};
