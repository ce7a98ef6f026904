//! Image symbol resolution
//!
//! Layered on the search engine, never extending it:
//! - `location.rs` - symbol name and location lookup through `find_by_label`
//! - `bundle.rs` - private resource bundle loading
//! - `resolver.rs` - `SymbolResolver`, tying the two together

pub mod bundle;
pub mod location;
pub mod resolver;

pub use bundle::{Bundle, BundleLoader, FsBundleLoader};
pub use location::{image_symbol, symbol_location, symbol_name, LocationKind};
pub use resolver::{ResolvedSymbol, SymbolResolver};
