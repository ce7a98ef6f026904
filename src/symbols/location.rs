// Image symbol lookup
//
// A named image looks like `image -> ... -> base -> { name, location, ... }`.
// The provider is found with `find_by_label`; `location` and `name` are read from
// its own fields only, never from anything nested inside them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::reflect::Node;
use crate::search::find_by_label;

pub const BASE_LABEL: &str = "base";
pub const LOCATION_LABEL: &str = "location";
pub const NAME_LABEL: &str = "name";

/// Where a symbolic image comes from
///
/// Only these two sources carry a symbol name; any other location (asset
/// catalogs, explicit bundles, files) is not a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocationKind {
    /// Standard system symbol set
    System,
    /// Symbols shipped in the private resource bundle
    PrivateSystem,
}

impl LocationKind {
    pub fn from_description(description: &str) -> Option<Self> {
        match description {
            "system" => Some(LocationKind::System),
            "privateSystem" => Some(LocationKind::PrivateSystem),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKind::System => "system",
            LocationKind::PrivateSystem => "privateSystem",
        }
    }
}

impl std::fmt::Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base provider of an image together with its location, if that location is
/// one of the symbol sources
fn symbol_base(image: Node<'_>) -> Option<(Node<'_>, LocationKind)> {
    let base = find_by_label(image, BASE_LABEL)?;
    let description = base.field(LOCATION_LABEL)?.describe()?;

    match LocationKind::from_description(&description) {
        Some(location) => Some((base, location)),
        None => {
            debug!(location = %description, "image location is not a symbol source");
            None
        }
    }
}

/// Location of the image's base provider, if it is one of the symbol sources
pub fn symbol_location(image: Node<'_>) -> Option<LocationKind> {
    symbol_base(image).map(|(_, location)| location)
}

/// Symbolic name of an image, when its base provider is a symbol source
pub fn symbol_name(image: Node<'_>) -> Option<String> {
    image_symbol(image).map(|(name, _)| name)
}

/// Symbolic name and location in one pass
pub fn image_symbol(image: Node<'_>) -> Option<(String, LocationKind)> {
    let (base, location) = symbol_base(image)?;
    let name = base.field(NAME_LABEL)?.text()?;
    Some((name.to_string(), location))
}
