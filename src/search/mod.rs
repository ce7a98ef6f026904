//! Tree Search Engine
//!
//! Depth-first, pre-order search over [`Node`](crate::reflect::Node) views:
//! - `find_by_type` - first value of an exact runtime type
//! - `find_by_label` - first field with a given label
//! - `flatten_group` - immediate members of a group node
//!
//! All searches are total. A miss is `None` (or an empty `Vec`), never an error.

pub mod tree_methods;

pub use tree_methods::{
    find_all, find_all_by_label, find_all_by_type, find_by_label, find_by_type, find_first,
    find_node_by_type, flatten_group, flatten_group_where, walk_tree,
};
