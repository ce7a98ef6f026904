// Reflectable Node abstraction
//
// The search engine only ever sees values through this module:
// - node.rs: the `Reflect` capability plus the `Node` / `Field` views
// - impls.rs: `Reflect` for std scalars, containers and tuples
// - macros.rs: `reflect_struct!` for producer-side structs

mod impls;
pub mod macros;
pub mod node;

pub use node::{AsAny, Field, Node, Reflect};
