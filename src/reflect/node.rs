// Reflectable node views
//
// `Reflect` is the one capability the search engine needs from a value producer.
// `Node` and `Field` are throwaway views derived from a value on demand; they own
// nothing and carry no identity between calls.

use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::fmt;

/// Access to the concrete `'static` type behind a trait object
///
/// Blanket-implemented for every `'static` type, so producers never implement it
/// by hand. Calling it through `&dyn Reflect` dispatches to the concrete type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// A value that can describe its own structure
///
/// Implemented once per concrete kind by whoever produces the tree. All methods
/// must be pure: deriving fields twice from the same value yields the same labels
/// in the same order.
pub trait Reflect: AsAny {
    /// Named structural members, in declaration order
    fn fields(&self) -> Vec<Field<'_>> {
        Vec::new()
    }

    /// Ordered child group, for values that represent a fixed-arity group
    fn group(&self) -> Option<Vec<Node<'_>>> {
        None
    }

    /// String representation of the value, if it has a meaningful one
    fn describe(&self) -> Option<String> {
        None
    }
}

/// A view over one value in the tree
#[derive(Clone, Copy)]
pub struct Node<'a> {
    value: &'a dyn Reflect,
}

impl<'a> Node<'a> {
    pub fn new(value: &'a dyn Reflect) -> Self {
        Self { value }
    }

    /// The wrapped value
    pub fn value(&self) -> &'a dyn Reflect {
        self.value
    }

    /// Exact runtime type token of the wrapped value
    pub fn type_id(&self) -> TypeId {
        self.value.as_any().type_id()
    }

    pub fn type_name(&self) -> &'static str {
        self.value.type_name()
    }

    /// True only for the identical runtime type, never for a wrapper around it
    pub fn is<T: Any>(&self) -> bool {
        self.type_id() == TypeId::of::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&'a T> {
        let value: &'a dyn Reflect = self.value;
        value.as_any().downcast_ref::<T>()
    }

    pub fn fields(&self) -> Vec<Field<'a>> {
        let value: &'a dyn Reflect = self.value;
        value.fields()
    }

    /// Shallow lookup of a direct field by label
    pub fn field(&self, label: &str) -> Option<Node<'a>> {
        self.fields()
            .into_iter()
            .find(|field| field.label() == label)
            .map(|field| field.value())
    }

    pub fn has_fields(&self) -> bool {
        !self.fields().is_empty()
    }

    pub fn group(&self) -> Option<Vec<Node<'a>>> {
        let value: &'a dyn Reflect = self.value;
        value.group()
    }

    pub fn is_group(&self) -> bool {
        self.group().is_some()
    }

    pub fn describe(&self) -> Option<String> {
        self.value.describe()
    }

    /// String payload, when the wrapped value is a `String` or `&'static str`
    pub fn text(&self) -> Option<&'a str> {
        if let Some(text) = self.downcast_ref::<String>() {
            return Some(text.as_str());
        }
        self.downcast_ref::<&'static str>().copied()
    }
}

impl<'a, T: Reflect> From<&'a T> for Node<'a> {
    fn from(value: &'a T) -> Self {
        Node::new(value)
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("Node");
        out.field("type", &self.type_name());
        if let Some(description) = self.describe() {
            out.field("description", &description);
        }
        out.finish()
    }
}

/// A labelled member of a node
#[derive(Clone, Debug)]
pub struct Field<'a> {
    label: Cow<'a, str>,
    value: Node<'a>,
}

impl<'a> Field<'a> {
    pub fn new(label: impl Into<Cow<'a, str>>, value: &'a dyn Reflect) -> Self {
        Self {
            label: label.into(),
            value: Node::new(value),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> Node<'a> {
        self.value
    }
}
