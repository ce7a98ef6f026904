// Tree navigation methods for reflectable nodes
//
// Every search here walks fields in pre-order, left to right, starting from the
// root's own fields. The walk keeps its own stack instead of recursing, so chain
// depth is bounded by memory rather than by the thread's call stack.

use std::any::Any;

use tracing::trace;

use crate::reflect::{Field, Node};

/// Push a node's fields so that they pop in declared order
fn push_fields<'a>(pending: &mut Vec<Field<'a>>, node: Node<'a>) {
    pending.extend(node.fields().into_iter().rev());
}

/// First field (pre-order, left to right) for which `matcher` returns a value
///
/// Shared primitive behind `find_by_type` and `find_by_label`. The root itself is
/// never offered to `matcher`; only fields reachable from it are. Stops at the
/// first hit.
pub fn find_first<'a, R, F>(root: Node<'a>, mut matcher: F) -> Option<R>
where
    F: FnMut(&Field<'a>) -> Option<R>,
{
    let mut pending = Vec::new();
    push_fields(&mut pending, root);

    while let Some(field) = pending.pop() {
        if let Some(found) = matcher(&field) {
            trace!(label = field.label(), "search matched");
            return Some(found);
        }
        push_fields(&mut pending, field.value());
    }

    None
}

/// Every field value `matcher` accepts, in pre-order
pub fn find_all<'a, R, F>(root: Node<'a>, mut matcher: F) -> Vec<R>
where
    F: FnMut(&Field<'a>) -> Option<R>,
{
    let mut results = Vec::new();
    let mut pending = Vec::new();
    push_fields(&mut pending, root);

    while let Some(field) = pending.pop() {
        if let Some(found) = matcher(&field) {
            results.push(found);
        }
        push_fields(&mut pending, field.value());
    }

    results
}

/// First value whose runtime type is exactly `T`
pub fn find_by_type<'a, T: Any>(root: Node<'a>) -> Option<&'a T> {
    find_first(root, |field| field.value().downcast_ref::<T>())
}

/// Node view of the first value whose runtime type is exactly `T`
pub fn find_node_by_type<'a, T: Any>(root: Node<'a>) -> Option<Node<'a>> {
    find_first(root, |field| field.value().is::<T>().then(|| field.value()))
}

/// Every value whose runtime type is exactly `T`, in pre-order
///
/// Matches are also descended into, so a `T` nested inside another `T` is
/// reported after its container.
pub fn find_all_by_type<'a, T: Any>(root: Node<'a>) -> Vec<&'a T> {
    find_all(root, |field| field.value().downcast_ref::<T>())
}

/// Value of the first field labelled `label`
///
/// Only the label is compared; the field value can be of any type.
pub fn find_by_label<'a>(root: Node<'a>, label: &str) -> Option<Node<'a>> {
    find_first(root, |field| (field.label() == label).then(|| field.value()))
}

/// Values of every field labelled `label`, in pre-order
pub fn find_all_by_label<'a>(root: Node<'a>, label: &str) -> Vec<Node<'a>> {
    find_all(root, |field| (field.label() == label).then(|| field.value()))
}

/// Immediate members of `root` if it is a group, otherwise empty
///
/// Not recursive: members are returned as-is, without looking inside them.
pub fn flatten_group(root: Node<'_>) -> Vec<Node<'_>> {
    root.group().unwrap_or_default()
}

/// Group members of `root` that satisfy `keep`, in order
pub fn flatten_group_where<'a, F>(root: Node<'a>, mut keep: F) -> Vec<Node<'a>>
where
    F: FnMut(&Node<'a>) -> bool,
{
    flatten_group(root)
        .into_iter()
        .filter(|member| keep(member))
        .collect()
}

/// Walk every field below `root` in pre-order with its depth
///
/// The root's own fields are at depth 1.
pub fn walk_tree<'a, F>(root: Node<'a>, visitor: &mut F)
where
    F: FnMut(&Field<'a>, u32),
{
    let mut pending: Vec<(Field<'a>, u32)> = root
        .fields()
        .into_iter()
        .rev()
        .map(|field| (field, 1))
        .collect();

    while let Some((field, depth)) = pending.pop() {
        visitor(&field, depth);
        pending.extend(
            field
                .value()
                .fields()
                .into_iter()
                .rev()
                .map(|child| (child, depth + 1)),
        );
    }
}
