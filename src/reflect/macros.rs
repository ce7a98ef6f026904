/// Implement [`Reflect`](crate::reflect::Reflect) for a struct from its field list
///
/// Labels are the field identifiers, in the order written. Every listed field must
/// itself implement `Reflect`.
///
/// ```
/// use viewprobe::reflect_struct;
///
/// struct Badge {
///     title: String,
///     count: u32,
/// }
///
/// reflect_struct!(Badge { title, count });
/// ```
///
/// A struct that wraps a tuple of children can declare itself a group over that
/// member with `group = <field>`:
///
/// ```
/// use viewprobe::reflect_struct;
///
/// struct Row {
///     content: (String, u32),
/// }
///
/// reflect_struct!(Row { content } group = content);
/// ```
#[macro_export]
macro_rules! reflect_struct {
    ($name:ident { $($field:ident),* $(,)? }) => {
        impl $crate::reflect::Reflect for $name {
            fn fields(&self) -> ::std::vec::Vec<$crate::reflect::Field<'_>> {
                ::std::vec![$($crate::reflect::Field::new(stringify!($field), &self.$field)),*]
            }
        }
    };
    ($name:ident { $($field:ident),* $(,)? } group = $group:ident) => {
        impl $crate::reflect::Reflect for $name {
            fn fields(&self) -> ::std::vec::Vec<$crate::reflect::Field<'_>> {
                ::std::vec![$($crate::reflect::Field::new(stringify!($field), &self.$field)),*]
            }

            fn group(&self) -> ::std::option::Option<::std::vec::Vec<$crate::reflect::Node<'_>>> {
                $crate::reflect::Reflect::group(&self.$group)
            }
        }
    };
}
