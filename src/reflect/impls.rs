// Reflect implementations for std values
//
// Scalars are leaves with a string description. Containers expose their contents
// as fields; tuples are the only std type that counts as a group.

use super::node::{Field, Node, Reflect};

macro_rules! impl_reflect_for_scalar {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Reflect for $ty {
                fn describe(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )+
    };
}

impl_reflect_for_scalar!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    String, &'static str,
);

impl Reflect for () {}

impl<T: Reflect> Reflect for Option<T> {
    fn fields(&self) -> Vec<Field<'_>> {
        match self {
            Some(value) => vec![Field::new("some", value)],
            None => Vec::new(),
        }
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn fields(&self) -> Vec<Field<'_>> {
        self.iter()
            .enumerate()
            .map(|(index, item)| Field::new(format!("[{}]", index), item))
            .collect()
    }
}

impl Reflect for Box<dyn Reflect> {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::new("boxed", &**self)]
    }
}

macro_rules! impl_reflect_for_tuple {
    ($($name:ident $idx:tt),+) => {
        impl<$($name: Reflect),+> Reflect for ($($name,)+) {
            fn fields(&self) -> Vec<Field<'_>> {
                vec![$(Field::new(concat!(".", stringify!($idx)), &self.$idx)),+]
            }

            fn group(&self) -> Option<Vec<Node<'_>>> {
                Some(vec![$(Node::new(&self.$idx)),+])
            }
        }
    };
}

impl_reflect_for_tuple!(A 0);
impl_reflect_for_tuple!(A 0, B 1);
impl_reflect_for_tuple!(A 0, B 1, C 2);
impl_reflect_for_tuple!(A 0, B 1, C 2, D 3);
impl_reflect_for_tuple!(A 0, B 1, C 2, D 3, E 4);
impl_reflect_for_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
impl_reflect_for_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_reflect_for_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
