// Synthetic component hierarchy for tests
//
// Shapes follow a declarative UI toolkit: stacks wrap a tuple of children, images
// wrap a provider box around a named provider, and type-erased views box their
// content.

use crate::reflect::{Field, Node, Reflect};
use crate::reflect_struct;

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
}

reflect_struct!(Text { content });

impl Text {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Location {
    System,
    PrivateSystem,
    Custom,
}

impl Reflect for Location {
    fn describe(&self) -> Option<String> {
        let text = match self {
            Location::System => "system",
            Location::PrivateSystem => "privateSystem",
            Location::Custom => "custom",
        };
        Some(text.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedImageProvider {
    pub name: String,
    pub location: Location,
    pub label: Option<Text>,
}

reflect_struct!(NamedImageProvider { name, location, label });

#[derive(Debug, Clone, PartialEq)]
pub struct ImageProviderBox {
    pub base: NamedImageProvider,
}

reflect_struct!(ImageProviderBox { base });

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub provider: ImageProviderBox,
}

reflect_struct!(Image { provider });

impl Image {
    pub fn named(name: &str, location: Location) -> Self {
        Self {
            provider: ImageProviderBox {
                base: NamedImageProvider {
                    name: name.to_string(),
                    location,
                    label: None,
                },
            },
        }
    }

    pub fn system(name: &str) -> Self {
        Self::named(name, Location::System)
    }
}

pub struct Label {
    pub title: Text,
    pub icon: Image,
}

reflect_struct!(Label { title, icon });

pub struct AnyView {
    pub storage: Box<dyn Reflect>,
}

reflect_struct!(AnyView { storage });

impl AnyView {
    pub fn new(view: impl Reflect) -> Self {
        Self {
            storage: Box::new(view),
        }
    }
}

pub struct TupleView<T> {
    pub value: T,
}

impl<T: Reflect> Reflect for TupleView<T> {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::new("value", &self.value)]
    }

    fn group(&self) -> Option<Vec<Node<'_>>> {
        self.value.group()
    }
}

pub struct VStack<C> {
    pub spacing: Option<f64>,
    pub content: C,
}

impl<C: Reflect> Reflect for VStack<C> {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("spacing", &self.spacing),
            Field::new("content", &self.content),
        ]
    }
}

impl<T> VStack<TupleView<T>> {
    pub fn new(children: T) -> Self {
        Self {
            spacing: None,
            content: TupleView { value: children },
        }
    }
}

pub struct Padding {
    pub amount: f64,
}

reflect_struct!(Padding { amount });

pub struct ModifiedContent<C, M> {
    pub content: C,
    pub modifier: M,
}

impl<C: Reflect, M: Reflect> Reflect for ModifiedContent<C, M> {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("content", &self.content),
            Field::new("modifier", &self.modifier),
        ]
    }
}

/// One link of a single-child chain, for depth tests
pub struct Link {
    pub next: Option<Box<Link>>,
    pub leaf: Option<Text>,
}

impl Reflect for Link {
    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = Vec::new();
        if let Some(next) = self.next.as_deref() {
            fields.push(Field::new("next", next));
        }
        if let Some(leaf) = &self.leaf {
            fields.push(Field::new("leaf", leaf));
        }
        fields
    }
}

impl Link {
    /// Chain of `depth` links with a `Text` leaf on the innermost one
    pub fn chain(depth: usize, leaf: &str) -> Link {
        let mut link = Link {
            next: None,
            leaf: Some(Text::new(leaf)),
        };
        for _ in 1..depth {
            link = Link {
                next: Some(Box::new(link)),
                leaf: None,
            };
        }
        link
    }
}

impl Drop for Link {
    // Unlink iteratively so very deep chains don't recurse on drop
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut link) = next {
            next = link.next.take();
        }
    }
}
