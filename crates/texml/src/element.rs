//! The capability every TeXML verb and noun implements

use crate::attributes::Attributes;
use crate::verbs::Verb;

/// A node of a TeXML document before it is attached
///
/// Implementations are plain data holders. They report empty strings for
/// unset fields and leave filtering to the builder and writer.
pub trait Element {
    /// Markup tag, never empty
    fn name(&self) -> &str;

    /// Primary text value, empty when the element has none
    fn text(&self) -> &str;

    /// Returns `(optional, fixed)`: the caller supplied attribute map and
    /// the attributes derived from typed fields.
    fn attributes(&self) -> (&Attributes, Attributes);

    /// Nested elements in document order
    fn children(&self) -> &[Verb];
}

impl<E: Element + ?Sized> Element for &E {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn text(&self) -> &str {
        (**self).text()
    }

    fn attributes(&self) -> (&Attributes, Attributes) {
        (**self).attributes()
    }

    fn children(&self) -> &[Verb] {
        (**self).children()
    }
}

impl<E: Element + ?Sized> Element for Box<E> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn text(&self) -> &str {
        (**self).text()
    }

    fn attributes(&self) -> (&Attributes, Attributes) {
        (**self).attributes()
    }

    fn children(&self) -> &[Verb] {
        (**self).children()
    }
}
