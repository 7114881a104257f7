//! Document model and tree builder

use tracing::trace;

use crate::attributes::{self, Attributes};
use crate::element::Element;

/// Tag of the document root
pub const ROOT_TAG: &str = "Response";

/// A TeXML document: a `<Response>` root holding the verbs in execution
/// order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    root: Node,
}

impl Document {
    /// Creates a document with an empty `<Response>` root
    pub fn new() -> Self {
        Self {
            root: Node::new(ROOT_TAG),
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Handle used to attach top-level verbs
    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    /// Number of element nodes, root included
    pub fn element_count(&self) -> usize {
        self.root.element_count()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// An attached element
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    /// Merged attributes in emission order
    pub attributes: Attributes,
    pub children: Vec<Content>,
}

/// Content of a node
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    Element(Node),
    Text(String),
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Converts an element and its whole subtree into a node.
    ///
    /// The node gets the merged attribute list, then a text child when the
    /// element has text, then its children in order.
    pub fn from_element<E: Element + ?Sized>(element: &E) -> Self {
        let (optional, fixed) = element.attributes();
        let mut node = Self {
            name: element.name().to_owned(),
            attributes: attributes::merge(optional, &fixed),
            children: Vec::new(),
        };

        let text = element.text();
        if !text.is_empty() {
            node.children.push(Content::Text(text.to_owned()));
        }
        attach_all(&mut node, element.children());

        trace!(
            name = %node.name,
            attributes = node.attributes.len(),
            children = node.children.len(),
            "attached element"
        );
        node
    }

    /// Element children, skipping text
    pub fn elements(&self) -> impl Iterator<Item = &Self> + '_ {
        self.children.iter().filter_map(|child| match child {
            Content::Element(node) => Some(node),
            Content::Text(_) => None,
        })
    }

    /// Concatenated text children
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                Content::Text(text) => Some(text.as_str()),
                Content::Element(_) => None,
            })
            .collect()
    }

    fn element_count(&self) -> usize {
        1 + self.elements().map(Self::element_count).sum::<usize>()
    }
}

/// Creates an empty document; attach verbs through [`Document::root_mut`]
pub fn create_document() -> Document {
    Document::new()
}

/// Appends every element, in order, as a child of `parent`, together with
/// its subtree.
///
/// Calling this twice on the same parent duplicates the content.
pub fn attach_all<E: Element>(parent: &mut Node, elements: &[E]) {
    parent.children.reserve(elements.len());
    for element in elements {
        parent
            .children
            .push(Content::Element(Node::from_element(element)));
    }
}
