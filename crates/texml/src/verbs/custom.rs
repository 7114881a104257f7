//! Elements outside the catalog

use crate::attributes::Attributes;
use crate::element::Element;
use crate::verbs::Verb;

/// An element with a caller chosen tag
///
/// Covers verbs and nouns the catalog does not model yet. All attributes
/// are optional attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Custom {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
    pub text: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Attributes::is_empty"))]
    pub attributes: Attributes,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<Verb>,
}

impl Custom {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_child(mut self, child: impl Into<Verb>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value);
        self
    }
}

impl Element for Custom {
    fn name(&self) -> &str {
        &self.name
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn attributes(&self) -> (&Attributes, Attributes) {
        (&self.attributes, Attributes::new())
    }

    fn children(&self) -> &[Verb] {
        &self.children
    }
}

impl From<Custom> for Verb {
    fn from(value: Custom) -> Self {
        Self::Custom(value)
    }
}
