//! TeXML verb and noun catalog
//!
//! Every catalog entry is a struct of `String` fields. Fields left at the
//! empty default are not written. `optional_attributes` carries anything
//! the typed fields do not cover, and `children` holds nested verbs.

use crate::attributes::Attributes;
use crate::element::Element;

/// Declares a catalog struct and its [`Element`] impl.
///
/// `text` names the field rendered as character data; `attrs` maps the
/// remaining fields to their attribute names.
macro_rules! verb {
    (@text $self:ident) => {
        ""
    };
    (@text $self:ident $field:ident) => {
        &$self.$field
    };
    (
        $(#[$meta:meta])*
        $ty:ident($tag:literal) {
            $(text $text:ident,)?
            attrs { $($field:ident: $attr:literal),* $(,)? }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
        pub struct $ty {
            $(
                #[doc = "Text content of the element"]
                #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
                pub $text: String,
            )?
            $(
                #[doc = concat!("`", $attr, "` attribute")]
                #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
                pub $field: String,
            )*
            /// Nested verbs and nouns
            #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
            pub children: Vec<$crate::verbs::Verb>,
            /// Attributes not modeled as fields
            #[cfg_attr(
                feature = "serde",
                serde(skip_serializing_if = "crate::attributes::Attributes::is_empty")
            )]
            pub optional_attributes: $crate::attributes::Attributes,
        }

        impl $ty {
            $(
                pub fn new($text: impl Into<String>) -> Self {
                    Self {
                        $text: $text.into(),
                        ..Self::default()
                    }
                }
            )?

            /// Appends a nested verb or noun
            pub fn with_child(mut self, child: impl Into<$crate::verbs::Verb>) -> Self {
                self.children.push(child.into());
                self
            }

            /// Sets an attribute that has no typed field
            pub fn with_attribute(
                mut self,
                name: impl Into<String>,
                value: impl Into<String>,
            ) -> Self {
                self.optional_attributes.insert(name, value);
                self
            }
        }

        impl $crate::element::Element for $ty {
            fn name(&self) -> &str {
                $tag
            }

            fn text(&self) -> &str {
                verb!(@text self $($text)?)
            }

            fn attributes(
                &self,
            ) -> (&$crate::attributes::Attributes, $crate::attributes::Attributes) {
                #[allow(unused_mut)]
                let mut fixed = $crate::attributes::Attributes::new();
                $(fixed.insert($attr, self.$field.as_str());)*
                (&self.optional_attributes, fixed)
            }

            fn children(&self) -> &[$crate::verbs::Verb] {
                &self.children
            }
        }

        impl From<$ty> for $crate::verbs::Verb {
            fn from(value: $ty) -> Self {
                Self::$ty(value)
            }
        }
    };
}

pub mod custom;
pub mod dial;
pub mod flow;
pub mod media;
pub mod refer;
pub mod stream;

pub use custom::Custom;
pub use dial::{Conference, Dial, Number, Sip};
pub use flow::{Enqueue, Gather, Hangup, Leave, Redirect, Reject};
pub use media::{Pause, Play, Record, Say};
pub use refer::{Refer, ReferSip};
pub use stream::{Start, Stop, Stream};

/// Any verb or noun that can appear in a document
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verb {
    Dial(Dial),
    Number(Number),
    Sip(Sip),
    Conference(Conference),
    Enqueue(Enqueue),
    Gather(Gather),
    Hangup(Hangup),
    Leave(Leave),
    Pause(Pause),
    Play(Play),
    Record(Record),
    Redirect(Redirect),
    Refer(Refer),
    ReferSip(ReferSip),
    Reject(Reject),
    Say(Say),
    Stop(Stop),
    Stream(Stream),
    Start(Start),
    Custom(Custom),
}

impl Verb {
    fn as_element(&self) -> &dyn Element {
        match self {
            Self::Dial(v) => v,
            Self::Number(v) => v,
            Self::Sip(v) => v,
            Self::Conference(v) => v,
            Self::Enqueue(v) => v,
            Self::Gather(v) => v,
            Self::Hangup(v) => v,
            Self::Leave(v) => v,
            Self::Pause(v) => v,
            Self::Play(v) => v,
            Self::Record(v) => v,
            Self::Redirect(v) => v,
            Self::Refer(v) => v,
            Self::ReferSip(v) => v,
            Self::Reject(v) => v,
            Self::Say(v) => v,
            Self::Stop(v) => v,
            Self::Stream(v) => v,
            Self::Start(v) => v,
            Self::Custom(v) => v,
        }
    }
}

impl Element for Verb {
    fn name(&self) -> &str {
        self.as_element().name()
    }

    fn text(&self) -> &str {
        self.as_element().text()
    }

    fn attributes(&self) -> (&Attributes, Attributes) {
        self.as_element().attributes()
    }

    fn children(&self) -> &[Verb] {
        self.as_element().children()
    }
}
