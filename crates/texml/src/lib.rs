//! texml - build TeXML call-control documents
//!
//! # Quick Start
//!
//! ```
//! use texml::{voice, Dial, Number, Say, Verb};
//! # fn main() -> Result<(), texml::Error> {
//! let verbs: Vec<Verb> = vec![
//!     Say::new("Connecting you now").into(),
//!     Dial::default().with_child(Number::new("+15559876543")).into(),
//! ];
//! let xml = voice(&verbs)?;
//! assert!(xml.contains("<Say>Connecting you now</Say>"));
//! assert!(xml.contains("<Dial><Number>+15559876543</Number></Dial>"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use tracing::{debug, instrument};

pub mod error;
pub use error::{Error, ErrorKind, Result};

pub mod attributes;
pub use attributes::Attributes;

pub mod element;
pub use element::Element;

pub mod verbs;
pub use verbs::{
    Conference, Custom, Dial, Enqueue, Gather, Hangup, Leave, Number, Pause, Play, Record,
    Redirect, Refer, ReferSip, Reject, Say, Sip, Start, Stop, Stream, Verb,
};

pub mod document;
pub use document::{attach_all, create_document, Content, Document, Node};

pub mod render;
pub use render::{render, render_with_config, write_to, RenderConfig, MAX_INDENT};

/// Build and render a TeXML document from verbs in execution order
///
/// An empty slice yields a document with an empty `<Response/>` root.
pub fn voice<E: Element>(verbs: &[E]) -> Result<String> {
    voice_with_config(verbs, &RenderConfig::default())
}

/// Build and render a TeXML document with custom output settings
#[instrument(skip_all, fields(verbs = verbs.len()))]
pub fn voice_with_config<E: Element>(verbs: &[E], config: &RenderConfig) -> Result<String> {
    let mut doc = create_document();
    attach_all(doc.root_mut(), verbs);
    debug!(elements = doc.element_count(), "built document");
    render_with_config(&doc, config)
}
