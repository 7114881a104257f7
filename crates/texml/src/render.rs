//! XML serializer for TeXML documents

use std::io::{self, Write};

use tracing::debug;

use crate::document::{Content, Document, Node};
use crate::error::{Error, ErrorKind, Result};

/// XML declaration written before the root element
pub const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Widest indent per nesting level accepted by the writer
pub const MAX_INDENT: usize = 255;

/// Configuration for the serializer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Write the XML declaration before the root
    pub declaration: bool,
    /// Spaces per nesting level, at most [`MAX_INDENT`]; `None` writes
    /// everything on one line
    pub indent: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::compact()
    }
}

impl RenderConfig {
    /// Single line output with declaration
    pub const fn compact() -> Self {
        Self {
            declaration: true,
            indent: None,
        }
    }

    /// Indented output with declaration
    pub const fn pretty(indent: usize) -> Self {
        Self {
            declaration: true,
            indent: Some(indent),
        }
    }

    pub const fn with_declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }
}

/// Render a document with the default configuration
pub fn render(doc: &Document) -> Result<String> {
    render_with_config(doc, &RenderConfig::default())
}

/// Render a document to a string.
///
/// Either the complete document is returned or an error, never a
/// truncated document.
pub fn render_with_config(doc: &Document, config: &RenderConfig) -> Result<String> {
    let mut buffer = Vec::new();
    XmlWriter::new(&mut buffer, config).write_document(doc)?;
    let output = String::from_utf8(buffer).map_err(|err| {
        Error::with_message(ErrorKind::Io, "", format!("output is not UTF-8: {err}"))
    })?;
    debug!(bytes = output.len(), "rendered document");
    Ok(output)
}

/// Render a document into `writer`.
///
/// The document is fully encoded before anything is written, so encoding
/// errors leave the writer untouched. Failures of the writer itself may
/// leave it partially written.
pub fn write_to<W: Write>(doc: &Document, config: &RenderConfig, mut writer: W) -> Result<()> {
    let output = render_with_config(doc, config)?;
    writer
        .write_all(output.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|err| Error::io(&err, ""))
}

struct XmlWriter<'a, W> {
    out: W,
    indent: Option<usize>,
    declaration: bool,
    path: Vec<&'a str>,
}

impl<'a, W: Write> XmlWriter<'a, W> {
    fn new(out: W, config: &RenderConfig) -> Self {
        Self {
            out,
            indent: config.indent,
            declaration: config.declaration,
            path: Vec::new(),
        }
    }

    fn write_document(&mut self, doc: &'a Document) -> Result<()> {
        if let Some(indent) = self.indent.filter(|&indent| indent > MAX_INDENT) {
            return Err(Error::new(ErrorKind::InvalidIndent { indent }, ""));
        }
        if self.declaration {
            self.raw(DECLARATION)?;
            if self.indent.is_some() {
                self.raw("\n")?;
            }
        }
        self.write_node(doc.root(), 0, self.indent.is_some())?;
        if self.indent.is_some() {
            self.raw("\n")?;
        }
        Ok(())
    }

    fn write_node(&mut self, node: &'a Node, depth: usize, pretty: bool) -> Result<()> {
        self.path.push(&node.name);
        self.check_name(&node.name)?;

        self.raw("<")?;
        self.raw(&node.name)?;
        for (name, value) in node.attributes.iter_set() {
            self.check_name(name)?;
            self.raw(" ")?;
            self.raw(name)?;
            self.raw("=\"")?;
            self.escape(value, true)?;
            self.raw("\"")?;
        }

        if node.children.is_empty() {
            self.raw("/>")?;
            self.path.pop();
            return Ok(());
        }
        self.raw(">")?;

        // Whitespace inside mixed content would change the text
        let mixed = node
            .children
            .iter()
            .any(|child| matches!(child, Content::Text(_)));
        let pretty = pretty && !mixed;

        for child in &node.children {
            match child {
                Content::Text(text) => self.escape(text, false)?,
                Content::Element(child) => {
                    if pretty {
                        self.newline(depth + 1)?;
                    }
                    self.write_node(child, depth + 1, pretty)?;
                }
            }
        }
        if pretty {
            self.newline(depth)?;
        }

        self.raw("</")?;
        self.raw(&node.name)?;
        self.raw(">")?;
        self.path.pop();
        Ok(())
    }

    fn newline(&mut self, depth: usize) -> Result<()> {
        const SPACES: &str = "                                ";
        let indent = self.indent.unwrap_or(0);
        let mut width = indent.checked_mul(depth).ok_or_else(|| {
            Error::new(ErrorKind::InvalidIndent { indent }, self.path.join("/"))
        })?;
        self.raw("\n")?;
        while width > 0 {
            let chunk = width.min(SPACES.len());
            self.raw(SPACES.get(..chunk).unwrap_or_default())?;
            width -= chunk;
        }
        Ok(())
    }

    fn check_name(&self, name: &str) -> Result<()> {
        if is_name(name) {
            Ok(())
        } else {
            Err(Error::new(
                ErrorKind::InvalidName {
                    name: name.to_owned(),
                },
                self.path.join("/"),
            ))
        }
    }

    /// Writes `value` with markup characters and CR replaced by references.
    /// Attribute values also encode tab and LF.
    fn escape(&mut self, value: &str, attribute: bool) -> Result<()> {
        let mut start = 0;
        for (idx, ch) in value.char_indices() {
            if !is_xml_char(ch) {
                return Err(Error::new(ErrorKind::InvalidChar { ch }, self.path.join("/")));
            }
            let replacement = match ch {
                '&' => "&amp;",
                '<' => "&lt;",
                '>' => "&gt;",
                '"' => "&quot;",
                '\'' => "&apos;",
                '\t' if attribute => "&#9;",
                '\n' if attribute => "&#10;",
                '\r' => "&#13;",
                _ => continue,
            };
            self.raw(value.get(start..idx).unwrap_or_default())?;
            self.raw(replacement)?;
            start = idx + ch.len_utf8();
        }
        self.raw(value.get(start..).unwrap_or_default())
    }

    fn raw(&mut self, s: &str) -> Result<()> {
        self.out
            .write_all(s.as_bytes())
            .map_err(|err: io::Error| Error::io(&err, self.path.join("/")))
    }
}

/// XML 1.0 `Char` production
fn is_xml_char(ch: char) -> bool {
    matches!(ch,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

fn is_name_start_char(ch: char) -> bool {
    matches!(ch,
        ':' | 'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(ch: char) -> bool {
    is_name_start_char(ch)
        || matches!(ch,
            '-' | '.' | '0'..='9'
            | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}')
}

/// XML `Name` production
pub fn is_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => is_name_start_char(first) && chars.all(is_name_char),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attributes;

    fn doc_with(node: Node) -> Document {
        let mut doc = Document::new();
        doc.root_mut().children.push(Content::Element(node));
        doc
    }

    #[test]
    fn test_empty_document() -> Result<()> {
        let output = render(&Document::new())?;
        assert_eq!(output, format!("{DECLARATION}<Response/>"));
        Ok(())
    }

    #[test]
    fn test_without_declaration() -> Result<()> {
        let config = RenderConfig::compact().with_declaration(false);
        let output = render_with_config(&Document::new(), &config)?;
        assert_eq!(output, "<Response/>");
        Ok(())
    }

    #[test]
    fn test_text_escaping() -> Result<()> {
        let mut node = Node::new("Say");
        node.children
            .push(Content::Text(r#"a & b < c > d " e ' f"#.to_string()));
        let output = render(&doc_with(node))?;
        assert!(output.contains("<Say>a &amp; b &lt; c &gt; d &quot; e &apos; f</Say>"));
        Ok(())
    }

    #[test]
    fn test_text_keeps_carriage_return() -> Result<()> {
        let mut node = Node::new("Say");
        node.children.push(Content::Text("a\r\nb\tc".to_string()));
        let output = render(&doc_with(node))?;
        assert!(output.contains("<Say>a&#13;\nb\tc</Say>"));
        Ok(())
    }

    #[test]
    fn test_attribute_escaping() -> Result<()> {
        let mut node = Node::new("Redirect");
        node.attributes = Attributes::from([("Url", "/next?a=1&b=\"2\"\n")]);
        let output = render(&doc_with(node))?;
        assert!(output.contains(r#"<Redirect Url="/next?a=1&amp;b=&quot;2&quot;&#10;"/>"#));
        Ok(())
    }

    #[test]
    fn test_empty_attribute_omitted() -> Result<()> {
        let mut node = Node::new("Pause");
        node.attributes = Attributes::from([("Length", "5"), ("Extra", "")]);
        let output = render(&doc_with(node))?;
        assert!(output.contains(r#"<Pause Length="5"/>"#));
        assert!(!output.contains("Extra"));
        Ok(())
    }

    #[test]
    fn test_invalid_name() {
        let result = render(&doc_with(Node::new("bad name")));
        let err = result.err();
        assert_eq!(
            err.as_ref().map(Error::kind),
            Some(&ErrorKind::InvalidName {
                name: "bad name".to_string()
            })
        );
        assert_eq!(err.as_ref().map(Error::path), Some("Response/bad name"));
    }

    #[test]
    fn test_invalid_attribute_name() {
        let mut node = Node::new("Say");
        node.attributes = Attributes::from([("1st", "x")]);
        assert!(render(&doc_with(node)).is_err());
    }

    #[test]
    fn test_invalid_char() {
        let mut node = Node::new("Say");
        node.children.push(Content::Text("nul\u{0}".to_string()));
        let err = render(&doc_with(node)).err();
        assert_eq!(
            err.map(|e| e.kind().clone()),
            Some(ErrorKind::InvalidChar { ch: '\u{0}' })
        );
    }

    #[test]
    fn test_pretty_output() -> Result<()> {
        let mut gather = Node::new("Gather");
        let mut say = Node::new("Say");
        say.children.push(Content::Text("Press 1".to_string()));
        gather.children.push(Content::Element(say));
        let output = render_with_config(&doc_with(gather), &RenderConfig::pretty(2))?;
        assert_eq!(
            output,
            format!(
                "{DECLARATION}\n<Response>\n  <Gather>\n    <Say>Press 1</Say>\n  </Gather>\n</Response>\n"
            )
        );
        Ok(())
    }

    #[test]
    fn test_pretty_keeps_mixed_content_inline() -> Result<()> {
        let mut dial = Node::new("Dial");
        dial.children.push(Content::Text("100".to_string()));
        dial.children.push(Content::Element(Node::new("Number")));
        let config = RenderConfig::pretty(4).with_declaration(false);
        let output = render_with_config(&doc_with(dial), &config)?;
        assert_eq!(output, "<Response>\n    <Dial>100<Number/></Dial>\n</Response>\n");
        Ok(())
    }

    #[test]
    fn test_indent_too_wide() {
        let mut dial = Node::new("Dial");
        dial.children.push(Content::Element(Node::new("Number")));
        let doc = doc_with(dial);
        for indent in [MAX_INDENT + 1, usize::MAX] {
            let result = render_with_config(&doc, &RenderConfig::pretty(indent));
            assert_eq!(
                result.err().map(|e| e.kind().clone()),
                Some(ErrorKind::InvalidIndent { indent })
            );
        }
    }

    #[test]
    fn test_widest_indent() -> Result<()> {
        let mut dial = Node::new("Dial");
        dial.children.push(Content::Element(Node::new("Number")));
        let config = RenderConfig::pretty(MAX_INDENT).with_declaration(false);
        let output = render_with_config(&doc_with(dial), &config)?;
        let pad = " ".repeat(MAX_INDENT * 2);
        assert!(output.contains(&format!("\n{pad}<Number/>\n")));
        Ok(())
    }

    #[test]
    fn test_write_to() -> Result<()> {
        let mut sink = Vec::new();
        write_to(&Document::new(), &RenderConfig::default(), &mut sink)?;
        assert_eq!(sink, format!("{DECLARATION}<Response/>").into_bytes());
        Ok(())
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_to_failing_sink() {
        let result = write_to(&Document::new(), &RenderConfig::default(), FailingSink);
        assert_eq!(result.err().map(|e| e.kind().clone()), Some(ErrorKind::Io));
    }

    #[test]
    fn test_is_name() {
        assert!(is_name("Dial"));
        assert!(is_name("x:Custom-1.2"));
        assert!(is_name("_private"));
        assert!(!is_name(""));
        assert!(!is_name("1abc"));
        assert!(!is_name("a b"));
        assert!(!is_name("a>b"));
    }
}
