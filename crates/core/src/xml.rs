//! Minimal XML element tree.
//!
//! Torznab responses are small, so the whole document is read into a tree of
//! [`XmlNode`]s and the mappers walk it by element name. Element names keep
//! their namespace prefix (`torznab:attr`), attribute values and text are
//! unescaped, and whitespace-only text is dropped.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::JackettError;

/// One XML element with its attributes, text content and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<XmlNode>,
}

impl XmlNode {
    /// Element name including any namespace prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Concatenated text and CDATA content directly inside this element.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Value of the attribute `key`, if present.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First child element named `name`.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All child elements named `name`, in document order.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text of the first child element named `name`.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(XmlNode::text)
    }

    /// Like [`attr`](Self::attr), but a missing attribute is a parse error.
    pub fn require_attr(&self, key: &str) -> Result<&str, JackettError> {
        self.attr(key).ok_or_else(|| {
            JackettError::parse(format!("<{}> is missing attribute '{}'", self.name, key))
        })
    }

    /// Like [`child`](Self::child), but a missing element is a parse error.
    pub fn require_child(&self, name: &str) -> Result<&XmlNode, JackettError> {
        self.child(name).ok_or_else(|| {
            JackettError::parse(format!("<{}> is missing element <{}>", self.name, name))
        })
    }

    /// Like [`child_text`](Self::child_text), but a missing element is a parse error.
    pub fn require_child_text(&self, name: &str) -> Result<&str, JackettError> {
        self.require_child(name).map(XmlNode::text)
    }
}

/// Parse a document and return its root element.
pub fn parse_document(xml: &str) -> Result<XmlNode, JackettError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                if root.is_some() {
                    return Err(JackettError::parse("multiple root elements"));
                }
                stack.push(element(e)?);
            }
            Event::Empty(ref e) => {
                let node = element(e)?;
                close(node, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                // quick-xml has already checked that the end tag matches
                let node = stack
                    .pop()
                    .ok_or_else(|| JackettError::parse("unexpected closing tag"))?;
                close(node, &mut stack, &mut root)?;
            }
            Event::Text(ref e) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(current) = stack.last_mut() {
                    let data = e.into_inner();
                    current.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(JackettError::parse(format!(
            "unexpected end of document inside <{}>",
            open.name
        )));
    }

    root.ok_or_else(|| JackettError::parse("document has no root element"))
}

fn element(start: &BytesStart<'_>) -> Result<XmlNode, JackettError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).to_string();
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr.unescape_value()?.to_string();
        attributes.push((key, value));
    }
    Ok(XmlNode {
        name,
        attributes,
        text: String::new(),
        children: Vec::new(),
    })
}

/// Attach a finished element to its parent, or make it the root.
fn close(
    node: XmlNode,
    stack: &mut [XmlNode],
    root: &mut Option<XmlNode>,
) -> Result<(), JackettError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => {
            if root.is_some() {
                return Err(JackettError::parse("multiple root elements"));
            }
            *root = Some(node);
        }
    }
    Ok(())
}
