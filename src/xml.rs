//! A small owned element tree built on top of `quick-xml` events.
//!
//! Only what report processing needs is kept: element names, attributes in
//! source order and child nodes (elements and text). Comments, processing
//! instructions and the prolog are dropped.

use quick_xml::{
    events::{attributes::AttrError, BytesStart, Event},
    Reader,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum XmlParseError {
    #[error("malformed xml: {0}")]
    Syntax(#[from] quick_xml::Error),
    #[error("malformed attribute: {0}")]
    Attribute(#[from] AttrError),
    #[error("element `{0}` is never closed")]
    UnclosedElement(String),
    #[error("end tag `{0}` found without start tag")]
    UnexpectedEndTag(String),
    #[error("document has no root element")]
    NoRootElement,
    #[error("document has more than one root element")]
    MultipleRootElements,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

impl XmlNode {
    /// The DOM node name: the tag name for elements, `#text` for text.
    pub fn node_name(&self) -> &str {
        match self {
            XmlNode::Element(element) => element.name(),
            XmlNode::Text(_) => "#text",
        }
    }

    pub fn as_element(&self) -> Option<&XmlElement> {
        match self {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    pub fn with_text<T: Into<String>>(mut self, text: T) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// True if the element has any child node, text included.
    pub fn has_child_nodes(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn first_child(&self) -> Option<&XmlNode> {
        self.children.first()
    }

    pub fn first_element_child(&self) -> Option<&XmlElement> {
        self.child_elements().next()
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(XmlNode::as_element)
    }

    /// All descendant elements named `name` in document order. The element
    /// itself is never included.
    pub fn elements_by_tag_name(&self, name: &str) -> Vec<&XmlElement> {
        let mut found = Vec::new();
        self.collect_by_tag_name(name, &mut found);
        found
    }

    fn collect_by_tag_name<'a>(&'a self, name: &str, found: &mut Vec<&'a XmlElement>) {
        for child in self.child_elements() {
            if child.name == name {
                found.push(child);
            }
            child.collect_by_tag_name(name, found);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: XmlElement,
}

impl XmlDocument {
    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    pub fn into_root(self) -> XmlElement {
        self.root
    }
}

pub fn parse_document(xml: &str) -> Result<XmlDocument, XmlParseError> {
    let mut reader = Reader::from_str(xml);
    // whitespace text is a real node for `first_child`
    reader.config_mut().trim_text(false);

    let mut builder = TreeBuilder::default();
    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Start(e) => builder.open(element_from_start(&e)?)?,
            Event::Empty(e) => builder.attach(element_from_start(&e)?)?,
            Event::End(e) => builder.close(&tag_name(e.name().as_ref()))?,
            Event::Text(e) => builder.text(e.unescape()?.into_owned()),
            Event::CData(e) => builder.text(String::from_utf8_lossy(&e.into_inner()).into_owned()),
            _ => (),
        }
    }
    builder.finish()
}

fn tag_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn element_from_start(e: &BytesStart) -> Result<XmlElement, XmlParseError> {
    let mut element = XmlElement::new(tag_name(e.name().as_ref()));
    for attr in e.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?.into_owned();
        element
            .attributes
            .push((tag_name(attr.key.as_ref()), value));
    }
    Ok(element)
}

#[derive(Debug, Default)]
struct TreeBuilder {
    stack: Vec<XmlElement>,
    root: Option<XmlElement>,
}

impl TreeBuilder {
    fn open(&mut self, element: XmlElement) -> Result<(), XmlParseError> {
        if self.stack.is_empty() && self.root.is_some() {
            return Err(XmlParseError::MultipleRootElements);
        }
        self.stack.push(element);
        Ok(())
    }

    fn close(&mut self, name: &str) -> Result<(), XmlParseError> {
        match self.stack.pop() {
            Some(element) => self.attach(element),
            None => Err(XmlParseError::UnexpectedEndTag(name.to_string())),
        }
    }

    fn attach(&mut self, element: XmlElement) -> Result<(), XmlParseError> {
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(XmlNode::Element(element));
        } else if self.root.is_some() {
            return Err(XmlParseError::MultipleRootElements);
        } else {
            self.root = Some(element);
        }
        Ok(())
    }

    fn text(&mut self, text: String) {
        if text.is_empty() {
            return;
        }
        // text outside the root element is ignored
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(XmlNode::Text(text));
        }
    }

    fn finish(mut self) -> Result<XmlDocument, XmlParseError> {
        if let Some(unclosed) = self.stack.pop() {
            return Err(XmlParseError::UnclosedElement(unclosed.name));
        }
        self.root
            .map(|root| XmlDocument { root })
            .ok_or(XmlParseError::NoRootElement)
    }
}
