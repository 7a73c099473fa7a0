//! Minimal element tree built from `quick-xml` events.
//!
//! IDS documents are small, so the loader reads them into a tree first and
//! walks the tree afterwards. Names are stored without namespace prefixes.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};

use crate::error::{IngestError, Result};

#[derive(Debug, Clone, Default)]
pub(crate) struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
    pub text: String,
}

impl Element {
    fn from_start(start: &BytesStart<'_>) -> quick_xml::Result<Self> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(quick_xml::Error::from)?
                .into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
            text: String::new(),
        })
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attribute value with surrounding whitespace removed; blank counts as absent.
    pub fn attr_trimmed(&self, name: &str) -> Option<&str> {
        self.attr(name).map(str::trim).filter(|value| !value.is_empty())
    }

    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }

    pub fn text_trimmed(&self) -> &str {
        self.text.trim()
    }
}

/// Parses `text` into a tree and returns the root element.
pub(crate) fn parse_tree(text: &str) -> Result<Element> {
    let mut reader = Reader::from_str(text);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|source| IngestError::Xml {
            position: reader.buffer_position(),
            source,
        })?;
        let position = reader.buffer_position();
        let xml_error = move |source: quick_xml::Error| IngestError::Xml { position, source };

        match event {
            Event::Start(start) => {
                stack.push(Element::from_start(&start).map_err(xml_error)?);
            }
            Event::Empty(start) => {
                let element = Element::from_start(&start).map_err(xml_error)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| IngestError::malformed("unbalanced closing tag"))?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(content) => {
                let decoded = content.decode().map_err(quick_xml::Error::from);
                push_text(&mut stack, &decoded.map_err(xml_error)?);
            }
            Event::CData(content) => {
                let bytes = content.into_inner();
                push_text(&mut stack, &String::from_utf8_lossy(&bytes));
            }
            Event::GeneralRef(reference) => {
                let char_ref = reference
                    .resolve_char_ref()
                    .map_err(quick_xml::Error::from)
                    .map_err(xml_error)?;
                let resolved = match char_ref {
                    Some(ch) => Cow::Owned(ch.to_string()),
                    None => {
                        let name = reference
                            .decode()
                            .map_err(quick_xml::Error::from)
                            .map_err(xml_error)?;
                        let value = resolve_predefined_entity(&name).ok_or_else(|| {
                            IngestError::malformed(format!("unknown entity reference &{name};"))
                        })?;
                        Cow::Borrowed(value)
                    }
                };
                push_text(&mut stack, &resolved);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(IngestError::malformed("unexpected end of document"));
    }
    root.ok_or(IngestError::MissingRoot)
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(IngestError::malformed("multiple root elements")),
    }
    Ok(())
}

fn push_text(stack: &mut [Element], text: &str) {
    if let Some(current) = stack.last_mut() {
        current.text.push_str(text);
    }
}
