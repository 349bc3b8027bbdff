//! A small element tree built from KML text.
//!
//! Namespace prefixes are dropped from element and attribute names, so
//! `<kml:Placemark>` and `<Placemark>` look the same to the extractors.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{KmlError, KmlResult};

/// One XML element with its child elements and concatenated text.
///
/// Attributes are not kept; the extractors only read element content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub name: String,
    pub children: Vec<Element>,
    pub text: String,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All direct children with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Trimmed text of the first direct child with the given name, if non-empty.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name)
            .map(|c| c.text.trim())
            .filter(|t| !t.is_empty())
    }

    fn from_start(start: &BytesStart<'_>) -> Self {
        Element::new(String::from_utf8_lossy(start.local_name().as_ref()))
    }
}

/// Parse KML text into its root element.
pub fn parse_kml(text: &str) -> KmlResult<Element> {
    let mut reader = Reader::from_str(text.trim_start_matches('\u{feff}'));
    reader.trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => stack.push(Element::from_start(&e)),
            Ok(Event::Empty(e)) => attach(&mut stack, &mut root, Element::from_start(&e)),
            Ok(Event::End(_)) => {
                let element = stack.pop().ok_or_else(|| {
                    KmlError::MalformedXml("closing tag without matching open tag".to_string())
                })?;
                attach(&mut stack, &mut root, element);
            }
            Ok(Event::Text(t)) => {
                if let Some(current) = stack.last_mut() {
                    // Descriptions sometimes carry HTML entities XML doesn't know.
                    match t.unescape() {
                        Ok(text) => current.text.push_str(&text),
                        Err(_) => current.text.push_str(&String::from_utf8_lossy(&t)),
                    }
                }
            }
            Ok(Event::CData(c)) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(KmlError::MalformedXml(format!(
                    "at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(KmlError::MalformedXml(format!(
            "unclosed element <{}>",
            open.name
        )));
    }

    root.ok_or_else(|| KmlError::MalformedXml("document has no root element".to_string()))
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}
