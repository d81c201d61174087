use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::{DocumentError, Element};

/// Read an XML document into its root element
///
/// Text content is trimmed; comments, processing instructions and the XML
/// declaration are dropped. The document must contain exactly one root
/// element.
pub fn read_document<R: BufRead>(input: R) -> Result<Element, DocumentError> {
    let mut reader = Reader::from_reader(input);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => stack.push(element_from_start(e)?),
            Event::Empty(ref e) => {
                let element = element_from_start(e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    DocumentError::InvalidStructure("unbalanced closing tag".to_string())
                })?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(ref t) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&t.unescape()?);
                }
            }
            Event::CData(ref c) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(std::str::from_utf8(c)?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(DocumentError::InvalidStructure(format!(
            "unclosed element <{}>",
            open.name
        )));
    }

    root.ok_or_else(|| DocumentError::InvalidStructure("document has no root element".to_string()))
}

/// Read an XML document held in memory
pub fn read_document_str(xml: &str) -> Result<Element, DocumentError> {
    read_document(xml.as_bytes())
}

/// Read an XML document from a file
pub fn read_document_file<P: AsRef<Path>>(path: P) -> Result<Element, DocumentError> {
    let file = File::open(path)?;
    read_document(BufReader::new(file))
}

fn element_from_start(e: &BytesStart) -> Result<Element, DocumentError> {
    let mut element = Element::new(std::str::from_utf8(e.name().as_ref())?);
    for attr in e.attributes() {
        let attr = attr.map_err(|e| DocumentError::XmlError(quick_xml::Error::from(e)))?;
        let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
        let value = attr.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), DocumentError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(DocumentError::InvalidStructure(format!(
            "second root element <{}>",
            element.name
        )));
    }
    *root = Some(element);
    Ok(())
}
