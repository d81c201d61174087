use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::{DocumentError, Element, TreeNode};

/// Spaces per nesting level in rendered documents
const INDENT: usize = 4;

/// Write `root` as an indented XML document with a UTF-8 declaration
pub fn write_document<W: Write>(root: &Element, out: W) -> Result<(), DocumentError> {
    let mut writer = Writer::new_with_indent(out, b' ', INDENT);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    write_element(&mut writer, root)?;
    writer.get_mut().write_all(b"\n")?;
    Ok(())
}

/// Render `root` to a string, see [`write_document`]
pub fn render_document(root: &Element) -> Result<String, DocumentError> {
    let mut out = Vec::new();
    write_document(root, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<(), DocumentError> {
    let mut start = BytesStart::new(element.tag());
    for (key, value) in element.attributes() {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if !element.text().is_empty() {
        writer.write_event(Event::Text(BytesText::new(element.text())))?;
    }
    for child in element.children() {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.tag())))?;
    Ok(())
}
