// crates/xpdsc-rs/src/parser.rs

//! Reads XML text into the array-wrapped [`Element`] tree.

use crate::error::XpdscError;
use crate::tree::Element;
use log::trace;
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use std::str;

/// Parses a complete XML document into its document node.
///
/// The returned element has an empty name; the document's root element is
/// its only child. Comments, processing instructions and the XML
/// declaration are dropped, entity references are resolved. Text that is
/// whitespace only is discarded, so `<vendor>  </vendor>` has no text.
///
/// # Errors
/// Returns `XpdscError::XmlParsing` for malformed markup and
/// `XpdscError::UnclosedElement` if the input ends inside an element.
pub fn parse_tree(xml: &str) -> Result<Element, XpdscError> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    let mut reader = Reader::from_str(xml);

    // stack[0] is the document node; the last entry is the open element.
    let mut stack = vec![Element::default()];

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                stack.push(open_element(&e)?);
            }
            Event::Empty(e) => {
                let element = open_element(&e)?;
                attach(&mut stack, element);
            }
            Event::End(_) => {
                // quick-xml already rejects mismatched or unmatched end tags.
                if stack.len() > 1 {
                    if let Some(element) = stack.pop() {
                        attach(&mut stack, element);
                    }
                }
            }
            Event::Text(e) => {
                let raw = str::from_utf8(&e)?;
                current(&mut stack).push_text(&unescape(raw)?);
            }
            Event::CData(e) => {
                current(&mut stack).push_text(str::from_utf8(&e)?);
            }
            Event::GeneralRef(e) => {
                let entity = format!("&{};", str::from_utf8(&e)?);
                current(&mut stack).push_text(&unescape(&entity)?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if stack.len() > 1 {
        let element = stack.pop().map(|e| e.name().to_string()).unwrap_or_default();
        return Err(XpdscError::UnclosedElement { element });
    }

    let mut document = stack.pop().unwrap_or_default();
    document.discard_blank_text();
    Ok(document)
}

/// Builds an element from a start (or empty) tag with all its attributes.
fn open_element(start: &BytesStart<'_>) -> Result<Element, XpdscError> {
    let name = str::from_utf8(start.name().into_inner())?;
    let mut element = Element::new(name);

    for attr in start.attributes() {
        let attr = attr?;
        let key = str::from_utf8(attr.key.as_ref())?;
        let value = unescape(str::from_utf8(&attr.value)?)?;
        element.set_attribute(key, value.into_owned());
    }

    trace!("Opened <{}>", name);
    Ok(element)
}

/// Finishes `element` and appends it to the currently open element.
fn attach(stack: &mut [Element], mut element: Element) {
    element.discard_blank_text();
    current(stack).push_child(element);
}

fn current(stack: &mut [Element]) -> &mut Element {
    // The document node is never popped, so the stack is never empty here.
    let last = stack.len() - 1;
    &mut stack[last]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array_wrapped_tree() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- comment -->
<package schemaVersion="1.4">
  <vendor>Keil</vendor>
  <devices>
    <family Dfamily="F1" Dvendor="ARM:82">
      <device Dname="D1"/>
      <feature type="SPI" n="2"/>
      <device Dname="D2"/>
    </family>
  </devices>
</package>"#;
        let doc = parse_tree(xml).unwrap();
        let package = doc.first("package").unwrap();
        assert_eq!(package.attribute("schemaVersion"), Some("1.4"));
        assert_eq!(package.first("vendor").and_then(Element::text), Some("Keil"));
        assert_eq!(package.text(), None);

        let family = package.first("devices").unwrap().first("family").unwrap();
        assert_eq!(family.attribute("Dvendor"), Some("ARM:82"));
        let devices: Vec<_> = family
            .children("device")
            .iter()
            .map(|d| d.attribute("Dname").unwrap())
            .collect();
        assert_eq!(devices, ["D1", "D2"]);
        assert_eq!(family.children("feature").len(), 1);
    }

    #[test]
    fn test_parse_resolves_entities_and_cdata() {
        let xml = "<d a=\"x &amp; y\">Tom &amp; Jerry &#65; <![CDATA[<raw>]]></d>";
        let doc = parse_tree(xml).unwrap();
        let d = doc.first("d").unwrap();
        assert_eq!(d.attribute("a"), Some("x & y"));
        assert_eq!(d.text(), Some("Tom & Jerry A <raw>"));
    }

    #[test]
    fn test_parse_keeps_crlf_in_text() {
        let xml = "<description>\r\n  line one\r\n  line two\r\n</description>";
        let doc = parse_tree(xml).unwrap();
        let text = doc.first("description").and_then(Element::text).unwrap();
        assert!(text.contains("\r\n"));
    }

    #[test]
    fn test_parse_strips_bom() {
        let doc = parse_tree("\u{feff}<package/>").unwrap();
        assert!(doc.has("package"));
    }

    #[test]
    fn test_parse_mismatched_end_tag() {
        let result = parse_tree("<package><name>x</vendor></package>");
        assert!(
            matches!(result, Err(XpdscError::XmlParsing(_))),
            "Expected XmlParsing error, got {:?}",
            result
        );
    }

    #[test]
    fn test_parse_unclosed_element() {
        let result = parse_tree("<package><devices>");
        assert!(
            matches!(result, Err(XpdscError::UnclosedElement { .. }) | Err(XpdscError::XmlParsing(_))),
            "Expected an unclosed-element error, got {:?}",
            result
        );
    }

    #[test]
    fn test_parse_collapses_blank_leaf_text() {
        let doc = parse_tree("<package><vendor>  </vendor><name> Keil </name><empty/></package>")
            .unwrap();
        let package = doc.first("package").unwrap();
        assert_eq!(package.first("vendor").and_then(Element::text), None);
        assert_eq!(package.first("name").and_then(Element::text), Some(" Keil "));
        assert_eq!(package.first("empty").and_then(Element::text), None);
    }

    #[test]
    fn test_parse_empty_document() {
        let doc = parse_tree("").unwrap();
        assert!(!doc.has("package"));
    }
}
