// crates/xpdsc-rs/src/error.rs

use core::fmt;
use core::str::Utf8Error;
use quick_xml::Error as XmlError;
use quick_xml::escape::EscapeError;
use quick_xml::events::attributes::AttrError;
use std::io;

/// Errors that can occur while converting a `.pdsc` file to xpdsc JSON.
#[derive(Debug)]
pub enum XpdscError {
    /// The source file could not be read, or the destination could not be written.
    Io(io::Error),

    /// An error from the underlying `quick-xml` reader (malformed XML).
    XmlParsing(XmlError),

    /// The document ended while an element was still open.
    UnclosedElement { element: String },

    /// Element names, attributes or text were not valid UTF-8.
    Encoding(Utf8Error),

    /// An error from the `serde_json` serializer.
    Json(serde_json::Error),

    /// A structurally required element was missing (e.g. `package/releases/release`).
    MissingElement { path: &'static str },
}

impl From<io::Error> for XpdscError {
    fn from(e: io::Error) -> Self {
        XpdscError::Io(e)
    }
}

impl From<XmlError> for XpdscError {
    fn from(e: XmlError) -> Self {
        XpdscError::XmlParsing(e)
    }
}

impl From<AttrError> for XpdscError {
    fn from(e: AttrError) -> Self {
        XpdscError::XmlParsing(XmlError::InvalidAttr(e))
    }
}

impl From<EscapeError> for XpdscError {
    fn from(e: EscapeError) -> Self {
        XpdscError::XmlParsing(XmlError::Escape(e))
    }
}

impl From<Utf8Error> for XpdscError {
    fn from(e: Utf8Error) -> Self {
        XpdscError::Encoding(e)
    }
}

impl From<serde_json::Error> for XpdscError {
    fn from(e: serde_json::Error) -> Self {
        XpdscError::Json(e)
    }
}

impl fmt::Display for XpdscError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XpdscError::Io(e) => write!(f, "I/O error: {}", e),
            XpdscError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            XpdscError::UnclosedElement { element } => {
                write!(f, "Unexpected end of document, element <{}> is not closed", element)
            }
            XpdscError::Encoding(e) => write!(f, "Invalid UTF-8 in document: {}", e),
            XpdscError::Json(e) => write!(f, "JSON serializing error: {}", e),
            XpdscError::MissingElement { path } => {
                write!(f, "Missing required XML element: {}", path)
            }
        }
    }
}

impl std::error::Error for XpdscError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            XpdscError::Io(e) => Some(e),
            XpdscError::XmlParsing(e) => Some(e),
            XpdscError::Encoding(e) => Some(e),
            XpdscError::Json(e) => Some(e),
            XpdscError::UnclosedElement { .. } | XpdscError::MissingElement { .. } => None,
        }
    }
}
