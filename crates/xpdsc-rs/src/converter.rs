// crates/xpdsc-rs/src/converter.rs

//! End-to-end conversion: `.pdsc` text or file in, xpdsc JSON out.

use crate::builder::build_package;
use crate::error::XpdscError;
use crate::model::Package;
use crate::parser::parse_tree;
use log::{debug, info};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;

/// Parses `.pdsc` XML text and builds the xpdsc document.
///
/// `source_name` is only used for the provenance warning.
pub fn convert_str(xml_content: &str, source_name: &str) -> Result<Package, XpdscError> {
    let document = parse_tree(xml_content)?;
    build_package(&document, source_name)
}

/// Serializes a document as tab-indented JSON, without a trailing newline.
pub fn to_json_string(package: &Package) -> Result<String, XpdscError> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"\t"));
    package.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|e| XpdscError::Encoding(e.utf8_error()))
}

/// The base name of `input`, as quoted in the provenance warning.
pub fn source_name(input: &Path) -> String {
    input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Converts the `.pdsc` file at `input` and writes the JSON to `output`.
///
/// The destination is only written once the whole document has been built
/// and serialized, so a failed conversion never leaves partial output.
///
/// # Errors
/// Returns `XpdscError::Io` if the input cannot be read or the output cannot
/// be written, and any parsing or structural error from the conversion.
pub fn convert_file(input: &Path, output: &Path) -> Result<Package, XpdscError> {
    let xml_content = fs::read_to_string(input)?;
    debug!("Read {} bytes from '{}'", xml_content.len(), input.display());

    let package = convert_str(&xml_content, &source_name(input))?;
    let json = to_json_string(&package)?;

    fs::write(output, json)?;
    info!(
        "Converted '{}' into '{}'",
        input.display(),
        output.display()
    );
    Ok(package)
}
