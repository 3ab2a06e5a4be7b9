// crates/xpdsc-rs/src/builder/mod.rs

//! Maps the parsed `.pdsc` tree onto the xpdsc output model.
//!
//! The root builder produces the document envelope and delegates to the
//! structural builders (`device`, `board`), which in turn call the leaf
//! builders (`processor`, `debug`) for every element kind that is present.
//! Nothing is validated up front: a missing required element is reported
//! as `XpdscError::MissingElement` at the point it is first needed.

mod board;
mod debug;
mod device;
mod processor;
mod utils;

pub use processor::classify_feature;
pub use utils::parse_vendor;

use crate::error::XpdscError;
use crate::model::Package;
use crate::normalize::filter_description;
use crate::tree::Element;
use log::debug;

/// Identifier of the JSON schema the output conforms to.
pub const SCHEMA_ID: &str = "http://xcdl.github.io/schemas/xpdsc-1-1.json";

/// The tool named in the `generators` list.
pub const GENERATOR: &str = "xpdsc-rs generate-xpdsc";

/// Builds the xpdsc document from a parsed `.pdsc` document node.
///
/// `source_name` is the base name of the input file; it only appears in the
/// provenance warning. Only the first `<release>` contributes `version` and
/// `date`.
///
/// # Errors
/// Returns `XpdscError::MissingElement` if `package`, `vendor`, `name`,
/// `description` or `releases/release` is absent, or if a nested element
/// that must be read is missing.
pub fn build_package(document: &Element, source_name: &str) -> Result<Package, XpdscError> {
    let package = document.require("package", "package")?;
    let vendor = package.require("vendor", "package/vendor")?;
    let name = package.require("name", "package/name")?;
    let description = package.require("description", "package/description")?;
    let release = package
        .require("releases", "package/releases")?
        .require("release", "package/releases/release")?;

    let devices = package
        .first("devices")
        .map(|devices| {
            devices
                .children("family")
                .iter()
                .map(device::build_family)
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;

    let boards = package
        .first("boards")
        .map(|boards| {
            boards
                .children("board")
                .iter()
                .map(board::build_board)
                .collect::<Vec<_>>()
        });

    debug!(
        "Built package with {} families and {} boards",
        devices.as_ref().map_or(0, Vec::len),
        boards.as_ref().map_or(0, Vec::len)
    );

    Ok(Package {
        schema: SCHEMA_ID.to_string(),
        warning: format!("DO NOT EDIT! Automatically generated from {}", source_name),
        generators: vec![GENERATOR.to_string()],
        vendor_name: vendor.text().unwrap_or_default().to_string(),
        name: name.text().unwrap_or_default().to_string(),
        description: filter_description(description.text()),
        version: release.attribute("version").map(str::to_string),
        date: release.attribute("date").map(str::to_string),
        devices,
        boards,
    })
}
