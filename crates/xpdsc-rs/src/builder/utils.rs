// crates/xpdsc-rs/src/builder/utils.rs

//! Small helpers shared by the builders.

use crate::model::Vendor;
use crate::normalize::filter_path;
use crate::numeric::{LooseNumber, parse_int_loose, parse_number_loose};
use crate::tree::Element;
use log::warn;

/// Parses a `"Name:Id"` vendor reference.
///
/// The id is parsed leniently; a missing or non-numeric id becomes NaN
/// instead of failing the conversion.
pub fn parse_vendor(value: &str) -> Vendor {
    let mut parts = value.split(':');
    let name = parts.next().unwrap_or_default().to_string();
    let id = parts.next().map(parse_int_loose).unwrap_or(LooseNumber::NAN);
    if id.is_nan() {
        warn!("Vendor reference '{}' has no numeric id", value);
    }
    Vendor { name, id }
}

/// Copies an attribute verbatim, keeping empty values.
pub(super) fn copy(element: &Element, name: &str) -> Option<String> {
    element.attribute(name).map(str::to_string)
}

/// Copies a path attribute with its separators normalized.
pub(super) fn path(element: &Element, name: &str) -> Option<String> {
    element.attribute(name).map(filter_path)
}

/// Parses a base-10 integer attribute if it is present and non-empty.
pub(super) fn integer(element: &Element, name: &str) -> Option<LooseNumber> {
    element.flag(name).map(|v| {
        let n = parse_int_loose(v);
        if n.is_nan() {
            warn!("<{}> attribute {}='{}' is not an integer", element.name(), name, v);
        }
        n
    })
}

/// Parses a (possibly fractional) number attribute if present and non-empty.
pub(super) fn number(element: &Element, name: &str) -> Option<LooseNumber> {
    element.flag(name).map(|v| {
        let n = parse_number_loose(v);
        if n.is_nan() {
            warn!("<{}> attribute {}='{}' is not a number", element.name(), name, v);
        }
        n
    })
}

/// `Some(true)` only when the attribute is exactly `"1"`.
pub(super) fn flag_set(element: &Element, name: &str) -> Option<bool> {
    (element.attribute(name) == Some("1")).then_some(true)
}

/// The vendor reference in `Dvendor`, if present and non-empty.
pub(super) fn vendor(element: &Element) -> Option<Vendor> {
    element.flag("Dvendor").map(parse_vendor)
}
