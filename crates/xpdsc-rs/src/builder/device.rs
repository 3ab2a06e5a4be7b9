// crates/xpdsc-rs/src/builder/device.rs

//! Structural builders for the device tree:
//! `<family>` → `<subFamily>` → `<device>` → `<variant>`.

use super::debug::{build_debug, build_debug_config, build_debug_port};
use super::processor::{build_compile, build_feature, build_memory, build_processor};
use super::utils::{copy, vendor};
use crate::error::XpdscError;
use crate::model::{Device, DeviceProperties, Family, FamilyChild, NodeType, SubFamily, Variant};
use crate::normalize::filter_description;
use crate::tree::Element;
use log::debug;

/// The description of a structural node.
///
/// A `<description>` child is always reported, even when it is empty; only
/// a missing child omits the field.
pub(super) fn description(element: &Element) -> Option<String> {
    element
        .first("description")
        .map(|d| filter_description(d.text()).unwrap_or_default())
}

/// Builds the optional properties common to families, sub-families and
/// devices. Each output field is guarded by the presence of its element.
fn build_properties(element: &Element) -> Result<DeviceProperties, XpdscError> {
    // Presence of <debugconfig> selects the settings, but they are read from
    // the first <debug> element. Kept as-is until the schema owner confirms
    // the intended source.
    let debug_configs = if element.has("debugconfig") {
        let debug = element.require("debug", "debug (read for debugconfig)")?;
        debug!("Reading <debugconfig> settings from the first <debug>");
        Some(build_debug_config(debug))
    } else {
        None
    };

    Ok(DeviceProperties {
        compile: element.first("compile").map(build_compile),
        processor: element.first("processor").map(build_processor),
        memory_sections: element.children("memory").iter().map(build_memory).collect(),
        features: element.children("feature").iter().map(build_feature).collect(),
        debug_options: element.children("debug").iter().map(build_debug).collect(),
        debug_configs,
        debug_ports: element
            .children("debugport")
            .iter()
            .map(build_debug_port)
            .collect(),
    })
}

pub(crate) fn build_family(element: &Element) -> Result<Family, XpdscError> {
    let name = copy(element, "Dfamily");
    debug!("Building family {:?}", name);

    let properties = build_properties(element)?;
    let mut children = element
        .children("subFamily")
        .iter()
        .map(|e| build_sub_family(e).map(FamilyChild::SubFamily))
        .collect::<Result<Vec<_>, _>>()?;
    for device in element.children("device") {
        children.push(FamilyChild::Device(build_device(device)?));
    }

    Ok(Family {
        name,
        node_type: NodeType::Family,
        description: description(element),
        vendor: vendor(element),
        properties,
        children,
    })
}

pub(crate) fn build_sub_family(element: &Element) -> Result<SubFamily, XpdscError> {
    let name = copy(element, "DsubFamily");
    debug!("Building sub-family {:?}", name);

    Ok(SubFamily {
        name,
        node_type: NodeType::SubFamily,
        description: description(element),
        properties: build_properties(element)?,
        children: element
            .children("device")
            .iter()
            .map(build_device)
            .collect::<Result<_, _>>()?,
    })
}

pub(crate) fn build_device(element: &Element) -> Result<Device, XpdscError> {
    let name = copy(element, "Dname");
    debug!("Building device {:?}", name);

    Ok(Device {
        name,
        node_type: NodeType::Device,
        description: description(element),
        properties: build_properties(element)?,
        children: element.children("variant").iter().map(build_variant).collect(),
    })
}

/// Variants end the recursion; they only carry features.
pub(crate) fn build_variant(element: &Element) -> Variant {
    Variant {
        name: copy(element, "Dvariant"),
        node_type: NodeType::Variant,
        description: description(element),
        features: element.children("feature").iter().map(build_feature).collect(),
    }
}
