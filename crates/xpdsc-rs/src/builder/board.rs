// crates/xpdsc-rs/src/builder/board.rs

//! Builders for the `<boards>` section.

use super::device::description;
use super::utils::{copy, number, vendor};
use crate::model::{Board, BoardDebugInterface, BoardDevice, BoardFeature};
use crate::normalize::filter_description;
use crate::tree::Element;
use log::debug;

pub(crate) fn build_board(element: &Element) -> Board {
    let name = copy(element, "name");
    debug!("Building board {:?}", name);

    Board {
        vendor_name: copy(element, "vendor"),
        name,
        revision: copy(element, "revision"),
        description: description(element),
        mounted_devices: element
            .children("mountedDevice")
            .iter()
            .map(build_board_device)
            .collect(),
        compatible_devices: element
            .children("compatibleDevice")
            .iter()
            .map(build_board_device)
            .collect(),
        debug_interfaces: element
            .children("debugInterface")
            .iter()
            .map(build_board_debug_interface)
            .collect(),
        features: element
            .children("feature")
            .iter()
            .map(build_board_feature)
            .collect(),
    }
}

/// `<mountedDevice>` and `<compatibleDevice>` share one shape.
pub(crate) fn build_board_device(element: &Element) -> BoardDevice {
    BoardDevice {
        device_index: copy(element, "deviceIndex"),
        vendor: vendor(element),
        family: copy(element, "Dfamily"),
        sub_family: copy(element, "DsubFamily"),
        name: copy(element, "Dname"),
    }
}

pub(crate) fn build_board_debug_interface(element: &Element) -> BoardDebugInterface {
    BoardDebugInterface {
        adapter: copy(element, "adapter"),
        connector: copy(element, "connector"),
    }
}

pub(crate) fn build_board_feature(element: &Element) -> BoardFeature {
    BoardFeature {
        name: copy(element, "type"),
        description: filter_description(element.attribute("name")),
        n: number(element, "n"),
        m: number(element, "m"),
    }
}
