// crates/xpdsc-rs/src/builder/debug.rs

//! Leaf builders for the debug access elements.

use super::utils::{copy, flag_set, integer, path};
use crate::model::{DebugConfig, DebugOption, DebugPort, JtagPort, SwdPort};
use crate::tree::Element;

pub(crate) fn build_debug(element: &Element) -> DebugOption {
    DebugOption {
        pname: copy(element, "Pname"),
        dp: integer(element, "__dp"),
        ap: integer(element, "__ap"),
        svd: path(element, "svd"),
    }
}

/// Reads the connection defaults (`default`, `clock`, `swj`).
///
/// The caller passes the first `<debug>` element, not the `<debugconfig>`
/// one; see `device::build_properties`.
pub(crate) fn build_debug_config(element: &Element) -> DebugConfig {
    DebugConfig {
        default: copy(element, "default"),
        clock: integer(element, "clock"),
        swj: flag_set(element, "swj"),
    }
}

pub(crate) fn build_debug_port(element: &Element) -> DebugPort {
    DebugPort {
        dp: integer(element, "__dp"),
        jtag: element.first("jtag").map(build_jtag),
        swd: element.first("swd").map(|swd| SwdPort {
            idcode: swd.flag("idcode").map(str::to_string),
        }),
        cjtag: element.first("cjtag").map(build_jtag),
    }
}

/// `<jtag>` and `<cjtag>`; each field only when its attribute is set.
fn build_jtag(element: &Element) -> JtagPort {
    JtagPort {
        tapindex: integer(element, "tapindex"),
        idcode: element.flag("idcode").map(str::to_string),
        irlen: integer(element, "irlen"),
    }
}
