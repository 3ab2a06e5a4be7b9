//! Board entities from the `<boards>` section.

use super::Vendor;
use crate::numeric::LooseNumber;
use serde::Serialize;

/// `<board>`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Board {
    #[serde(rename = "vendorName", skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "mountedDevices", skip_serializing_if = "Vec::is_empty")]
    pub mounted_devices: Vec<BoardDevice>,

    #[serde(rename = "compatibleDevices", skip_serializing_if = "Vec::is_empty")]
    pub compatible_devices: Vec<BoardDevice>,

    #[serde(rename = "debugInterfaces", skip_serializing_if = "Vec::is_empty")]
    pub debug_interfaces: Vec<BoardDebugInterface>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<BoardFeature>,
}

/// `<mountedDevice>` or `<compatibleDevice>`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoardDevice {
    #[serde(rename = "deviceIndex", skip_serializing_if = "Option::is_none")]
    pub device_index: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<Vendor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    #[serde(rename = "subFamily", skip_serializing_if = "Option::is_none")]
    pub sub_family: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// `<debugInterface>`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoardDebugInterface {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adapter: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector: Option<String>,
}

/// Board `<feature>`; unlike device features it carries no classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoardFeature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<LooseNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub m: Option<LooseNumber>,
}
