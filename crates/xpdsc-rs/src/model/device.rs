//! Device tree entities: families, sub-families, devices, variants and
//! their per-level properties.

use super::{DebugConfig, DebugOption, DebugPort, NodeType, Vendor};
use crate::numeric::LooseNumber;
use serde::{Serialize, Serializer};

/// Properties shared by families, sub-families and devices.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeviceProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compile: Option<Compile>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor: Option<Processor>,

    #[serde(rename = "memorySections", skip_serializing_if = "Vec::is_empty")]
    pub memory_sections: Vec<MemorySection>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,

    #[serde(rename = "debugOptions", skip_serializing_if = "Vec::is_empty")]
    pub debug_options: Vec<DebugOption>,

    #[serde(rename = "debugConfigs", skip_serializing_if = "Option::is_none")]
    pub debug_configs: Option<DebugConfig>,

    #[serde(rename = "debugPorts", skip_serializing_if = "Vec::is_empty")]
    pub debug_ports: Vec<DebugPort>,
}

/// `<family>`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Family {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub node_type: NodeType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<Vendor>,

    #[serde(flatten)]
    pub properties: DeviceProperties,

    /// Sub-families first, then devices, each in document order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FamilyChild>,
}

/// A direct child of a family.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FamilyChild {
    SubFamily(SubFamily),
    Device(Device),
}

/// `<subFamily>`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubFamily {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub node_type: NodeType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub properties: DeviceProperties,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Device>,
}

/// `<device>`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Device {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub node_type: NodeType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub properties: DeviceProperties,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Variant>,
}

/// `<variant>`, the leaf of the device tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub node_type: NodeType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,
}

/// `<compile>`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Compile {
    #[serde(rename = "Pname", skip_serializing_if = "Option::is_none")]
    pub pname: Option<String>,

    /// Device header file, with forward slashes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub define: Option<String>,
}

/// FPU or MPU presence of a processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessorUnit {
    /// Declared as `"0"`.
    Absent(&'static str),
    /// Declared as `"1"`.
    Present(&'static str),
    /// Any other declaration (e.g. `"SP_FPU"`), kept verbatim.
    Other(String),
}

impl ProcessorUnit {
    pub fn as_str(&self) -> &str {
        match self {
            ProcessorUnit::Absent(s) | ProcessorUnit::Present(s) => *s,
            ProcessorUnit::Other(s) => s.as_str(),
        }
    }
}

impl Serialize for ProcessorUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// `<processor>`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Processor {
    #[serde(rename = "Pname", skip_serializing_if = "Option::is_none")]
    pub pname: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<Vendor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub core: Option<String>,

    #[serde(rename = "coreVersion", skip_serializing_if = "Option::is_none")]
    pub core_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fpu: Option<ProcessorUnit>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpu: Option<ProcessorUnit>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub endian: Option<String>,

    /// Maximum core clock in Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock: Option<LooseNumber>,
}

/// `<memory>`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemorySection {
    #[serde(rename = "Pname", skip_serializing_if = "Option::is_none")]
    pub pname: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Only ever `Some(true)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup: Option<bool>,

    /// Only ever `Some(true)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// The family a feature type code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureClass {
    /// Package outlines (BGA, QFP, ...).
    Package,
    /// Communication peripherals (CAN, SPI, USB, ...).
    Interface,
    /// Clock sources (XTAL, IntRC, RTC).
    Clock,
}

/// Device or variant `<feature>`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Feature {
    #[serde(rename = "Pname", skip_serializing_if = "Option::is_none")]
    pub pname: Option<String>,

    /// The raw `type` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub class: Option<FeatureClass>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<LooseNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub m: Option<LooseNumber>,
}
