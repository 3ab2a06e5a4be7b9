//! The xpdsc JSON document, one `serde` struct per output entity.
//!
//! Field names follow the xpdsc schema exactly (including the `Pname` and
//! `__dp` spellings inherited from the `.pdsc` attributes). Every optional
//! field is skipped when absent, so the JSON never carries `null`, `[]` or
//! `{}` placeholders for data the source did not have.

#![allow(clippy::pedantic)] // Schema naming conventions differ from Rust

use crate::numeric::LooseNumber;
use serde::Serialize;

pub mod board;
pub mod debug;
pub mod device;

pub use board::{Board, BoardDebugInterface, BoardDevice, BoardFeature};
pub use debug::{DebugConfig, DebugOption, DebugPort, JtagPort, SwdPort};
pub use device::{
    Compile, Device, DeviceProperties, Family, FamilyChild, Feature, FeatureClass, MemorySection,
    Processor, ProcessorUnit, SubFamily, Variant,
};

/// The root of an xpdsc document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Package {
    #[serde(rename = "$schema")]
    pub schema: String,

    /// Provenance notice naming the `.pdsc` file this was generated from.
    pub warning: String,

    pub generators: Vec<String>,

    #[serde(rename = "vendorName")]
    pub vendor_name: String,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `version` of the first `<release>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// `date` of the first `<release>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Present only if the source had a `<devices>` section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<Family>>,

    /// Present only if the source had a `<boards>` section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boards: Option<Vec<Board>>,
}

/// The literal `type` tag of a structural node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Family,
    SubFamily,
    Device,
    Variant,
}

/// A vendor reference parsed from a `"Name:Id"` attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vendor {
    pub name: String,
    /// NaN (serialized as `null`) when the id is missing or not numeric.
    pub id: LooseNumber,
}
