//! Debug access entities: `<debug>`, `<debugconfig>` and `<debugport>`.

use crate::numeric::LooseNumber;
use serde::Serialize;

/// `<debug>`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DebugOption {
    #[serde(rename = "Pname", skip_serializing_if = "Option::is_none")]
    pub pname: Option<String>,

    /// Debug port index.
    #[serde(rename = "__dp", skip_serializing_if = "Option::is_none")]
    pub dp: Option<LooseNumber>,

    /// Access port index.
    #[serde(rename = "__ap", skip_serializing_if = "Option::is_none")]
    pub ap: Option<LooseNumber>,

    /// System view description file, with forward slashes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svd: Option<String>,
}

/// Default debug connection settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DebugConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock: Option<LooseNumber>,

    /// Only ever `Some(true)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swj: Option<bool>,
}

/// `<debugport>`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DebugPort {
    #[serde(rename = "__dp", skip_serializing_if = "Option::is_none")]
    pub dp: Option<LooseNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub jtag: Option<JtagPort>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub swd: Option<SwdPort>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cjtag: Option<JtagPort>,
}

/// `<jtag>` and `<cjtag>` share the same attribute set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JtagPort {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tapindex: Option<LooseNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub idcode: Option<String>,

    /// Instruction register length in bits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub irlen: Option<LooseNumber>,
}

/// `<swd>`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SwdPort {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idcode: Option<String>,
}
