// crates/xpdsc-rs/src/builder/processor.rs

//! Leaf builders for `<compile>`, `<processor>`, `<memory>` and `<feature>`.

use super::utils::{copy, flag_set, integer, number, path, vendor};
use crate::model::{Compile, Feature, FeatureClass, MemorySection, Processor, ProcessorUnit};
use crate::normalize::filter_description;
use crate::tree::Element;

pub(crate) fn build_compile(element: &Element) -> Compile {
    Compile {
        pname: copy(element, "Pname"),
        header: path(element, "header"),
        define: copy(element, "define"),
    }
}

pub(crate) fn build_processor(element: &Element) -> Processor {
    Processor {
        pname: copy(element, "Pname"),
        vendor: vendor(element),
        core: copy(element, "Dcore"),
        core_version: copy(element, "DcoreVersion"),
        fpu: element
            .flag("Dfpu")
            .map(|v| map_unit(v, ProcessorUnit::Absent("NO_FPU"), ProcessorUnit::Present("FPU"))),
        mpu: element
            .flag("Dmpu")
            .map(|v| map_unit(v, ProcessorUnit::Absent("NO_MPU"), ProcessorUnit::Present("MPU"))),
        endian: copy(element, "Dendian"),
        clock: integer(element, "Dclock"),
    }
}

/// Maps the `"0"`/`"1"` presence codes; other values pass through.
fn map_unit(value: &str, absent: ProcessorUnit, present: ProcessorUnit) -> ProcessorUnit {
    match value {
        "0" => absent,
        "1" => present,
        other => ProcessorUnit::Other(other.to_string()),
    }
}

pub(crate) fn build_memory(element: &Element) -> MemorySection {
    MemorySection {
        pname: copy(element, "Pname"),
        name: copy(element, "name"),
        id: copy(element, "id"),
        access: copy(element, "access"),
        start: copy(element, "start"),
        size: copy(element, "size"),
        startup: flag_set(element, "startup"),
        default: flag_set(element, "default"),
        alias: copy(element, "alias"),
    }
}

/// Classifies a `<feature type="...">` code; unknown codes have no class.
pub fn classify_feature(type_code: &str) -> Option<FeatureClass> {
    match type_code {
        "BGA" | "CSP" | "PLCC" | "QFN" | "QFP" | "SOP" | "DIP" | "PackageOther" => {
            Some(FeatureClass::Package)
        }
        "CAN" | "ETH" | "I2C" | "I2S" | "LIN" | "SDIO" | "SPI" | "UART" | "USART" | "USBD"
        | "USBH" | "USBOTG" => Some(FeatureClass::Interface),
        "XTAL" | "IntRC" | "RTC" => Some(FeatureClass::Clock),
        _ => None,
    }
}

pub(crate) fn build_feature(element: &Element) -> Feature {
    let type_code = element.attribute("type");
    Feature {
        pname: copy(element, "Pname"),
        name: type_code.map(str::to_string),
        class: type_code.and_then(classify_feature),
        description: filter_description(element.attribute("name")),
        n: number(element, "n"),
        m: number(element, "m"),
    }
}
