// crates/xpdsc-rs/tests/conversion.rs

use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;
use xpdsc_rs::model::{FamilyChild, FeatureClass, NodeType};
use xpdsc_rs::{GENERATOR, SCHEMA_ID, convert_file, convert_str, to_json_string};

fn test_file_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(name);
    path
}

/// Helper function to load a test file from the `tests/data/` directory.
fn load_test_file(name: &str) -> String {
    env_logger::try_init().ok(); // Ignore error if already initialized
    let path = test_file_path(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test file {:?}: {}", path, e))
}

/// Converts a fixture and re-reads the emitted JSON as a generic value.
fn convert_to_value(name: &str) -> Value {
    let package = convert_str(&load_test_file(name), name).expect("Conversion failed");
    let json = to_json_string(&package).expect("Serialization failed");
    serde_json::from_str(&json).expect("Output is not valid JSON")
}

#[test]
fn test_minimal_pack() {
    let value = convert_to_value("Minimal.pdsc");

    assert_eq!(value["$schema"], SCHEMA_ID);
    assert_eq!(
        value["warning"],
        "DO NOT EDIT! Automatically generated from Minimal.pdsc"
    );
    assert_eq!(value["generators"], json!([GENERATOR]));
    assert_eq!(value["vendorName"], "Acme");
    assert_eq!(value["name"], "Minimal_DFP");
    assert_eq!(value["description"], "Minimal device family pack");
    assert_eq!(value["version"], "1.0.0");
    assert_eq!(value["date"], "2015-01-01");
    assert!(value.get("boards").is_none());

    let devices = value["devices"].as_array().unwrap();
    assert_eq!(devices.len(), 1);

    let family = &devices[0];
    assert_eq!(family["name"], "Acme M0");
    assert_eq!(family["type"], "family");
    assert_eq!(family["vendor"], json!({ "name": "Acme", "id": 99 }));
    assert_eq!(
        family["processor"],
        json!({
            "core": "Cortex-M0",
            "coreVersion": "r0p0",
            "endian": "Little-endian",
            "clock": 48000000
        })
    );

    let device = &family["children"][0];
    assert_eq!(device["type"], "device");
    assert_eq!(device["name"], "ACME001");
    assert_eq!(
        device["memorySections"],
        json!([{
            "id": "IROM1",
            "start": "0x00000000",
            "size": "0x8000",
            "startup": true,
            "default": true
        }])
    );
}

#[test]
fn test_output_layout() {
    let package = convert_str(&load_test_file("Minimal.pdsc"), "Minimal.pdsc").unwrap();
    let json = to_json_string(&package).unwrap();

    assert!(json.starts_with("{\n\t\"$schema\": "));
    assert!(json.ends_with('}'));
    assert!(json.contains("\n\t\t{\n\t\t\t\"name\": \"Acme M0\",\n\t\t\t\"type\": \"family\","));

    // Envelope keys appear in a fixed order.
    let keys = [
        "\"$schema\"",
        "\"warning\"",
        "\"generators\"",
        "\"vendorName\"",
        "\"name\"",
        "\"description\"",
        "\"version\"",
        "\"date\"",
        "\"devices\"",
    ];
    let positions: Vec<_> = keys.iter().map(|k| json.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_conversion_is_deterministic() {
    let xml = load_test_file("Keil.STM32F4xx_DFP.pdsc");
    let first = to_json_string(&convert_str(&xml, "a.pdsc").unwrap()).unwrap();
    let second = to_json_string(&convert_str(&xml, "a.pdsc").unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_full_pack_hierarchy() {
    let package = convert_str(
        &load_test_file("Keil.STM32F4xx_DFP.pdsc"),
        "Keil.STM32F4xx_DFP.pdsc",
    )
    .unwrap();

    // Only the first release is used; the description keeps inner line breaks.
    assert_eq!(package.version.as_deref(), Some("2.1.0"));
    assert_eq!(package.date.as_deref(), Some("2014-11-20"));
    assert_eq!(
        package.description.as_deref(),
        Some("STMicroelectronics STM32F4 Series Device Support\n    and Examples")
    );

    let families = package.devices.as_ref().unwrap();
    let family = &families[0];
    assert_eq!(family.node_type, NodeType::Family);
    assert_eq!(
        family.description.as_deref(),
        Some("The STM32F4 family & friends.")
    );
    assert_eq!(family.children.len(), 2);

    let FamilyChild::SubFamily(sub) = &family.children[0] else {
        panic!("Expected the sub-family first");
    };
    assert_eq!(sub.name.as_deref(), Some("STM32F405"));
    assert_eq!(
        sub.properties
            .processor
            .as_ref()
            .and_then(|p| p.clock)
            .and_then(|c| c.as_i64()),
        Some(168_000_000)
    );

    let device = &sub.children[0];
    assert_eq!(device.properties.memory_sections.len(), 2);
    let iram = &device.properties.memory_sections[1];
    assert_eq!(iram.id.as_deref(), Some("IRAM1"));
    assert_eq!(iram.startup, None);
    assert_eq!(iram.default, None);

    let variant = &device.children[0];
    assert_eq!(variant.node_type, NodeType::Variant);
    assert_eq!(variant.features[0].class, Some(FeatureClass::Package));
    assert_eq!(variant.features[0].description.as_deref(), Some("WLCSP Package"));

    let FamilyChild::Device(direct) = &family.children[1] else {
        panic!("Expected the direct device last");
    };
    assert_eq!(direct.name.as_deref(), Some("STM32F401CB"));
    assert!(direct.children.is_empty());
}

#[test]
fn test_family_properties() {
    let value = convert_to_value("Keil.STM32F4xx_DFP.pdsc");
    let family = &value["devices"][0];

    assert_eq!(family["vendor"], json!({ "name": "STMicroelectronics", "id": 13 }));
    assert_eq!(family["processor"]["fpu"], "FPU");
    assert_eq!(family["processor"]["mpu"], "MPU");
    assert_eq!(family["compile"], json!({ "header": "Device/Include/stm32f4xx.h" }));
    assert_eq!(
        family["debugOptions"],
        json!([{ "__dp": 0, "__ap": 0, "svd": "SVD/STM32F40x.svd" }])
    );
    assert_eq!(
        family["debugConfigs"],
        json!({ "default": "swd", "clock": 10000000, "swj": true })
    );
    assert_eq!(
        family["debugPorts"],
        json!([{
            "__dp": 0,
            "jtag": { "tapindex": 0, "idcode": "0x4BA00477", "irlen": 4 },
            "swd": { "idcode": "0x2BA01477" }
        }])
    );
    assert_eq!(
        family["features"],
        json!([
            { "name": "XTAL", "type": "clock", "n": 4000000, "m": 26000000 },
            { "name": "IntRC", "type": "clock", "n": 16000000 },
            { "name": "NVIC", "description": "Interrupt controller", "n": 82 }
        ])
    );
}

#[test]
fn test_boolean_fields_are_exact() {
    let value = convert_to_value("Keil.STM32F4xx_DFP.pdsc");
    let memories = &value["devices"][0]["children"][0]["children"][0]["memorySections"];

    assert_eq!(memories[0]["startup"], Value::Bool(true));
    assert_eq!(memories[0]["default"], Value::Bool(true));
    // `default="0"` never becomes `false`; the key is dropped.
    assert!(memories[1].get("default").is_none());
    assert!(memories[1].get("init").is_none());
}

#[test]
fn test_boards_section() {
    let value = convert_to_value("Keil.STM32F4xx_DFP.pdsc");
    assert_eq!(
        value["boards"],
        json!([{
            "vendorName": "STMicroelectronics",
            "name": "STM32F4-Discovery",
            "revision": "Rev.C",
            "description": "STMicroelectronics STM32F4 Discovery Board",
            "mountedDevices": [{
                "deviceIndex": "0",
                "vendor": { "name": "STMicroelectronics", "id": 13 },
                "name": "STM32F407VG"
            }],
            "compatibleDevices": [{
                "deviceIndex": "0",
                "vendor": { "name": "STMicroelectronics", "id": 13 },
                "family": "STM32F4 Series",
                "subFamily": "STM32F407"
            }],
            "debugInterfaces": [{ "adapter": "ST-Link", "connector": "Mini-USB" }],
            "features": [{ "name": "XTAL", "n": 8000000 }]
        }])
    );
}

#[test]
fn test_convert_file_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("xpdsc.json");

    let package = convert_file(&test_file_path("Minimal.pdsc"), &output).unwrap();
    let written = fs::read_to_string(&output).unwrap();

    assert_eq!(written, to_json_string(&package).unwrap());
    assert!(!written.ends_with('\n'));
    assert!(written.contains("Automatically generated from Minimal.pdsc"));
}
