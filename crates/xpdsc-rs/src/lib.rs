// crates/xpdsc-rs/src/lib.rs

#![doc = "Converts CMSIS Pack Description (`.pdsc`) files into xpdsc JSON."]
#![doc = ""]
#![doc = "The conversion is a single synchronous pass: the XML is read into a generic"]
#![doc = "array-wrapped tree, the tree is mapped onto the typed xpdsc model, and the"]
#![doc = "model is serialized with tab indentation."]
#![doc = ""]
#![doc = "It provides:"]
#![doc = "- `convert_str`: Building the xpdsc document from `.pdsc` text."]
#![doc = "- `convert_file`: Converting a `.pdsc` file into a `.json` file."]
#![doc = "- `to_json_string`: Serializing a document in the xpdsc layout."]

// --- Crate Modules ---

mod builder;
mod converter;
mod error;
pub mod model;
mod normalize;
mod numeric;
mod parser;
mod tree;

// --- Public API Re-exports ---

pub use builder::{GENERATOR, SCHEMA_ID, build_package, classify_feature, parse_vendor};
pub use converter::{convert_file, convert_str, source_name, to_json_string};
pub use error::XpdscError;
pub use model::Package;
pub use normalize::{filter_description, filter_path};
pub use numeric::{LooseNumber, parse_int_loose, parse_number_loose};
pub use parser::parse_tree;
pub use tree::Element;
