//! Lossless JSON and YAML codec for schemaprims schema nodes.
//!
//! Decoding dispatches on the document shape: a boolean literal becomes a
//! boolean schema, an object becomes a [`SchemaObject`] with every
//! unrecognized key captured in `extras`, and anything else is
//! [`SchemaError::MalformedSchema`]. Encoding emits only present keywords,
//! keeps `properties` in declaration order and writes numeric bounds as
//! their exact decimal text.
//!
//! [`SchemaObject`]: schemaprims_model::SchemaObject
//! [`SchemaError::MalformedSchema`]: schemaprims_model::SchemaError::MalformedSchema

pub mod config;
pub mod decode;
pub mod encode;
pub mod json;
pub mod serde_schema;
pub mod yaml;

pub use config::{CodecConfig, KeyOrder, DEFAULT_MAX_DEPTH};
pub use decode::{from_value, from_value_with_config};
pub use encode::{to_value, to_value_with_config};
pub use json::{
    from_json_slice, from_json_slice_with_config, from_json_str, from_json_str_with_config,
    to_json_string, to_json_string_pretty, to_json_string_pretty_with_config,
    to_json_string_with_config,
};
pub use yaml::{from_yaml_str, from_yaml_str_with_config, to_yaml_string, to_yaml_string_with_config};

pub use schemaprims_model::{Result, Schema, SchemaError};
