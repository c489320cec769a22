//! Lossless JSON Schema 2020-12 documents.
//!
//! schemaprims keeps a schema exactly as written: boolean schemas stay
//! boolean, `properties` keep their declaration order, and keywords the model
//! does not know are carried through untouched.
//!
//! # Crate Structure
//!
//! - [`model`] — `Schema` / `SchemaObject` node model and traversal
//! - [`codec`] — JSON and YAML decode/encode with configurable key order
//!
//! ```ignore
//! let schema = schemaprims::from_json_str(r#"{"type":"string","x-custom":42}"#)?;
//! assert_eq!(schemaprims::to_json_string(&schema)?, r#"{"type":"string","x-custom":42}"#);
//! ```

/// Re-export model types.
pub mod model {
    pub use schemaprims_model::*;
}

/// Re-export codec types.
pub mod codec {
    pub use schemaprims_codec::*;
}

pub use schemaprims_codec::{
    from_json_str, from_value, from_yaml_str, to_json_string, to_json_string_pretty, to_value,
    to_yaml_string, CodecConfig, KeyOrder,
};
pub use schemaprims_model::{
    Decimal, Extras, InstanceType, OrderedMap, Result, Schema, SchemaError, SchemaObject,
    DRAFT_2020_12,
};
