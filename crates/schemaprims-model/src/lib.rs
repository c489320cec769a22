//! In-memory JSON Schema 2020-12 node model.
//!
//! A [`Schema`] is either a boolean schema (`true` / `false`) or a
//! [`SchemaObject`] holding every 2020-12 keyword as an optional field.
//! Keywords the model does not know are kept verbatim in an [`Extras`] map
//! that refuses modeled keywords, and `properties` keeps declaration order, so a
//! document survives a decode/encode round trip without losing information.
//!
//! The model is a container, not a validator: contradictory constraints such
//! as `minLength > maxLength` are stored as given.

pub mod decimal;
pub mod error;
pub mod extras;
pub mod keyword;
pub mod ordered;
pub mod schema;
pub mod walk;

pub use decimal::Decimal;
pub use error::{Result, SchemaError};
pub use extras::Extras;
pub use keyword::DRAFT_2020_12;
pub use ordered::OrderedMap;
pub use schema::{InstanceType, Schema, SchemaObject, SourceOrder};
pub use walk::escape_pointer_segment;
