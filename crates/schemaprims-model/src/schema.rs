use std::collections::BTreeMap;

use serde_json::Value;

use crate::decimal::Decimal;
use crate::extras::Extras;
use crate::error::{Result, SchemaError};
use crate::keyword;
use crate::ordered::OrderedMap;

/// One JSON Schema node: a boolean schema or a keyword object.
///
/// `true` accepts every instance and `false` rejects every instance. Object
/// schemas carry their keywords in [`SchemaObject`].
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Bool(bool),
    Object(Box<SchemaObject>),
}

impl Schema {
    /// The schema every instance is valid against.
    pub const TRUE: Schema = Schema::Bool(true);

    /// The schema no instance is valid against.
    pub const FALSE: Schema = Schema::Bool(false);

    /// Wrap an object schema.
    pub fn object(object: SchemaObject) -> Self {
        Self::Object(Box::new(object))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Self::Bool(true))
    }

    pub fn is_false(&self) -> bool {
        matches!(self, Self::Bool(false))
    }

    /// Boolean value of a boolean schema.
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Self::Bool(value) => Ok(*value),
            Self::Object(_) => Err(self.variant_error("boolean")),
        }
    }

    pub fn as_object(&self) -> Result<&SchemaObject> {
        match self {
            Self::Object(object) => Ok(&**object),
            Self::Bool(_) => Err(self.variant_error("object")),
        }
    }

    pub fn as_object_mut(&mut self) -> Result<&mut SchemaObject> {
        match self {
            Self::Object(object) => Ok(&mut **object),
            Self::Bool(_) => Err(SchemaError::InvalidVariantAccess {
                expected: "object",
                found: "boolean",
            }),
        }
    }

    pub fn into_object(self) -> Result<SchemaObject> {
        match self {
            Self::Object(object) => Ok(*object),
            Self::Bool(_) => Err(SchemaError::InvalidVariantAccess {
                expected: "object",
                found: "boolean",
            }),
        }
    }

    pub fn title(&self) -> Result<Option<&str>> {
        Ok(self.as_object()?.title.as_deref())
    }

    pub fn description(&self) -> Result<Option<&str>> {
        Ok(self.as_object()?.description.as_deref())
    }

    pub fn instance_type(&self) -> Result<Option<&InstanceType>> {
        Ok(self.as_object()?.instance_type.as_ref())
    }

    pub fn properties(&self) -> Result<Option<&OrderedMap<Schema>>> {
        Ok(self.as_object()?.properties.as_ref())
    }

    pub fn required(&self) -> Result<Option<&[String]>> {
        Ok(self.as_object()?.required.as_deref())
    }

    pub fn extras(&self) -> Result<&Extras> {
        Ok(&self.as_object()?.extras)
    }

    /// Name of the active variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Object(_) => "object",
        }
    }

    fn variant_error(&self, expected: &'static str) -> SchemaError {
        SchemaError::InvalidVariantAccess {
            expected,
            found: self.kind(),
        }
    }
}

impl From<bool> for Schema {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<SchemaObject> for Schema {
    fn from(object: SchemaObject) -> Self {
        Self::object(object)
    }
}

/// The `type` keyword: one primitive type name or a list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceType {
    Single(String),
    Union(Vec<String>),
}

impl InstanceType {
    /// The type name when exactly one is declared.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(name) => Some(name),
            Self::Union(_) => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        match self {
            Self::Single(single) => single == name,
            Self::Union(names) => names.iter().any(|n| n == name),
        }
    }
}

impl From<&str> for InstanceType {
    fn from(name: &str) -> Self {
        Self::Single(name.to_string())
    }
}

impl From<String> for InstanceType {
    fn from(name: String) -> Self {
        Self::Single(name)
    }
}

impl From<Vec<String>> for InstanceType {
    fn from(names: Vec<String>) -> Self {
        Self::Union(names)
    }
}

/// Keys observed on decode, in source order.
///
/// Only consulted by encoders that re-emit source key order. It never takes
/// part in equality, so a decoded node still equals its programmatic twin.
#[derive(Debug, Clone, Default)]
pub struct SourceOrder(Vec<String>);

impl SourceOrder {
    pub fn new(keys: Vec<String>) -> Self {
        Self(keys)
    }

    pub fn keys(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for SourceOrder {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Keyword record of an object schema.
///
/// Every keyword is optional. `None` means the keyword is absent from the
/// document; `Some(false)`, `Some(0)` and `Some(Value::Null)` are explicit
/// values and are re-emitted. Unrecognized keywords live in [`Self::extras`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaObject {
    /// `$schema`
    pub schema: Option<String>,
    /// `$id`
    pub id: Option<String>,
    /// `$anchor`
    pub anchor: Option<String>,
    /// `$ref`
    pub reference: Option<String>,
    /// `$dynamicRef`
    pub dynamic_ref: Option<String>,
    /// `$defs`
    pub defs: Option<BTreeMap<String, Schema>>,
    /// `$comment`
    pub comment: Option<String>,

    pub all_of: Option<Vec<Schema>>,
    pub any_of: Option<Vec<Schema>>,
    pub one_of: Option<Vec<Schema>>,
    pub not: Option<Box<Schema>>,

    /// `if`
    pub if_: Option<Box<Schema>>,
    pub then: Option<Box<Schema>>,
    /// `else`
    pub else_: Option<Box<Schema>>,
    pub dependent_schemas: Option<BTreeMap<String, Schema>>,

    pub prefix_items: Option<Vec<Schema>>,
    pub items: Option<Box<Schema>>,
    pub contains: Option<Box<Schema>>,

    /// Declared properties, in declaration order.
    pub properties: Option<OrderedMap<Schema>>,
    pub pattern_properties: Option<BTreeMap<String, Schema>>,
    pub additional_properties: Option<Box<Schema>>,
    pub property_names: Option<Box<Schema>>,

    /// `type`
    pub instance_type: Option<InstanceType>,
    /// `enum`
    pub enumeration: Option<Vec<Value>>,
    /// `const`
    pub constant: Option<Value>,
    pub multiple_of: Option<Decimal>,
    pub maximum: Option<Decimal>,
    pub exclusive_maximum: Option<Decimal>,
    pub minimum: Option<Decimal>,
    pub exclusive_minimum: Option<Decimal>,
    pub max_length: Option<u64>,
    pub min_length: Option<u64>,
    pub pattern: Option<String>,
    pub max_items: Option<u64>,
    pub min_items: Option<u64>,
    pub unique_items: Option<bool>,
    pub max_contains: Option<u64>,
    pub min_contains: Option<u64>,
    pub max_properties: Option<u64>,
    pub min_properties: Option<u64>,
    pub required: Option<Vec<String>>,
    pub dependent_required: Option<BTreeMap<String, Vec<String>>>,

    pub format: Option<String>,
    pub content_encoding: Option<String>,
    pub content_media_type: Option<String>,
    pub content_schema: Option<Box<Schema>>,

    pub title: Option<String>,
    pub description: Option<String>,
    pub default: Option<Value>,
    pub deprecated: Option<bool>,
    pub read_only: Option<bool>,
    pub write_only: Option<bool>,
    pub examples: Option<Vec<Value>>,

    /// Unrecognized keywords, verbatim.
    pub extras: Extras,

    pub source_order: SourceOrder,
}

impl SchemaObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document root declaring the 2020-12 dialect.
    pub fn root() -> Self {
        Self {
            schema: Some(keyword::DRAFT_2020_12.to_string()),
            ..Self::default()
        }
    }

    /// The declared `$schema`, or the 2020-12 dialect when none is set.
    pub fn dialect(&self) -> &str {
        self.schema.as_deref().unwrap_or(keyword::DRAFT_2020_12)
    }

    /// Add a property, keeping declaration order.
    pub fn insert_property(&mut self, name: impl Into<String>, schema: impl Into<Schema>) {
        self.properties
            .get_or_insert_with(OrderedMap::new)
            .insert(name, schema.into());
    }

    /// Store an unrecognized keyword.
    ///
    /// Modeled keywords are rejected; set the field instead.
    pub fn insert_extra(&mut self, key: impl Into<String>, value: Value) -> Result<Option<Value>> {
        self.extras.insert(key, value)
    }

    /// Returns true if the given modeled keyword has a value.
    pub fn has_keyword(&self, key: &str) -> bool {
        match key {
            keyword::SCHEMA => self.schema.is_some(),
            keyword::ID => self.id.is_some(),
            keyword::ANCHOR => self.anchor.is_some(),
            keyword::REF => self.reference.is_some(),
            keyword::DYNAMIC_REF => self.dynamic_ref.is_some(),
            keyword::DEFS => self.defs.is_some(),
            keyword::COMMENT => self.comment.is_some(),
            keyword::ALL_OF => self.all_of.is_some(),
            keyword::ANY_OF => self.any_of.is_some(),
            keyword::ONE_OF => self.one_of.is_some(),
            keyword::NOT => self.not.is_some(),
            keyword::IF => self.if_.is_some(),
            keyword::THEN => self.then.is_some(),
            keyword::ELSE => self.else_.is_some(),
            keyword::DEPENDENT_SCHEMAS => self.dependent_schemas.is_some(),
            keyword::PREFIX_ITEMS => self.prefix_items.is_some(),
            keyword::ITEMS => self.items.is_some(),
            keyword::CONTAINS => self.contains.is_some(),
            keyword::PROPERTIES => self.properties.is_some(),
            keyword::PATTERN_PROPERTIES => self.pattern_properties.is_some(),
            keyword::ADDITIONAL_PROPERTIES => self.additional_properties.is_some(),
            keyword::PROPERTY_NAMES => self.property_names.is_some(),
            keyword::TYPE => self.instance_type.is_some(),
            keyword::ENUM => self.enumeration.is_some(),
            keyword::CONST => self.constant.is_some(),
            keyword::MULTIPLE_OF => self.multiple_of.is_some(),
            keyword::MAXIMUM => self.maximum.is_some(),
            keyword::EXCLUSIVE_MAXIMUM => self.exclusive_maximum.is_some(),
            keyword::MINIMUM => self.minimum.is_some(),
            keyword::EXCLUSIVE_MINIMUM => self.exclusive_minimum.is_some(),
            keyword::MAX_LENGTH => self.max_length.is_some(),
            keyword::MIN_LENGTH => self.min_length.is_some(),
            keyword::PATTERN => self.pattern.is_some(),
            keyword::MAX_ITEMS => self.max_items.is_some(),
            keyword::MIN_ITEMS => self.min_items.is_some(),
            keyword::UNIQUE_ITEMS => self.unique_items.is_some(),
            keyword::MAX_CONTAINS => self.max_contains.is_some(),
            keyword::MIN_CONTAINS => self.min_contains.is_some(),
            keyword::MAX_PROPERTIES => self.max_properties.is_some(),
            keyword::MIN_PROPERTIES => self.min_properties.is_some(),
            keyword::REQUIRED => self.required.is_some(),
            keyword::DEPENDENT_REQUIRED => self.dependent_required.is_some(),
            keyword::FORMAT => self.format.is_some(),
            keyword::CONTENT_ENCODING => self.content_encoding.is_some(),
            keyword::CONTENT_MEDIA_TYPE => self.content_media_type.is_some(),
            keyword::CONTENT_SCHEMA => self.content_schema.is_some(),
            keyword::TITLE => self.title.is_some(),
            keyword::DESCRIPTION => self.description.is_some(),
            keyword::DEFAULT => self.default.is_some(),
            keyword::DEPRECATED => self.deprecated.is_some(),
            keyword::READ_ONLY => self.read_only.is_some(),
            keyword::WRITE_ONLY => self.write_only.is_some(),
            keyword::EXAMPLES => self.examples.is_some(),
            _ => false,
        }
    }

    /// Modeled keywords that have a value, in canonical order.
    pub fn present_keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        keyword::ALL
            .iter()
            .copied()
            .filter(move |key| self.has_keyword(key))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn boolean_constants() {
        assert!(Schema::TRUE.is_bool());
        assert!(Schema::TRUE.is_true());
        assert!(Schema::FALSE.is_false());
        assert!(Schema::TRUE.as_bool().unwrap());
        assert!(!Schema::FALSE.as_bool().unwrap());
        assert_ne!(Schema::TRUE, Schema::FALSE);
        assert_eq!(Schema::from(true), Schema::TRUE);
    }

    #[test]
    fn boolean_is_never_equal_to_object() {
        let empty = Schema::object(SchemaObject::new());
        assert_ne!(empty, Schema::TRUE);
        assert!(!empty.is_bool());
    }

    #[test]
    fn object_access_on_boolean_fails() {
        let err = Schema::TRUE.as_object().unwrap_err();
        assert!(matches!(
            err,
            SchemaError::InvalidVariantAccess {
                expected: "object",
                found: "boolean"
            }
        ));
        assert!(Schema::FALSE.title().is_err());
        assert!(Schema::TRUE.extras().is_err());
        assert!(Schema::TRUE.into_object().is_err());
    }

    #[test]
    fn boolean_access_on_object_fails() {
        let schema = Schema::object(SchemaObject::new());
        assert!(matches!(
            schema.as_bool(),
            Err(SchemaError::InvalidVariantAccess {
                expected: "boolean",
                found: "object"
            })
        ));
    }

    #[test]
    fn dialect_defaults_to_2020_12() {
        let plain = SchemaObject::new();
        assert_eq!(plain.schema, None);
        assert_eq!(plain.dialect(), keyword::DRAFT_2020_12);

        let root = SchemaObject::root();
        assert_eq!(root.schema.as_deref(), Some(keyword::DRAFT_2020_12));

        let older = SchemaObject {
            schema: Some("http://json-schema.org/draft-07/schema#".to_string()),
            ..SchemaObject::default()
        };
        assert_eq!(older.dialect(), "http://json-schema.org/draft-07/schema#");
    }

    #[test]
    fn property_order_participates_in_equality() {
        let mut first = SchemaObject::new();
        first.insert_property("b", true);
        first.insert_property("a", true);

        let mut second = SchemaObject::new();
        second.insert_property("a", true);
        second.insert_property("b", true);

        assert_ne!(first, second);

        let mut third = SchemaObject::new();
        third.insert_property("b", true);
        third.insert_property("a", true);
        assert_eq!(first, third);
    }

    #[test]
    fn extras_equality_ignores_order() {
        let mut first = SchemaObject::new();
        first.insert_extra("x-a", json!(1)).unwrap();
        first.insert_extra("x-b", json!(2)).unwrap();

        let mut second = SchemaObject::new();
        second.insert_extra("x-b", json!(2)).unwrap();
        second.insert_extra("x-a", json!(1)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn source_order_is_ignored_by_equality() {
        let decoded = SchemaObject {
            title: Some("t".to_string()),
            source_order: SourceOrder::new(vec!["title".to_string()]),
            ..SchemaObject::default()
        };
        let built = SchemaObject {
            title: Some("t".to_string()),
            ..SchemaObject::default()
        };
        assert_eq!(decoded, built);
    }

    #[test]
    fn insert_extra_rejects_modeled_keywords() {
        let mut object = SchemaObject::new();
        let err = object.insert_extra("minimum", json!(3)).unwrap_err();
        assert!(err.is_malformed());
        assert!(object.extras.is_empty());

        assert_eq!(object.insert_extra("x-ui", json!({"order": 1})).unwrap(), None);
        assert_eq!(object.extras.get("x-ui"), Some(&json!({"order": 1})));
    }

    #[test]
    fn extras_field_refuses_modeled_keywords() {
        let mut object = SchemaObject::new();
        assert!(object.extras.insert("title", json!("shadow")).is_err());
        assert!(object.extras.insert("$defs", json!({})).is_err());
        assert_eq!(object.extras.len(), 0);
        assert!(object.title.is_none());
    }

    #[test]
    fn zero_and_false_are_present() {
        let object = SchemaObject {
            min_length: Some(0),
            unique_items: Some(false),
            constant: Some(Value::Null),
            ..SchemaObject::default()
        };
        let present: Vec<&str> = object.present_keywords().collect();
        assert_eq!(present, vec!["const", "minLength", "uniqueItems"]);
        assert!(!object.has_keyword("maxLength"));
    }

    #[test]
    fn instance_type_helpers() {
        let single = InstanceType::from("string");
        assert_eq!(single.as_single(), Some("string"));

        let union = InstanceType::from(vec!["string".to_string(), "null".to_string()]);
        assert_eq!(union.as_single(), None);
        assert!(union.contains("null"));
        assert!(!union.contains("integer"));
    }

    #[test]
    fn typed_accessors_read_object_fields() {
        let mut object = SchemaObject::new();
        object.title = Some("Person".to_string());
        object.instance_type = Some(InstanceType::from("object"));
        object.required = Some(vec!["name".to_string()]);
        object.insert_property("name", Schema::TRUE);
        let schema = Schema::object(object);

        assert_eq!(schema.title().unwrap(), Some("Person"));
        assert_eq!(
            schema.instance_type().unwrap().and_then(InstanceType::as_single),
            Some("object")
        );
        assert_eq!(schema.required().unwrap(), Some(&["name".to_string()][..]));
        assert_eq!(schema.properties().unwrap().map(OrderedMap::len), Some(1));
    }
}
