use std::collections::BTreeMap;

use schemaprims_model::{
    escape_pointer_segment, keyword, Decimal, InstanceType, OrderedMap, Result, Schema,
    SchemaError, SchemaObject, SourceOrder,
};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::config::CodecConfig;

/// Decode a schema from an already-parsed JSON value.
pub fn from_value(value: &Value) -> Result<Schema> {
    from_value_with_config(value, &CodecConfig::default())
}

/// Decode a schema from an already-parsed JSON value with explicit config.
pub fn from_value_with_config(value: &Value, config: &CodecConfig) -> Result<Schema> {
    let schema = Decoder { config }.schema(value, "", 0)?;
    debug!(kind = schema.kind(), "decoded schema");
    Ok(schema)
}

struct Decoder<'a> {
    config: &'a CodecConfig,
}

impl Decoder<'_> {
    fn schema(&self, value: &Value, pointer: &str, depth: usize) -> Result<Schema> {
        if depth > self.config.max_depth {
            return Err(SchemaError::malformed(
                pointer,
                format!(
                    "schema nesting exceeds configured max depth ({})",
                    self.config.max_depth
                ),
            ));
        }

        match value {
            Value::Bool(value) => Ok(Schema::Bool(*value)),
            Value::Object(map) => self.object(map, pointer, depth).map(Schema::object),
            other => Err(expected(pointer, "a boolean or object schema", other)),
        }
    }

    fn object(&self, map: &Map<String, Value>, pointer: &str, depth: usize) -> Result<SchemaObject> {
        let mut object = SchemaObject::new();
        let next = depth + 1;

        for (key, value) in map {
            let at = format!("{pointer}/{}", escape_pointer_segment(key));
            match key.as_str() {
                keyword::SCHEMA => object.schema = Some(string(value, &at)?),
                keyword::ID => object.id = Some(string(value, &at)?),
                keyword::ANCHOR => object.anchor = Some(string(value, &at)?),
                keyword::REF => object.reference = Some(string(value, &at)?),
                keyword::DYNAMIC_REF => object.dynamic_ref = Some(string(value, &at)?),
                keyword::DEFS => object.defs = Some(self.schema_map(value, &at, next)?),
                keyword::COMMENT => object.comment = Some(string(value, &at)?),

                keyword::ALL_OF => object.all_of = Some(self.schema_list(value, &at, next)?),
                keyword::ANY_OF => object.any_of = Some(self.schema_list(value, &at, next)?),
                keyword::ONE_OF => object.one_of = Some(self.schema_list(value, &at, next)?),
                keyword::NOT => object.not = Some(self.boxed(value, &at, next)?),

                keyword::IF => object.if_ = Some(self.boxed(value, &at, next)?),
                keyword::THEN => object.then = Some(self.boxed(value, &at, next)?),
                keyword::ELSE => object.else_ = Some(self.boxed(value, &at, next)?),
                keyword::DEPENDENT_SCHEMAS => {
                    object.dependent_schemas = Some(self.schema_map(value, &at, next)?)
                }

                keyword::PREFIX_ITEMS => {
                    object.prefix_items = Some(self.schema_list(value, &at, next)?)
                }
                keyword::ITEMS => object.items = Some(self.boxed(value, &at, next)?),
                keyword::CONTAINS => object.contains = Some(self.boxed(value, &at, next)?),

                keyword::PROPERTIES => {
                    object.properties = Some(self.ordered_schema_map(value, &at, next)?)
                }
                keyword::PATTERN_PROPERTIES => {
                    object.pattern_properties = Some(self.schema_map(value, &at, next)?)
                }
                keyword::ADDITIONAL_PROPERTIES => {
                    object.additional_properties = Some(self.boxed(value, &at, next)?)
                }
                keyword::PROPERTY_NAMES => {
                    object.property_names = Some(self.boxed(value, &at, next)?)
                }

                keyword::TYPE => object.instance_type = Some(instance_type(value, &at)?),
                keyword::ENUM => object.enumeration = Some(array(value, &at)?.clone()),
                keyword::CONST => object.constant = Some(value.clone()),
                keyword::MULTIPLE_OF => object.multiple_of = Some(decimal(value, &at)?),
                keyword::MAXIMUM => object.maximum = Some(decimal(value, &at)?),
                keyword::EXCLUSIVE_MAXIMUM => object.exclusive_maximum = Some(decimal(value, &at)?),
                keyword::MINIMUM => object.minimum = Some(decimal(value, &at)?),
                keyword::EXCLUSIVE_MINIMUM => object.exclusive_minimum = Some(decimal(value, &at)?),
                keyword::MAX_LENGTH => object.max_length = Some(count(value, &at)?),
                keyword::MIN_LENGTH => object.min_length = Some(count(value, &at)?),
                keyword::PATTERN => object.pattern = Some(string(value, &at)?),
                keyword::MAX_ITEMS => object.max_items = Some(count(value, &at)?),
                keyword::MIN_ITEMS => object.min_items = Some(count(value, &at)?),
                keyword::UNIQUE_ITEMS => object.unique_items = Some(boolean(value, &at)?),
                keyword::MAX_CONTAINS => object.max_contains = Some(count(value, &at)?),
                keyword::MIN_CONTAINS => object.min_contains = Some(count(value, &at)?),
                keyword::MAX_PROPERTIES => object.max_properties = Some(count(value, &at)?),
                keyword::MIN_PROPERTIES => object.min_properties = Some(count(value, &at)?),
                keyword::REQUIRED => object.required = Some(string_list(value, &at)?),
                keyword::DEPENDENT_REQUIRED => {
                    object.dependent_required = Some(dependent_required(value, &at)?)
                }

                keyword::FORMAT => object.format = Some(string(value, &at)?),
                keyword::CONTENT_ENCODING => object.content_encoding = Some(string(value, &at)?),
                keyword::CONTENT_MEDIA_TYPE => {
                    object.content_media_type = Some(string(value, &at)?)
                }
                keyword::CONTENT_SCHEMA => {
                    object.content_schema = Some(self.boxed(value, &at, next)?)
                }

                keyword::TITLE => object.title = Some(string(value, &at)?),
                keyword::DESCRIPTION => object.description = Some(string(value, &at)?),
                keyword::DEFAULT => object.default = Some(value.clone()),
                keyword::DEPRECATED => object.deprecated = Some(boolean(value, &at)?),
                keyword::READ_ONLY => object.read_only = Some(boolean(value, &at)?),
                keyword::WRITE_ONLY => object.write_only = Some(boolean(value, &at)?),
                keyword::EXAMPLES => object.examples = Some(array(value, &at)?.clone()),

                _ => {
                    trace!(pointer = %at, "captured unrecognized keyword");
                    object.extras.insert(key.clone(), value.clone())?;
                }
            }
        }

        object.source_order = SourceOrder::new(map.keys().cloned().collect());
        Ok(object)
    }

    fn boxed(&self, value: &Value, pointer: &str, depth: usize) -> Result<Box<Schema>> {
        self.schema(value, pointer, depth).map(Box::new)
    }

    fn schema_list(&self, value: &Value, pointer: &str, depth: usize) -> Result<Vec<Schema>> {
        array(value, pointer)?
            .iter()
            .enumerate()
            .map(|(index, item)| self.schema(item, &format!("{pointer}/{index}"), depth))
            .collect()
    }

    fn schema_map(
        &self,
        value: &Value,
        pointer: &str,
        depth: usize,
    ) -> Result<BTreeMap<String, Schema>> {
        mapping(value, pointer)?
            .iter()
            .map(|(name, item)| {
                let at = format!("{pointer}/{}", escape_pointer_segment(name));
                Ok((name.clone(), self.schema(item, &at, depth)?))
            })
            .collect()
    }

    fn ordered_schema_map(
        &self,
        value: &Value,
        pointer: &str,
        depth: usize,
    ) -> Result<OrderedMap<Schema>> {
        let entries = mapping(value, pointer)?;
        let mut properties = OrderedMap::with_capacity(entries.len());
        for (name, item) in entries {
            let at = format!("{pointer}/{}", escape_pointer_segment(name));
            properties.insert(name.clone(), self.schema(item, &at, depth)?);
        }
        Ok(properties)
    }
}

fn string(value: &Value, pointer: &str) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| expected(pointer, "a string", value))
}

fn boolean(value: &Value, pointer: &str) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| expected(pointer, "a boolean", value))
}

fn count(value: &Value, pointer: &str) -> Result<u64> {
    value
        .as_u64()
        .ok_or_else(|| expected(pointer, "a non-negative integer", value))
}

fn decimal(value: &Value, pointer: &str) -> Result<Decimal> {
    match value {
        Value::Number(number) => Ok(Decimal::from(number.clone())),
        other => Err(expected(pointer, "a number", other)),
    }
}

fn array<'v>(value: &'v Value, pointer: &str) -> Result<&'v Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| expected(pointer, "an array", value))
}

fn mapping<'v>(value: &'v Value, pointer: &str) -> Result<&'v Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| expected(pointer, "an object", value))
}

fn string_list(value: &Value, pointer: &str) -> Result<Vec<String>> {
    array(value, pointer)?
        .iter()
        .enumerate()
        .map(|(index, item)| string(item, &format!("{pointer}/{index}")))
        .collect()
}

fn dependent_required(value: &Value, pointer: &str) -> Result<BTreeMap<String, Vec<String>>> {
    mapping(value, pointer)?
        .iter()
        .map(|(name, item)| {
            let at = format!("{pointer}/{}", escape_pointer_segment(name));
            Ok((name.clone(), string_list(item, &at)?))
        })
        .collect()
}

fn instance_type(value: &Value, pointer: &str) -> Result<InstanceType> {
    match value {
        Value::String(name) => Ok(InstanceType::Single(name.clone())),
        Value::Array(_) => string_list(value, pointer).map(InstanceType::Union),
        other => Err(expected(pointer, "a type name or list of type names", other)),
    }
}

fn expected(pointer: &str, what: &str, found: &Value) -> SchemaError {
    SchemaError::malformed(pointer, format!("expected {what}, found {}", kind(found)))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn pointer_of(err: SchemaError) -> String {
        match err {
            SchemaError::MalformedSchema { pointer, .. } => pointer,
            other => panic!("expected malformed schema, got {other:?}"),
        }
    }

    #[test]
    fn boolean_top_level() {
        assert_eq!(from_value(&json!(true)).unwrap(), Schema::TRUE);
        assert_eq!(from_value(&json!(false)).unwrap(), Schema::FALSE);
    }

    #[test]
    fn rejects_non_object_top_level() {
        for value in [json!("string"), json!(1), json!([]), json!(null)] {
            let err = from_value(&value).unwrap_err();
            assert!(err.is_malformed(), "{value} should be malformed");
            assert_eq!(pointer_of(err), "");
        }
    }

    #[test]
    fn routes_unknown_keys_to_extras() {
        let schema = from_value(&json!({
            "type": "string",
            "x-custom": 42,
            "x-nested": {"a": [1, {"b": null}]}
        }))
        .unwrap();
        let object = schema.as_object().unwrap();

        assert_eq!(object.instance_type, Some(InstanceType::from("string")));
        assert_eq!(object.extras.len(), 2);
        assert_eq!(object.extras["x-custom"], json!(42));
        assert_eq!(object.extras["x-nested"], json!({"a": [1, {"b": null}]}));
        assert!(!object.extras.contains_key("type"));
    }

    #[test]
    fn boolean_subschemas_stay_boolean() {
        let schema = from_value(&json!({
            "additionalProperties": false,
            "items": true,
            "properties": {"x": false}
        }))
        .unwrap();
        let object = schema.as_object().unwrap();

        assert_eq!(object.additional_properties.as_deref(), Some(&Schema::FALSE));
        assert_eq!(object.items.as_deref(), Some(&Schema::TRUE));
        assert_eq!(
            object.properties.as_ref().and_then(|p| p.get("x")),
            Some(&Schema::FALSE)
        );
    }

    #[test]
    fn explicit_null_and_false_are_kept() {
        let schema = from_value(&json!({
            "const": null,
            "default": null,
            "uniqueItems": false,
            "minLength": 0
        }))
        .unwrap();
        let object = schema.as_object().unwrap();

        assert_eq!(object.constant, Some(Value::Null));
        assert_eq!(object.default, Some(Value::Null));
        assert_eq!(object.unique_items, Some(false));
        assert_eq!(object.min_length, Some(0));
        assert_eq!(object.max_length, None);
    }

    #[test]
    fn wrong_shapes_report_pointer() {
        let err = from_value(&json!({"required": "notAnArray"})).unwrap_err();
        assert_eq!(pointer_of(err), "/required");

        let err = from_value(&json!({"required": ["ok", 7]})).unwrap_err();
        assert_eq!(pointer_of(err), "/required/1");

        let err = from_value(&json!({"properties": {"a/b": {"minLength": -1}}})).unwrap_err();
        assert_eq!(pointer_of(err), "/properties/a~1b/minLength");

        let err = from_value(&json!({"allOf": [true, "nope"]})).unwrap_err();
        assert_eq!(pointer_of(err), "/allOf/1");

        let err = from_value(&json!({"minimum": "3"})).unwrap_err();
        assert_eq!(pointer_of(err), "/minimum");

        let err = from_value(&json!({"dependentRequired": {"a": [1]}})).unwrap_err();
        assert_eq!(pointer_of(err), "/dependentRequired/a/0");
    }

    #[test]
    fn type_accepts_single_and_union() {
        let single = from_value(&json!({"type": "integer"})).unwrap();
        assert_eq!(
            single.instance_type().unwrap(),
            Some(&InstanceType::from("integer"))
        );

        let union = from_value(&json!({"type": ["string", "null"]})).unwrap();
        assert_eq!(
            union.instance_type().unwrap(),
            Some(&InstanceType::Union(vec![
                "string".to_string(),
                "null".to_string()
            ]))
        );

        assert!(from_value(&json!({"type": 5})).is_err());
        assert!(from_value(&json!({"type": ["string", 5]})).is_err());
    }

    #[test]
    fn records_source_order() {
        let schema = from_value(&json!({"x-first": 1, "type": "object", "title": "t"})).unwrap();
        let object = schema.as_object().unwrap();
        assert_eq!(
            object.source_order.keys(),
            &["x-first".to_string(), "type".to_string(), "title".to_string()]
        );
    }

    #[test]
    fn depth_limit_is_enforced() {
        let value = json!({"not": {"not": {"not": true}}});
        let config = CodecConfig {
            max_depth: 2,
            ..CodecConfig::default()
        };

        let err = from_value_with_config(&value, &config).unwrap_err();
        assert_eq!(pointer_of(err), "/not/not/not");

        let relaxed = CodecConfig {
            max_depth: 3,
            ..CodecConfig::default()
        };
        assert!(from_value_with_config(&value, &relaxed).is_ok());
    }
}
