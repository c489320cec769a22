use std::collections::BTreeMap;

use schemaprims_model::{keyword, Decimal, InstanceType, OrderedMap, Schema, SchemaObject};
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::{CodecConfig, KeyOrder};

/// Encode a schema into a JSON value.
pub fn to_value(schema: &Schema) -> Value {
    to_value_with_config(schema, &CodecConfig::default())
}

/// Encode a schema into a JSON value with explicit config.
pub fn to_value_with_config(schema: &Schema, config: &CodecConfig) -> Value {
    debug!(kind = schema.kind(), key_order = ?config.key_order, "encoding schema");
    Encoder { config }.schema(schema)
}

struct Encoder<'a> {
    config: &'a CodecConfig,
}

type Field = (&'static str, Value);

impl Encoder<'_> {
    fn schema(&self, schema: &Schema) -> Value {
        match schema {
            Schema::Bool(value) => Value::Bool(*value),
            Schema::Object(object) => Value::Object(self.object(object)),
        }
    }

    fn object(&self, object: &SchemaObject) -> Map<String, Value> {
        let fields = self.fields(object);
        let mut map = Map::with_capacity(fields.len() + object.extras.len());

        match self.config.key_order {
            KeyOrder::ModeledFirst => {
                for (key, value) in fields {
                    map.insert(key.to_string(), value);
                }
            }
            KeyOrder::Preserve => {
                let mut pending: Vec<Option<Field>> = fields.into_iter().map(Some).collect();
                for key in object.source_order.keys() {
                    let slot = pending
                        .iter_mut()
                        .find(|slot| matches!(slot, Some((name, _)) if *name == key.as_str()));
                    if let Some(slot) = slot {
                        if let Some((name, value)) = slot.take() {
                            map.insert(name.to_string(), value);
                        }
                    } else if let Some(value) = object.extras.get(key) {
                        map.insert(key.clone(), value.clone());
                    }
                }
                for (key, value) in pending.into_iter().flatten() {
                    map.insert(key.to_string(), value);
                }
            }
        }

        for (key, value) in &object.extras {
            if !map.contains_key(key) {
                map.insert(key.clone(), value.clone());
            }
        }

        map
    }

    fn fields(&self, object: &SchemaObject) -> Vec<Field> {
        let mut fields = Vec::new();
        let mut put = |key: &'static str, value: Option<Value>| {
            if let Some(value) = value {
                fields.push((key, value));
            }
        };

        put(keyword::SCHEMA, string(&object.schema));
        put(keyword::ID, string(&object.id));
        put(keyword::ANCHOR, string(&object.anchor));
        put(keyword::REF, string(&object.reference));
        put(keyword::DYNAMIC_REF, string(&object.dynamic_ref));
        put(keyword::DEFS, object.defs.as_ref().map(|m| self.schema_map(m)));
        put(keyword::COMMENT, string(&object.comment));

        put(keyword::ALL_OF, object.all_of.as_deref().map(|l| self.schema_list(l)));
        put(keyword::ANY_OF, object.any_of.as_deref().map(|l| self.schema_list(l)));
        put(keyword::ONE_OF, object.one_of.as_deref().map(|l| self.schema_list(l)));
        put(keyword::NOT, object.not.as_deref().map(|s| self.schema(s)));

        put(keyword::IF, object.if_.as_deref().map(|s| self.schema(s)));
        put(keyword::THEN, object.then.as_deref().map(|s| self.schema(s)));
        put(keyword::ELSE, object.else_.as_deref().map(|s| self.schema(s)));
        put(
            keyword::DEPENDENT_SCHEMAS,
            object.dependent_schemas.as_ref().map(|m| self.schema_map(m)),
        );

        put(
            keyword::PREFIX_ITEMS,
            object.prefix_items.as_deref().map(|l| self.schema_list(l)),
        );
        put(keyword::ITEMS, object.items.as_deref().map(|s| self.schema(s)));
        put(keyword::CONTAINS, object.contains.as_deref().map(|s| self.schema(s)));

        put(
            keyword::PROPERTIES,
            object.properties.as_ref().map(|m| self.ordered_schema_map(m)),
        );
        put(
            keyword::PATTERN_PROPERTIES,
            object.pattern_properties.as_ref().map(|m| self.schema_map(m)),
        );
        put(
            keyword::ADDITIONAL_PROPERTIES,
            object.additional_properties.as_deref().map(|s| self.schema(s)),
        );
        put(
            keyword::PROPERTY_NAMES,
            object.property_names.as_deref().map(|s| self.schema(s)),
        );

        put(keyword::TYPE, object.instance_type.as_ref().map(instance_type));
        put(keyword::ENUM, object.enumeration.clone().map(Value::Array));
        put(keyword::CONST, object.constant.clone());
        put(keyword::MULTIPLE_OF, decimal(&object.multiple_of));
        put(keyword::MAXIMUM, decimal(&object.maximum));
        put(keyword::EXCLUSIVE_MAXIMUM, decimal(&object.exclusive_maximum));
        put(keyword::MINIMUM, decimal(&object.minimum));
        put(keyword::EXCLUSIVE_MINIMUM, decimal(&object.exclusive_minimum));
        put(keyword::MAX_LENGTH, object.max_length.map(Value::from));
        put(keyword::MIN_LENGTH, object.min_length.map(Value::from));
        put(keyword::PATTERN, string(&object.pattern));
        put(keyword::MAX_ITEMS, object.max_items.map(Value::from));
        put(keyword::MIN_ITEMS, object.min_items.map(Value::from));
        put(keyword::UNIQUE_ITEMS, object.unique_items.map(Value::Bool));
        put(keyword::MAX_CONTAINS, object.max_contains.map(Value::from));
        put(keyword::MIN_CONTAINS, object.min_contains.map(Value::from));
        put(keyword::MAX_PROPERTIES, object.max_properties.map(Value::from));
        put(keyword::MIN_PROPERTIES, object.min_properties.map(Value::from));
        put(keyword::REQUIRED, object.required.as_deref().map(string_list));
        put(
            keyword::DEPENDENT_REQUIRED,
            object.dependent_required.as_ref().map(dependent_required),
        );

        put(keyword::FORMAT, string(&object.format));
        put(keyword::CONTENT_ENCODING, string(&object.content_encoding));
        put(keyword::CONTENT_MEDIA_TYPE, string(&object.content_media_type));
        put(
            keyword::CONTENT_SCHEMA,
            object.content_schema.as_deref().map(|s| self.schema(s)),
        );

        put(keyword::TITLE, string(&object.title));
        put(keyword::DESCRIPTION, string(&object.description));
        put(keyword::DEFAULT, object.default.clone());
        put(keyword::DEPRECATED, object.deprecated.map(Value::Bool));
        put(keyword::READ_ONLY, object.read_only.map(Value::Bool));
        put(keyword::WRITE_ONLY, object.write_only.map(Value::Bool));
        put(keyword::EXAMPLES, object.examples.clone().map(Value::Array));

        fields
    }

    fn schema_list(&self, schemas: &[Schema]) -> Value {
        Value::Array(schemas.iter().map(|s| self.schema(s)).collect())
    }

    fn schema_map(&self, schemas: &BTreeMap<String, Schema>) -> Value {
        Value::Object(
            schemas
                .iter()
                .map(|(name, s)| (name.clone(), self.schema(s)))
                .collect(),
        )
    }

    fn ordered_schema_map(&self, schemas: &OrderedMap<Schema>) -> Value {
        Value::Object(
            schemas
                .iter()
                .map(|(name, s)| (name.clone(), self.schema(s)))
                .collect(),
        )
    }
}

fn string(value: &Option<String>) -> Option<Value> {
    value.as_ref().map(|s| Value::String(s.clone()))
}

fn decimal(value: &Option<Decimal>) -> Option<Value> {
    value
        .as_ref()
        .map(|d| Value::Number(d.as_number().clone()))
}

fn string_list(values: &[String]) -> Value {
    Value::Array(values.iter().cloned().map(Value::String).collect())
}

fn dependent_required(map: &BTreeMap<String, Vec<String>>) -> Value {
    Value::Object(
        map.iter()
            .map(|(name, deps)| (name.clone(), string_list(deps)))
            .collect(),
    )
}

fn instance_type(value: &InstanceType) -> Value {
    match value {
        InstanceType::Single(name) => Value::String(name.clone()),
        InstanceType::Union(names) => string_list(names),
    }
}
