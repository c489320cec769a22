use std::str::FromStr;

use schemaprims_model::{escape_pointer_segment, Result, Schema, SchemaError};
use serde_json::{Map, Number, Value};
use yaml_rust2::yaml::Hash;
use yaml_rust2::{Yaml, YamlEmitter, YamlLoader};

use crate::config::CodecConfig;
use crate::decode::from_value_with_config;
use crate::encode::to_value_with_config;

/// Nesting cap for YAML sequences and mappings, matching `serde_json`'s
/// recursion limit for JSON text.
const MAX_NESTING: usize = 128;

/// Decode a schema from YAML text.
///
/// Numeric scalars keep their source text, so `1e9` or `0.1` read from YAML
/// are the same decimals as when read from JSON. Only the first document of a
/// multi-document stream is decoded.
pub fn from_yaml_str(text: &str) -> Result<Schema> {
    from_yaml_str_with_config(text, &CodecConfig::default())
}

/// Decode a schema from YAML text with explicit config.
pub fn from_yaml_str_with_config(text: &str, config: &CodecConfig) -> Result<Schema> {
    let documents = YamlLoader::load_from_str(text)
        .map_err(|err| SchemaError::malformed("", format!("invalid YAML: {err}")))?;
    let value = match documents.into_iter().next() {
        Some(document) => json_value(document, "", 0)?,
        None => Value::Null,
    };
    from_value_with_config(&value, config)
}

/// Encode a schema as YAML text.
pub fn to_yaml_string(schema: &Schema) -> Result<String> {
    to_yaml_string_with_config(schema, &CodecConfig::default())
}

/// Encode a schema as YAML text with explicit config.
///
/// Numbers are written as their exact decimal text.
pub fn to_yaml_string_with_config(schema: &Schema, config: &CodecConfig) -> Result<String> {
    let document = yaml_value(to_value_with_config(schema, config));

    let mut out = String::new();
    YamlEmitter::new(&mut out)
        .dump(&document)
        .map_err(|err| SchemaError::EncodeFailed(err.to_string()))?;

    let mut text = match out.strip_prefix("---\n") {
        Some(body) => body.to_string(),
        None => out.trim_start_matches("---").trim_start().to_string(),
    };
    text.push('\n');
    Ok(text)
}

fn json_value(node: Yaml, pointer: &str, nesting: usize) -> Result<Value> {
    if nesting > MAX_NESTING {
        return Err(SchemaError::malformed(
            pointer,
            format!("YAML nesting exceeds {MAX_NESTING} levels"),
        ));
    }
    match node {
        Yaml::Null => Ok(Value::Null),
        Yaml::Boolean(value) => Ok(Value::Bool(value)),
        Yaml::Integer(value) => Ok(Value::Number(value.into())),
        Yaml::Real(text) => json_number(&text, pointer).map(Value::Number),
        Yaml::String(text) => Ok(Value::String(text)),
        Yaml::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| json_value(item, &format!("{pointer}/{index}"), nesting + 1))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        Yaml::Hash(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (key, item) in entries {
                let key = mapping_key(key, pointer)?;
                let at = format!("{pointer}/{}", escape_pointer_segment(&key));
                let item = json_value(item, &at, nesting + 1)?;
                map.insert(key, item);
            }
            Ok(Value::Object(map))
        }
        other => Err(SchemaError::malformed(
            pointer,
            format!("unsupported YAML node {other:?}"),
        )),
    }
}

/// YAML reals keep their scalar text; spellings JSON lacks (`.5`, `+1.0`)
/// are normalized through `f64`, and non-finite values are rejected.
fn json_number(text: &str, pointer: &str) -> Result<Number> {
    if let Ok(number) = Number::from_str(text) {
        return Ok(number);
    }
    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| {
            SchemaError::malformed(pointer, format!("YAML number '{text}' has no JSON form"))
        })
}

fn mapping_key(key: Yaml, pointer: &str) -> Result<String> {
    match key {
        Yaml::String(text) | Yaml::Real(text) => Ok(text),
        Yaml::Integer(value) => Ok(value.to_string()),
        Yaml::Boolean(value) => Ok(value.to_string()),
        Yaml::Null => Ok("null".to_string()),
        _ => Err(SchemaError::malformed(pointer, "mapping keys must be scalars")),
    }
}

fn yaml_value(value: Value) -> Yaml {
    match value {
        Value::Null => Yaml::Null,
        Value::Bool(value) => Yaml::Boolean(value),
        Value::Number(number) => yaml_number(&number),
        Value::String(text) => Yaml::String(text),
        Value::Array(items) => Yaml::Array(items.into_iter().map(yaml_value).collect()),
        Value::Object(map) => {
            let mut hash = Hash::new();
            for (key, value) in map {
                hash.insert(Yaml::String(key), yaml_value(value));
            }
            Yaml::Hash(hash)
        }
    }
}

fn yaml_number(number: &Number) -> Yaml {
    let text = number.to_string();
    match number.as_i64() {
        Some(value) if value.to_string() == text => Yaml::Integer(value),
        // The emitter writes reals verbatim.
        _ => Yaml::Real(text),
    }
}
