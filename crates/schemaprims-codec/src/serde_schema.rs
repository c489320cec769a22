//! Serde adapter for embedding a [`Schema`] in other serde types.
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Contract {
//!     name: String,
//!     #[serde(with = "schemaprims_codec::serde_schema")]
//!     schema: Schema,
//! }
//! ```
//!
//! Numbers are handed to the serializer as integers or `f64`, which every
//! format understands. A number whose text has no exact integer or shortest
//! `f64` spelling (`1e9`, `1e400`, thirty significant digits) fails
//! serialization instead of being rewritten; encode such schemas with
//! [`crate::to_json_string`] or [`crate::to_yaml_string`].

use schemaprims_model::Schema;
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

use crate::decode::from_value;
use crate::encode::to_value;

pub fn serialize<S>(schema: &Schema, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    Portable(&to_value(schema)).serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Schema, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    from_value(&value).map_err(D::Error::custom)
}

struct Portable<'a>(&'a Value);

impl Serialize for Portable<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Value::Number(number) => serialize_number(number, serializer),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&Portable(item))?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, &Portable(value))?;
                }
                out.end()
            }
            other => other.serialize(serializer),
        }
    }
}

fn serialize_number<S>(number: &Number, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let text = number.to_string();
    if let Some(value) = number.as_u64().filter(|value| value.to_string() == text) {
        return serializer.serialize_u64(value);
    }
    if let Some(value) = number.as_i64().filter(|value| value.to_string() == text) {
        return serializer.serialize_i64(value);
    }
    let exact_f64 = number
        .as_f64()
        .filter(|value| Number::from_f64(*value).is_some_and(|spelled| spelled.to_string() == text));
    match exact_f64 {
        Some(value) => serializer.serialize_f64(value),
        None => Err(S::Error::custom(format!(
            "number {text} has no exact integer or f64 form"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use schemaprims_model::{InstanceType, SchemaObject};
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Contract {
        name: String,
        #[serde(with = "crate::serde_schema")]
        schema: Schema,
    }

    fn contract() -> Contract {
        let mut object = SchemaObject::new();
        object.instance_type = Some(InstanceType::from("object"));
        object.insert_property("b", Schema::TRUE);
        object.insert_property("a", Schema::FALSE);
        object
            .insert_extra("x-owner", serde_json::json!("team-a"))
            .unwrap();
        Contract {
            name: "orders".to_string(),
            schema: Schema::object(object),
        }
    }

    #[test]
    fn embeds_in_json_documents() {
        let original = contract();
        let text = serde_json::to_string(&original).unwrap();
        assert!(text.find("\"b\"").unwrap() < text.find("\"a\"").unwrap());

        let decoded: Contract = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn embeds_in_yaml_documents() {
        let original = contract();
        let text = serde_yaml::to_string(&original).unwrap();
        let decoded: Contract = serde_yaml::from_str(&text).unwrap();
        assert_eq!(decoded, original);
    }

    fn contract_with_bounds(text: &str) -> Contract {
        Contract {
            name: "bounds".to_string(),
            schema: crate::from_json_str(text).unwrap(),
        }
    }

    #[test]
    fn f64_exact_bounds_round_trip() {
        let original = contract_with_bounds(
            r#"{"multipleOf":0.01,"minimum":0.30000000000000004,"maximum":1.0,"exclusiveMinimum":-5}"#,
        );

        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains(r#""multipleOf":0.01"#));
        assert!(json.contains(r#""maximum":1.0"#));
        assert_eq!(serde_json::from_str::<Contract>(&json).unwrap(), original);

        let yaml = serde_yaml::to_string(&original).unwrap();
        assert_eq!(serde_yaml::from_str::<Contract>(&yaml).unwrap(), original);
    }

    #[test]
    fn bounds_without_f64_spelling_fail_loudly() {
        for text in [
            r#"{"minimum":1e9}"#,
            r#"{"maximum":1e400}"#,
            r#"{"maximum":3.141592653589793238462643383279}"#,
            r#"{"x-big":1E2}"#,
        ] {
            let err = serde_json::to_string(&contract_with_bounds(text)).unwrap_err();
            assert!(
                err.to_string().contains("no exact integer or f64 form"),
                "{text}: {err}"
            );
        }
    }

    #[test]
    fn malformed_embedded_schema_is_a_serde_error() {
        let err = serde_json::from_str::<Contract>(r#"{"name":"x","schema":{"required":"no"}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("/required"));
    }

    #[test]
    fn boolean_schema_embeds_as_literal() {
        let contract = Contract {
            name: "any".to_string(),
            schema: Schema::TRUE,
        };
        assert_eq!(
            serde_json::to_string(&contract).unwrap(),
            r#"{"name":"any","schema":true}"#
        );
    }
}
