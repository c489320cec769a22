use std::ops::Index;

use serde_json::{Map, Value};

use crate::error::{Result, SchemaError};
use crate::keyword;

/// Unrecognized keywords of an object schema, kept verbatim.
///
/// Never holds a modeled keyword: [`Extras::insert`] refuses them, so every
/// entry survives encoding. Equality ignores entry order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extras {
    entries: Map<String, Value>,
}

impl Extras {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, returning the previous value if any.
    ///
    /// Modeled keywords are rejected with `MalformedSchema`; set the field on
    /// the schema object instead.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Result<Option<Value>> {
        let key = key.into();
        if keyword::is_keyword(&key) {
            return Err(SchemaError::malformed(
                "",
                format!("'{key}' is a modeled keyword and cannot be stored as an extra"),
            ));
        }
        Ok(self.entries.insert(key, value))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Remove `key`, keeping the capture order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.entries.iter()
    }

    pub fn keys(&self) -> serde_json::map::Keys<'_> {
        self.entries.keys()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }
}

impl TryFrom<Map<String, Value>> for Extras {
    type Error = SchemaError;

    fn try_from(map: Map<String, Value>) -> Result<Self> {
        let mut extras = Self::new();
        for (key, value) in map {
            extras.insert(key, value)?;
        }
        Ok(extras)
    }
}

impl From<Extras> for Map<String, Value> {
    fn from(extras: Extras) -> Self {
        extras.entries
    }
}

impl Index<&str> for Extras {
    type Output = Value;

    /// Panics when `key` is absent, like `serde_json::Map`.
    fn index(&self, key: &str) -> &Value {
        &self.entries[key]
    }
}

impl<'a> IntoIterator for &'a Extras {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
