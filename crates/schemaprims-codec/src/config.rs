/// Default cap on sub-schema nesting accepted by the decoder.
///
/// A chain of 64 nested sub-schemas (`{"not":{"not":...}}`) decodes; a chain
/// of 65 is `MalformedSchema`. Text input has a second, lower-level bound:
/// JSON and YAML text stop at 128 nested arrays and objects, so raising
/// `max_depth` past roughly 127 only takes effect through
/// [`crate::from_value`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Key order of encoded object schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyOrder {
    /// Modeled keywords in canonical order, then extras in capture order.
    #[default]
    ModeledFirst,
    /// Keys in the order they were decoded, extras included. Keys with no
    /// recorded position follow in `ModeledFirst` order.
    Preserve,
}

/// Controls codec behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Key order used when encoding object schemas.
    pub key_order: KeyOrder,
    /// Maximum sub-schema nesting depth accepted on decode. The root is
    /// depth 0 and every keyword that holds a sub-schema adds one level;
    /// arrays and maps in between (`allOf`, `properties`) do not count.
    /// Deeper documents are rejected even when otherwise valid.
    pub max_depth: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            key_order: KeyOrder::ModeledFirst,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CodecConfig {
    /// Config that re-emits source key order.
    pub fn preserving_order() -> Self {
        Self {
            key_order: KeyOrder::Preserve,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::decode::from_value_with_config;

    fn not_chain(levels: usize) -> Value {
        let mut value = json!(true);
        for _ in 0..levels {
            value = json!({ "not": value });
        }
        value
    }

    #[test]
    fn default_depth_boundary() {
        let config = CodecConfig::default();
        assert!(from_value_with_config(&not_chain(DEFAULT_MAX_DEPTH), &config).is_ok());

        let err = from_value_with_config(&not_chain(DEFAULT_MAX_DEPTH + 1), &config).unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("max depth (64)"));
    }

    #[test]
    fn raised_depth_accepts_longer_chains() {
        let config = CodecConfig {
            max_depth: 200,
            ..CodecConfig::default()
        };
        assert!(from_value_with_config(&not_chain(150), &config).is_ok());
    }
}
