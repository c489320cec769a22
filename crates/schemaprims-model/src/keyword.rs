//! Keyword spellings recognized by the model.
//!
//! Any key outside [`ALL`] is an unrecognized keyword and lands in
//! `SchemaObject::extras` on decode.

/// The 2020-12 dialect URI.
pub const DRAFT_2020_12: &str = "https://json-schema.org/draft/2020-12/schema";

// Core vocabulary.
pub const SCHEMA: &str = "$schema";
pub const ID: &str = "$id";
pub const ANCHOR: &str = "$anchor";
pub const REF: &str = "$ref";
pub const DYNAMIC_REF: &str = "$dynamicRef";
pub const DEFS: &str = "$defs";
pub const COMMENT: &str = "$comment";

// Applicators.
pub const ALL_OF: &str = "allOf";
pub const ANY_OF: &str = "anyOf";
pub const ONE_OF: &str = "oneOf";
pub const NOT: &str = "not";
pub const IF: &str = "if";
pub const THEN: &str = "then";
pub const ELSE: &str = "else";
pub const DEPENDENT_SCHEMAS: &str = "dependentSchemas";
pub const PREFIX_ITEMS: &str = "prefixItems";
pub const ITEMS: &str = "items";
pub const CONTAINS: &str = "contains";
pub const PROPERTIES: &str = "properties";
pub const PATTERN_PROPERTIES: &str = "patternProperties";
pub const ADDITIONAL_PROPERTIES: &str = "additionalProperties";
pub const PROPERTY_NAMES: &str = "propertyNames";

// Validation.
pub const TYPE: &str = "type";
pub const ENUM: &str = "enum";
pub const CONST: &str = "const";
pub const MULTIPLE_OF: &str = "multipleOf";
pub const MAXIMUM: &str = "maximum";
pub const EXCLUSIVE_MAXIMUM: &str = "exclusiveMaximum";
pub const MINIMUM: &str = "minimum";
pub const EXCLUSIVE_MINIMUM: &str = "exclusiveMinimum";
pub const MAX_LENGTH: &str = "maxLength";
pub const MIN_LENGTH: &str = "minLength";
pub const PATTERN: &str = "pattern";
pub const MAX_ITEMS: &str = "maxItems";
pub const MIN_ITEMS: &str = "minItems";
pub const UNIQUE_ITEMS: &str = "uniqueItems";
pub const MAX_CONTAINS: &str = "maxContains";
pub const MIN_CONTAINS: &str = "minContains";
pub const MAX_PROPERTIES: &str = "maxProperties";
pub const MIN_PROPERTIES: &str = "minProperties";
pub const REQUIRED: &str = "required";
pub const DEPENDENT_REQUIRED: &str = "dependentRequired";

// Format, content and meta-data.
pub const FORMAT: &str = "format";
pub const CONTENT_ENCODING: &str = "contentEncoding";
pub const CONTENT_MEDIA_TYPE: &str = "contentMediaType";
pub const CONTENT_SCHEMA: &str = "contentSchema";
pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const DEFAULT: &str = "default";
pub const DEPRECATED: &str = "deprecated";
pub const READ_ONLY: &str = "readOnly";
pub const WRITE_ONLY: &str = "writeOnly";
pub const EXAMPLES: &str = "examples";

/// Every modeled keyword, in canonical encode order.
pub const ALL: [&str; 53] = [
    SCHEMA,
    ID,
    ANCHOR,
    REF,
    DYNAMIC_REF,
    DEFS,
    COMMENT,
    ALL_OF,
    ANY_OF,
    ONE_OF,
    NOT,
    IF,
    THEN,
    ELSE,
    DEPENDENT_SCHEMAS,
    PREFIX_ITEMS,
    ITEMS,
    CONTAINS,
    PROPERTIES,
    PATTERN_PROPERTIES,
    ADDITIONAL_PROPERTIES,
    PROPERTY_NAMES,
    TYPE,
    ENUM,
    CONST,
    MULTIPLE_OF,
    MAXIMUM,
    EXCLUSIVE_MAXIMUM,
    MINIMUM,
    EXCLUSIVE_MINIMUM,
    MAX_LENGTH,
    MIN_LENGTH,
    PATTERN,
    MAX_ITEMS,
    MIN_ITEMS,
    UNIQUE_ITEMS,
    MAX_CONTAINS,
    MIN_CONTAINS,
    MAX_PROPERTIES,
    MIN_PROPERTIES,
    REQUIRED,
    DEPENDENT_REQUIRED,
    FORMAT,
    CONTENT_ENCODING,
    CONTENT_MEDIA_TYPE,
    CONTENT_SCHEMA,
    TITLE,
    DESCRIPTION,
    DEFAULT,
    DEPRECATED,
    READ_ONLY,
    WRITE_ONLY,
    EXAMPLES,
];

/// Returns true if `key` is a modeled keyword.
pub fn is_keyword(key: &str) -> bool {
    ALL.contains(&key)
}
