//! Schema document for configuration validation.
//!
//! The schema is data, not code: a JSON-Schema-like document interpreted by
//! [`SchemaValidator`](crate::config::SchemaValidator). Only the keywords
//! below are understood; any other keyword makes the document invalid.
//!
//! | Keyword | Applies to |
//! |---|---|
//! | `type` (one or a list) | any value |
//! | `enum` | any value |
//! | `required`, `properties`, `additionalProperties` | objects |
//! | `items` | arrays |
//! | `minimum`, `maximum` | numbers |
//! | `minLength`, `maxLength` | strings |
//!
//! `$schema`, `$id`, `title`, `description` and `default` are accepted as
//! annotations and otherwise ignored.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::format::ConfigFormat;
use crate::config::loader::ConfigLoader;
use crate::error::{Error, Result};

/// A JSON value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    /// A JSON object.
    Object,
    /// A JSON array.
    Array,
    /// A JSON string.
    String,
    /// A number without a fractional part.
    Integer,
    /// Any JSON number.
    Number,
    /// `true` or `false`.
    Boolean,
    /// `null`.
    Null,
}

impl JsonType {
    /// Whether `value` is of this type.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::Object => value.is_object(),
            Self::Array => value.is_array(),
            Self::String => value.is_string(),
            Self::Integer => is_integer(value),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Null => value.is_null(),
        }
    }

    /// The most specific type of `value`.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
            Value::String(_) => Self::String,
            Value::Number(_) if is_integer(value) => Self::Integer,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Boolean,
            Value::Null => Self::Null,
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
        };
        f.write_str(name)
    }
}

/// `true` for JSON numbers with no fractional part, including `5.0`.
fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => {
            n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
        }
        _ => false,
    }
}

/// The `type` keyword: a single type or a list of alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSet {
    /// Exactly one type.
    Single(JsonType),
    /// Any of several types.
    Any(Vec<JsonType>),
}

impl TypeSet {
    /// Whether `value` matches any type in the set.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Single(t) => t.matches(value),
            Self::Any(types) => types.iter().any(|t| t.matches(value)),
        }
    }
}

impl fmt::Display for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(t) => write!(f, "{t}"),
            Self::Any(types) => {
                let names: Vec<String> = types.iter().map(ToString::to_string).collect();
                f.write_str(&names.join(" or "))
            }
        }
    }
}

/// A schema document (or subschema).
///
/// # Examples
///
/// ```
/// use tool::config::{JsonType, Schema};
/// use serde_json::json;
///
/// let parsed = Schema::from_value(json!({
///     "type": "object",
///     "properties": { "port": { "type": "integer" } },
///     "required": ["port"]
/// }))
/// .unwrap();
///
/// let built = Schema::of_type(JsonType::Object)
///     .with_property("port", Schema::of_type(JsonType::Integer))
///     .require("port");
///
/// assert_eq!(parsed, built);
/// assert_eq!(built, Schema::builtin());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Schema {
    /// Dialect annotation (`$schema`).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub dialect: Option<String>,

    /// Identifier annotation (`$id`).
    #[serde(rename = "$id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Title annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Description annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Default-value annotation. Never applied: validation does not coerce.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Accepted type(s).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub types: Option<TypeSet>,

    /// Accepted values.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<Value>>,

    /// Properties an object must have.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Subschemas for named object properties.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,

    /// Whether properties not listed in `properties` are allowed (default yes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<bool>,

    /// Subschema for every array element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    /// Inclusive lower bound for numbers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,

    /// Inclusive upper bound for numbers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,

    /// Minimum string length in characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Maximum string length in characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl Schema {
    /// The schema the tool ships with: an object whose `port` is a required
    /// integer.
    #[must_use]
    pub fn builtin() -> Self {
        Self::of_type(JsonType::Object)
            .with_property("port", Self::of_type(JsonType::Integer))
            .require("port")
    }

    /// A schema accepting exactly one type.
    #[must_use]
    pub fn of_type(json_type: JsonType) -> Self {
        Self {
            types: Some(TypeSet::Single(json_type)),
            ..Self::default()
        }
    }

    /// Add a property subschema.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    /// Mark a property as required.
    #[must_use]
    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    /// Parse a schema from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSchema`] if the document uses unknown keywords,
    /// has keywords of the wrong shape, or contradicts itself.
    pub fn from_value(value: Value) -> Result<Self> {
        let schema: Self = serde_json::from_value(value).map_err(|e| Error::InvalidSchema {
            message: e.to_string(),
        })?;
        schema.check("")?;
        Ok(schema)
    }

    /// Parse a schema from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSchema`] if the text is not a valid schema.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s).map_err(|e| Error::InvalidSchema {
            message: e.to_string(),
        })?;
        Self::from_value(value)
    }

    /// Load a schema from a `.json`, `.yaml` or `.yml` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or is not a
    /// valid schema.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = ConfigLoader::read_file(path)?;
        let format = match ConfigFormat::from_extension(path) {
            Some(ConfigFormat::Yaml) => ConfigFormat::Yaml,
            _ => ConfigFormat::Json,
        };
        let value = format.parse(path, &contents)?;
        Self::from_value(value).map_err(|e| match e {
            Error::InvalidSchema { message } => Error::InvalidSchema {
                message: format!("{}: {message}", path.display()),
            },
            other => other,
        })
    }

    /// Reject self-contradictory bounds, recursively.
    fn check(&self, path: &str) -> Result<()> {
        if let (Some(min), Some(max)) = (self.minimum, self.maximum) {
            if min > max {
                return Err(Error::InvalidSchema {
                    message: format!("{}: minimum {min} exceeds maximum {max}", display(path)),
                });
            }
        }
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(Error::InvalidSchema {
                    message: format!("{}: minLength {min} exceeds maxLength {max}", display(path)),
                });
            }
        }

        for (name, sub) in &self.properties {
            sub.check(&format!("{path}/properties/{name}"))?;
        }
        if let Some(items) = &self.items {
            items.check(&format!("{path}/items"))?;
        }
        Ok(())
    }
}

fn display(path: &str) -> &str {
    if path.is_empty() {
        "(root)"
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_matching() {
        assert!(JsonType::Integer.matches(&json!(5)));
        assert!(JsonType::Integer.matches(&json!(-5)));
        assert!(JsonType::Integer.matches(&json!(5.0)));
        assert!(!JsonType::Integer.matches(&json!(5.5)));
        assert!(!JsonType::Integer.matches(&json!("5")));
        assert!(JsonType::Number.matches(&json!(5.5)));
    }

    #[test]
    fn test_type_of() {
        assert_eq!(JsonType::of(&json!(1)), JsonType::Integer);
        assert_eq!(JsonType::of(&json!(1.5)), JsonType::Number);
        assert_eq!(JsonType::of(&json!("x")), JsonType::String);
        assert_eq!(JsonType::of(&json!(null)), JsonType::Null);
    }

    #[test]
    fn test_type_list() {
        let schema = Schema::from_value(json!({ "type": ["integer", "null"] })).unwrap();
        let types = schema.types.unwrap();
        assert!(types.matches(&json!(null)));
        assert!(types.matches(&json!(3)));
        assert!(!types.matches(&json!("3")));
        assert_eq!(types.to_string(), "integer or null");
    }

    #[test]
    fn test_annotations_accepted() {
        let schema = Schema::from_value(json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "tool",
            "description": "tool configuration",
            "type": "object",
            "properties": { "port": { "type": "integer", "default": 1234 } }
        }))
        .unwrap();
        assert_eq!(schema.title.as_deref(), Some("tool"));
        assert_eq!(schema.properties["port"].default, Some(json!(1234)));
    }

    #[test]
    fn test_unknown_keyword_rejected() {
        let err = Schema::from_value(json!({ "type": "object", "patternProperties": {} }))
            .unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::InvalidSchema);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let err = Schema::from_value(json!({ "type": "float" })).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::InvalidSchema);
    }

    #[test]
    fn test_contradictory_bounds_rejected() {
        let err = Schema::from_value(json!({
            "properties": { "port": { "minimum": 10, "maximum": 1 } }
        }))
        .unwrap_err();
        assert!(err.to_string().contains("/properties/port"));
    }

    #[test]
    fn test_from_json_str_malformed() {
        let err = Schema::from_json_str("{").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::InvalidSchema);
    }

    #[test]
    fn test_builtin_serializes_compactly() {
        let value = serde_json::to_value(Schema::builtin()).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "object",
                "properties": { "port": { "type": "integer" } },
                "required": ["port"]
            })
        );
    }
}
