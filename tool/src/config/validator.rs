//! Schema validation.
//!
//! [`SchemaValidator`] walks the whole candidate and records every violated
//! constraint. Paths are JSON pointers into the candidate (`/port`,
//! `/servers/0/host`); the empty pointer is the document root.

use std::fmt;

use serde_json::{Map, Value};

use crate::config::schema::{JsonType, Schema};
use crate::error::{Error, Result};

/// One violated constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// JSON pointer to the offending value (empty for the root).
    pub path: String,
    /// Schema keyword that failed, e.g. `type` or `required`.
    pub keyword: String,
    /// What the schema expected.
    pub message: String,
    /// The value found, when there is one.
    pub actual: Option<Value>,
}

impl Violation {
    /// Create a violation.
    #[must_use]
    pub fn new(
        path: impl Into<String>,
        keyword: impl Into<String>,
        message: impl Into<String>,
        actual: Option<Value>,
    ) -> Self {
        Self {
            path: path.into(),
            keyword: keyword.into(),
            message: message.into(),
            actual,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() {
            "(root)"
        } else {
            &self.path
        };
        write!(f, "{path}: {}", self.message)?;
        if let Some(actual) = &self.actual {
            write!(f, " (found {actual})")?;
        }
        Ok(())
    }
}

/// Every violation found in one candidate.
///
/// # Examples
///
/// ```
/// use tool::config::{Schema, SchemaValidator};
/// use serde_json::json;
///
/// let report = SchemaValidator::validate(&Schema::builtin(), &json!({ "port": "80" }));
/// assert_eq!(report.len(), 1);
/// assert_eq!(report.to_string(), r#"  - /port: must be integer (found "80")"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Wrap a list of violations.
    #[must_use]
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Whether the candidate passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// The violations, in document order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Iterate over the violations.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {violation}")?;
        }
        Ok(())
    }
}

/// Validates candidate documents against a [`Schema`].
pub struct SchemaValidator;

impl SchemaValidator {
    /// Collect every violation of `schema` in `value`.
    #[must_use]
    pub fn validate(schema: &Schema, value: &Value) -> ValidationReport {
        let mut violations = Vec::new();
        Self::walk(schema, value, "", &mut violations);
        ValidationReport::new(violations)
    }

    /// Validate, turning a non-empty report into [`Error::Validation`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if any constraint is violated.
    pub fn check(schema: &Schema, value: &Value) -> Result<()> {
        let report = Self::validate(schema, value);
        if report.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation { report })
        }
    }

    fn walk(schema: &Schema, value: &Value, path: &str, out: &mut Vec<Violation>) {
        if let Some(types) = &schema.types {
            if !types.matches(value) {
                out.push(Violation::new(
                    path,
                    "type",
                    format!("must be {types}"),
                    Some(value.clone()),
                ));
                // The remaining keywords assume the right type
                return;
            }
        }

        if let Some(allowed) = &schema.allowed {
            if !allowed.contains(value) {
                let choices: Vec<String> = allowed.iter().map(ToString::to_string).collect();
                out.push(Violation::new(
                    path,
                    "enum",
                    format!("must be one of {}", choices.join(", ")),
                    Some(value.clone()),
                ));
            }
        }

        match value {
            Value::Number(n) => {
                if let Some(n) = n.as_f64() {
                    Self::check_bounds(schema, n, value, path, out);
                }
            }
            Value::String(s) => Self::check_length(schema, s, value, path, out),
            Value::Object(map) => Self::walk_object(schema, map, path, out),
            Value::Array(items) => {
                if let Some(item_schema) = &schema.items {
                    for (i, item) in items.iter().enumerate() {
                        Self::walk(item_schema, item, &child_path(path, &i.to_string()), out);
                    }
                }
            }
            Value::Bool(_) | Value::Null => {}
        }
    }

    fn check_bounds(schema: &Schema, n: f64, value: &Value, path: &str, out: &mut Vec<Violation>) {
        if let Some(min) = schema.minimum {
            if n < min {
                out.push(Violation::new(
                    path,
                    "minimum",
                    format!("must be >= {min}"),
                    Some(value.clone()),
                ));
            }
        }
        if let Some(max) = schema.maximum {
            if n > max {
                out.push(Violation::new(
                    path,
                    "maximum",
                    format!("must be <= {max}"),
                    Some(value.clone()),
                ));
            }
        }
    }

    fn check_length(schema: &Schema, s: &str, value: &Value, path: &str, out: &mut Vec<Violation>) {
        let len = s.chars().count();
        if let Some(min) = schema.min_length {
            if len < min {
                out.push(Violation::new(
                    path,
                    "minLength",
                    format!("must NOT have fewer than {min} characters"),
                    Some(value.clone()),
                ));
            }
        }
        if let Some(max) = schema.max_length {
            if len > max {
                out.push(Violation::new(
                    path,
                    "maxLength",
                    format!("must NOT have more than {max} characters"),
                    Some(value.clone()),
                ));
            }
        }
    }

    fn walk_object(
        schema: &Schema,
        map: &Map<String, Value>,
        path: &str,
        out: &mut Vec<Violation>,
    ) {
        for name in &schema.required {
            if !map.contains_key(name) {
                out.push(Violation::new(
                    path,
                    "required",
                    format!("must have required property '{name}'"),
                    None,
                ));
            }
        }

        for (name, sub) in &schema.properties {
            if let Some(child) = map.get(name) {
                Self::walk(sub, child, &child_path(path, name), out);
            }
        }

        if schema.additional_properties == Some(false) {
            for (name, child) in map {
                if !schema.properties.contains_key(name) {
                    out.push(Violation::new(
                        child_path(path, name),
                        "additionalProperties",
                        format!(
                            "must NOT have additional properties (found {} '{name}')",
                            JsonType::of(child)
                        ),
                        None,
                    ));
                }
            }
        }
    }
}

/// Append a JSON-pointer segment, escaping `~` and `/`.
fn child_path(parent: &str, segment: &str) -> String {
    let escaped = segment.replace('~', "~0").replace('/', "~1");
    format!("{parent}/{escaped}")
}
