//! Schema factory
//!
//! Constructors for the primitive leaves (`string`, `number`, `boolean`) and the
//! container combinators (`object`, `array`). Values are never coerced: `"5"` is
//! not a number and `0` is not a boolean.
//!
//! Containers validate every member even after one fails, so a single pass
//! reports all problems. The output container is always freshly built.

use serde_json::{Map, Number, Value};

use super::errors::{Issue, Kind, PathSegment};
use super::result::ValidationResult;
use super::types::{Schema, Shape, ABSENT};

/// Accepts any JSON string.
pub fn string() -> Schema<String> {
    Schema::new(|value| match value {
        Value::String(s) => ValidationResult::Success(s.clone()),
        other => ValidationResult::fail(Issue::mismatch(Kind::String, other)),
    })
}

/// Accepts any JSON number, integer or float, as written.
pub fn number() -> Schema<Number> {
    Schema::new(|value| match value {
        Value::Number(n) => ValidationResult::Success(n.clone()),
        other => ValidationResult::fail(Issue::mismatch(Kind::Number, other)),
    })
}

/// Accepts `true` or `false`.
pub fn boolean() -> Schema<bool> {
    Schema::new(|value| match value {
        Value::Bool(b) => ValidationResult::Success(*b),
        other => ValidationResult::fail(Issue::mismatch(Kind::Boolean, other)),
    })
}

/// Accepts objects matching `shape`.
///
/// Declared fields are validated in declaration order; a missing key is
/// validated as absent. Keys not in the shape are ignored and never copied
/// into the output. A non-object input fails with a single issue and no
/// field is checked.
pub fn object(shape: Shape) -> Schema<Map<String, Value>> {
    Schema::new(move |value| {
        let input = match value.as_object() {
            Some(obj) => obj,
            None => return ValidationResult::fail(Issue::mismatch(Kind::Object, value)),
        };

        let mut output = Map::new();
        let mut issues = Vec::new();

        for (key, field_schema) in shape.iter() {
            let field = input.get(key).unwrap_or(&ABSENT);
            match field_schema.validate(field) {
                ValidationResult::Success(Some(data)) => {
                    output.insert(key.clone(), data);
                }
                // absent optional field
                ValidationResult::Success(None) => {}
                ValidationResult::Failure(field_issues) => {
                    issues.extend(
                        field_issues
                            .into_iter()
                            .map(|issue| issue.within(PathSegment::Key(key.clone()))),
                    );
                }
            }
        }

        if issues.is_empty() {
            ValidationResult::Success(output)
        } else {
            ValidationResult::Failure(issues)
        }
    })
}

/// Accepts arrays whose every element matches `item`.
///
/// The output has the input's length and order. An empty array always passes.
pub fn array<T: 'static>(item: Schema<T>) -> Schema<Vec<T>> {
    Schema::new(move |value| {
        let input = match value.as_array() {
            Some(arr) => arr,
            None => return ValidationResult::fail(Issue::mismatch(Kind::Array, value)),
        };

        let mut output = Vec::with_capacity(input.len());
        let mut issues = Vec::new();

        for (index, elem) in input.iter().enumerate() {
            match item.validate(elem) {
                ValidationResult::Success(data) => output.push(data),
                ValidationResult::Failure(elem_issues) => {
                    issues.extend(
                        elem_issues
                            .into_iter()
                            .map(|issue| issue.within(PathSegment::Index(index))),
                    );
                }
            }
        }

        if issues.is_empty() {
            ValidationResult::Success(output)
        } else {
            ValidationResult::Failure(issues)
        }
    })
}
