//! Schema type definitions
//!
//! A [`Schema`] is nothing more than a shared validation function. Primitive
//! and container schemas differ only in the closure they wrap, so every
//! combinator works on any schema regardless of how it was built.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};

use super::errors::{Issue, ValidationError};
use super::result::ValidationResult;

/// Stand-in for a key missing from an input object.
pub(crate) static ABSENT: Value = Value::Null;

type ValidateFn<T> = dyn Fn(&Value) -> ValidationResult<T> + Send + Sync;

/// Immutable, reusable validation rule producing values of type `T`.
///
/// Cloning is cheap and shares the underlying rule, so a schema can be used
/// as a child of several parents and from several threads at once.
pub struct Schema<T> {
    validator: Arc<ValidateFn<T>>,
}

impl<T> Clone for Schema<T> {
    fn clone(&self) -> Self {
        Self {
            validator: Arc::clone(&self.validator),
        }
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("output", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: 'static> Schema<T> {
    /// Creates a schema from a validation function.
    pub fn new<F>(validator: F) -> Self
    where
        F: Fn(&Value) -> ValidationResult<T> + Send + Sync + 'static,
    {
        Self {
            validator: Arc::new(validator),
        }
    }

    /// Runs the schema without signalling failure.
    pub fn validate(&self, value: &Value) -> ValidationResult<T> {
        (self.validator)(value)
    }

    /// Runs the schema, returning the validated value or every collected issue
    /// combined into one [`ValidationError`].
    pub fn parse(&self, value: &Value) -> Result<T, ValidationError> {
        match self.validate(value) {
            ValidationResult::Success(data) => Ok(data),
            ValidationResult::Failure(issues) => {
                tracing::debug!(issues = issues.len(), "validation failed");
                Err(ValidationError::new(issues))
            }
        }
    }

    /// Derives a schema that also accepts an absent value.
    ///
    /// Both `null` and a missing object key count as absent and yield `None`
    /// without consulting this schema. Anything else is validated as before.
    pub fn optional(&self) -> Schema<Option<T>> {
        let base = self.clone();
        Schema::new(move |value| {
            if value.is_null() {
                return ValidationResult::Success(None);
            }
            base.validate(value).map(Some)
        })
    }

    /// Derives a schema whose validated value is passed through `f`.
    pub fn map<U, F>(&self, f: F) -> Schema<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let base = self.clone();
        Schema::new(move |value| base.validate(value).map(&f))
    }
}

impl<T: Validated> Schema<T> {
    /// Derives a schema that deserializes the validated value into `U`.
    ///
    /// The input is first checked by this schema; only a conforming value is
    /// handed to serde, so `U` sees exactly the declared shape.
    pub fn decode<U>(&self) -> Schema<U>
    where
        U: DeserializeOwned + 'static,
    {
        let base = self.clone();
        Schema::new(move |value| match base.validate(value) {
            ValidationResult::Success(data) => {
                let json = data.into_json().unwrap_or(Value::Null);
                match serde_json::from_value(json) {
                    Ok(decoded) => ValidationResult::Success(decoded),
                    Err(e) => ValidationResult::fail(Issue::decode(e.to_string())),
                }
            }
            ValidationResult::Failure(issues) => ValidationResult::Failure(issues),
        })
    }
}

/// A value produced by a successful validation.
///
/// Containers store their members as JSON; `None` marks an absent value,
/// which an object leaves out and an array stores as `null`.
pub trait Validated: Send + 'static {
    fn into_json(self) -> Option<Value>;
}

impl Validated for Value {
    fn into_json(self) -> Option<Value> {
        Some(self)
    }
}

impl Validated for String {
    fn into_json(self) -> Option<Value> {
        Some(Value::String(self))
    }
}

impl Validated for Number {
    fn into_json(self) -> Option<Value> {
        Some(Value::Number(self))
    }
}

impl Validated for bool {
    fn into_json(self) -> Option<Value> {
        Some(Value::Bool(self))
    }
}

impl Validated for Map<String, Value> {
    fn into_json(self) -> Option<Value> {
        Some(Value::Object(self))
    }
}

impl<T: Validated> Validated for Vec<T> {
    fn into_json(self) -> Option<Value> {
        let items = self
            .into_iter()
            .map(|item| item.into_json().unwrap_or(Value::Null))
            .collect();
        Some(Value::Array(items))
    }
}

impl<T: Validated> Validated for Option<T> {
    fn into_json(self) -> Option<Value> {
        self.and_then(Validated::into_json)
    }
}

/// Field layout of an object schema, kept in declaration order.
#[derive(Clone, Debug, Default)]
pub struct Shape {
    fields: IndexMap<String, Schema<Option<Value>>>,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field. Redeclaring a name replaces its schema in place.
    pub fn field<T: Validated>(mut self, name: impl Into<String>, schema: Schema<T>) -> Self {
        self.fields
            .insert(name.into(), schema.map(Validated::into_json));
        self
    }

    /// Returns the number of declared fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Declared field names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&String, &Schema<Option<Value>>)> {
        self.fields.iter()
    }
}
