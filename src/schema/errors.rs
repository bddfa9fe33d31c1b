//! Validation error types
//!
//! Every failure is recorded as an [`Issue`]: the path from the validated root to
//! the offending value plus what went wrong there. Combinators never collapse a
//! child's issues; they prepend their own path segment and pass them upward.
//!
//! Only the terminal accessor turns issues into an error ([`ValidationError`]).

use std::collections::VecDeque;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Value kinds a schema can demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl Kind {
    /// Returns the kind name used in messages
    pub fn name(&self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Object => "object",
            Kind::Array => "array",
        }
    }

    fn article(&self) -> &'static str {
        match self {
            Kind::Object | Kind::Array => "an",
            _ => "a",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One step from a container into one of its members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Named object field
    Key(String),
    /// Array position
    Index(usize),
}

impl PathSegment {
    /// Prefix printed in front of the underlying message.
    fn label(&self) -> String {
        match self {
            PathSegment::Key(key) => format!("Error at key \"{}\": ", key),
            PathSegment::Index(index) => format!("Error at index {}: ", index),
        }
    }
}

/// What went wrong at an issue's location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// The value's runtime kind differs from the schema's kind
    KindMismatch {
        expected: Kind,
        actual: &'static str,
    },
    /// A validated value could not be deserialized into the requested type
    Decode { message: String },
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::KindMismatch { expected, .. } => {
                write!(f, "Expected {} {}", expected.article(), expected)
            }
            IssueKind::Decode { message } => write!(f, "Cannot decode value: {}", message),
        }
    }
}

/// A single validation failure with its full location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Segments from the root to the failing value, outermost first
    pub path: VecDeque<PathSegment>,
    /// Failure description
    pub kind: IssueKind,
}

impl Issue {
    /// Kind mismatch at the current location.
    pub fn mismatch(expected: Kind, actual: &Value) -> Self {
        Self {
            path: VecDeque::new(),
            kind: IssueKind::KindMismatch {
                expected,
                actual: json_type_name(actual),
            },
        }
    }

    /// Decode failure at the current location.
    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            path: VecDeque::new(),
            kind: IssueKind::Decode {
                message: message.into(),
            },
        }
    }

    /// Nests this issue one level deeper under `segment`.
    pub fn within(mut self, segment: PathSegment) -> Self {
        self.path.push_front(segment);
        self
    }

    /// Renders the path as `user.tags[1]`; the root itself is `$root`.
    pub fn location(&self) -> String {
        if self.path.is_empty() {
            return "$root".to_string();
        }

        let mut out = String::new();
        for segment in &self.path {
            match segment {
                PathSegment::Key(key) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(key);
                }
                PathSegment::Index(index) => {
                    out.push_str(&format!("[{}]", index));
                }
            }
        }
        out
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.path {
            f.write_str(&segment.label())?;
        }
        write!(f, "{}", self.kind)
    }
}

/// Failure raised by [`Schema::parse`](super::Schema::parse).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed: {}", join_issues(.issues))]
pub struct ValidationError {
    issues: Vec<Issue>,
}

impl ValidationError {
    pub(crate) fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    /// Returns every collected issue in discovery order
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Consumes the error, returning its issues
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }
}

fn join_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Returns the JSON type name for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
