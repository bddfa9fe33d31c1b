//! Declarative schema definitions
//!
//! A definition is a JSON document describing a schema tree:
//!
//! ```json
//! {
//!   "type": "object",
//!   "fields": {
//!     "name": { "type": "string" },
//!     "age":  { "type": "number", "optional": true },
//!     "tags": { "type": "array", "items": { "type": "string" } }
//!   }
//! }
//! ```
//!
//! Field order in the document is the validation order. Definitions compile
//! into the same combinators the [`load`](super::load) factory builds.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::load;
use super::types::{Schema, Shape, Validated};

/// Errors raised while reading a definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("Failed to read schema definition '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed schema definition '{origin}': {source}")]
    Malformed {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Kind-specific part of a definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum KindDef {
    String,
    Number,
    Boolean,
    Object {
        /// Field definitions in validation order
        fields: IndexMap<String, SchemaDef>,
    },
    Array {
        /// Definition applied to every element
        items: Box<SchemaDef>,
    },
}

impl KindDef {
    /// Returns the type name used in definitions
    pub fn type_name(&self) -> &'static str {
        match self {
            KindDef::String => "string",
            KindDef::Number => "number",
            KindDef::Boolean => "boolean",
            KindDef::Object { .. } => "object",
            KindDef::Array { .. } => "array",
        }
    }
}

/// One node of a definition tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDef {
    #[serde(flatten)]
    pub kind: KindDef,
    /// Whether `null` or a missing key is accepted
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl SchemaDef {
    /// Parses a definition from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, DefinitionError> {
        serde_json::from_str(json).map_err(|source| DefinitionError::Malformed {
            origin: "<inline>".into(),
            source,
        })
    }

    /// Reads and parses a definition file.
    pub fn from_file(path: &Path) -> Result<Self, DefinitionError> {
        let content = fs::read_to_string(path).map_err(|source| DefinitionError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| DefinitionError::Malformed {
            origin: path.display().to_string(),
            source,
        })
    }

    /// Builds the schema this definition describes.
    ///
    /// `None` is an absent value accepted by an optional definition, so the
    /// result composes like any factory schema: inside a [`Shape`] an absent
    /// optional field is left out of the output.
    pub fn compile(&self) -> Schema<Option<Value>> {
        tracing::debug!(
            root = self.kind.type_name(),
            optional = self.optional,
            "compiling schema definition"
        );
        self.compile_slot()
    }

    fn compile_slot(&self) -> Schema<Option<Value>> {
        let base = match &self.kind {
            KindDef::String => load::string().map(Validated::into_json),
            KindDef::Number => load::number().map(Validated::into_json),
            KindDef::Boolean => load::boolean().map(Validated::into_json),
            KindDef::Object { fields } => {
                let shape = fields.iter().fold(Shape::new(), |shape, (name, def)| {
                    shape.field(name.clone(), def.compile_slot())
                });
                load::object(shape).map(Validated::into_json)
            }
            KindDef::Array { items } => load::array(items.compile_slot()).map(Validated::into_json),
        };

        if self.optional {
            base.optional().map(Option::flatten)
        } else {
            base
        }
    }
}
