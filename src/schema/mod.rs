//! Schema subsystem
//!
//! Schemas validate untyped JSON values and hand back the validated data.
//!
//! # Design Principles
//!
//! - No coercion and no default values
//! - Schemas are immutable once built and may be shared freely
//! - Containers report every failing member, not just the first
//! - Every issue carries its full path from the validated root
//! - `null` and a missing key are both "absent" for optional schemas
//!
//! # Usage
//!
//! ```
//! use load_validator::schema::{load, Shape};
//! use serde_json::json;
//!
//! let user = load::object(
//!     Shape::new()
//!         .field("name", load::string())
//!         .field("age", load::number().optional())
//!         .field("tags", load::array(load::string())),
//! );
//!
//! let data = user.parse(&json!({"name": "Ada", "tags": []})).unwrap();
//! assert_eq!(data["name"], "Ada");
//!
//! let err = user.parse(&json!({"name": 1, "tags": []})).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Validation failed: Error at key \"name\": Expected a string"
//! );
//! ```

mod definition;
mod errors;
pub mod load;
mod result;
mod types;

pub use definition::{DefinitionError, KindDef, SchemaDef};
pub use errors::{Issue, IssueKind, Kind, PathSegment, ValidationError};
pub use result::ValidationResult;
pub use types::{Schema, Shape, Validated};
