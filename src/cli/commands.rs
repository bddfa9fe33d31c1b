//! CLI command implementations

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{json, Number, Value};

use crate::observability;
use crate::schema::{load, Schema, SchemaDef, Shape};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_input, write_response, write_validation_error};

/// Sample record used by the `demo` command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub age: Option<Number>,
    pub tags: Vec<String>,
}

/// Schema for [`User`]
pub fn user_schema() -> Schema<User> {
    load::object(
        Shape::new()
            .field("name", load::string())
            .field("age", load::number().optional())
            .field("tags", load::array(load::string())),
    )
    .decode()
}

/// Parse arguments, install logging and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    observability::init(cli.log_format);
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Check { schema, input } => check(&schema, input.as_deref()),
        Command::Demo => demo(),
    }
}

/// Validate a document against a definition file.
///
/// The validated document is written to stdout. On failure the issues are
/// written to stdout as well and the error is returned for a non-zero exit.
pub fn check(schema_path: &Path, input: Option<&Path>) -> CliResult<()> {
    let schema = SchemaDef::from_file(schema_path)?
        .compile()
        .map(|data| data.unwrap_or(Value::Null));
    let document = read_input(input)?;

    tracing::info!(schema = %schema_path.display(), "validating document");
    let data = validate(&schema, &document)?;
    write_response(data)
}

/// Validate the built-in sample user
pub fn demo() -> CliResult<()> {
    let sample = json!({
        "name": "John Doe",
        "age": 23,
        "tags": ["developer", "typescript"]
    });

    let user = validate(&user_schema(), &sample)?;
    write_response(serde_json::to_value(user)?)
}

fn validate<T: 'static>(schema: &Schema<T>, document: &Value) -> CliResult<T> {
    match schema.parse(document) {
        Ok(data) => Ok(data),
        Err(err) => {
            write_validation_error(&err)?;
            Err(CliError::Validation(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_user_schema_decodes_sample() {
        let user = user_schema()
            .parse(&json!({"name": "John Doe", "age": 23, "tags": ["developer"]}))
            .unwrap();
        assert_eq!(
            user,
            User {
                name: "John Doe".into(),
                age: Some(Number::from(23)),
                tags: vec!["developer".into()],
            }
        );
    }

    #[test]
    fn test_user_schema_without_age() {
        let user = user_schema()
            .parse(&json!({"name": "Jane", "tags": []}))
            .unwrap();
        assert_eq!(user.age, None);
        assert!(user.tags.is_empty());
    }

    #[test]
    fn test_user_schema_rejects_bad_tags() {
        let err = user_schema()
            .parse(&json!({"name": "Jane", "tags": ["ok", false]}))
            .unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert_eq!(err.issues()[0].location(), "tags[1]");
    }

    #[test]
    fn test_demo_keeps_number_unchanged() {
        let user = user_schema()
            .parse(&json!({"name": "a", "age": 23, "tags": []}))
            .unwrap();
        assert_eq!(
            serde_json::to_value(user).unwrap(),
            json!({"name": "a", "age": 23, "tags": []})
        );
    }

    #[test]
    fn test_demo_succeeds() {
        assert!(demo().is_ok());
    }

    const TAGGED: &str = r#"{
        "type": "object",
        "fields": {
            "name": { "type": "string" },
            "tags": { "type": "array", "items": { "type": "string" } }
        }
    }"#;

    fn write_file(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_check_valid_document() {
        let tmp = TempDir::new().unwrap();
        let schema = write_file(&tmp, "schema.json", TAGGED);
        let input = write_file(&tmp, "doc.json", r#"{"name": "a", "tags": ["x"], "extra": 1}"#);

        assert!(check(&schema, Some(&input)).is_ok());
    }

    #[test]
    fn test_check_invalid_document() {
        let tmp = TempDir::new().unwrap();
        let schema = write_file(&tmp, "schema.json", TAGGED);
        let input = write_file(&tmp, "doc.json", r#"{"name": 1, "tags": ["x", 2]}"#);

        match check(&schema, Some(&input)) {
            Err(CliError::Validation(err)) => {
                let locations: Vec<_> = err.issues().iter().map(|i| i.location()).collect();
                assert_eq!(locations, vec!["name", "tags[1]"]);
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_run_command_check_reports_bad_definition() {
        let tmp = TempDir::new().unwrap();
        let schema = write_file(&tmp, "schema.json", r#"{"type": "date"}"#);
        let input = write_file(&tmp, "doc.json", "{}");

        let result = run_command(Command::Check {
            schema,
            input: Some(input),
        });
        assert!(matches!(result, Err(CliError::Definition(_))));
    }
}
