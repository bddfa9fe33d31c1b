//! JSON I/O handling for CLI
//!
//! - Input: one JSON document from a file or stdin
//! - Output: one JSON object per line on stdout
//! - UTF-8 only

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde_json::{json, Value};

use super::errors::{CliError, CliResult};
use crate::schema::ValidationError;

/// Read the input document from `path`, or from stdin when absent
pub fn read_input(path: Option<&Path>) -> CliResult<Value> {
    let content = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().lock().read_to_string(&mut buf)?;
            buf
        }
    };

    if content.trim().is_empty() {
        return Err(CliError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "Empty input",
        )));
    }

    Ok(serde_json::from_str(&content)?)
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_line(&mut io::stdout(), &success_body(data))
}

/// Write a validation failure to stdout
pub fn write_validation_error(err: &ValidationError) -> CliResult<()> {
    write_line(&mut io::stdout(), &failure_body(err))
}

fn success_body(data: Value) -> Value {
    json!({
        "status": "ok",
        "data": data
    })
}

fn failure_body(err: &ValidationError) -> Value {
    let issues: Vec<Value> = err
        .issues()
        .iter()
        .map(|issue| {
            json!({
                "path": issue.location(),
                "message": issue.kind.to_string()
            })
        })
        .collect();

    json!({
        "status": "error",
        "message": err.to_string(),
        "issues": issues
    })
}

fn write_line<W: Write>(writer: &mut W, body: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, body)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{load, Shape};
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_input_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{\"a\": [1, 2]}}").unwrap();

        let value = read_input(Some(file.path())).unwrap();
        assert_eq!(value, json!({"a": [1, 2]}));
    }

    #[test]
    fn test_read_input_rejects_empty_file() {
        let file = NamedTempFile::new().unwrap();
        assert!(matches!(read_input(Some(file.path())), Err(CliError::Io(_))));
    }

    #[test]
    fn test_read_input_rejects_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        assert!(matches!(read_input(Some(file.path())), Err(CliError::Json(_))));
    }

    #[test]
    fn test_failure_body_lists_issue_paths() {
        let schema = load::object(Shape::new().field("tags", load::array(load::string())));
        let err = schema.parse(&json!({"tags": ["a", 5]})).unwrap_err();

        let body = failure_body(&err);
        assert_eq!(body["status"], "error");
        assert_eq!(
            body["message"],
            "Validation failed: Error at key \"tags\": Error at index 1: Expected a string"
        );
        assert_eq!(
            body["issues"],
            json!([{"path": "tags[1]", "message": "Expected a string"}])
        );
    }

    #[test]
    fn test_write_line_is_single_json_line() {
        let mut buf = Vec::new();
        write_line(&mut buf, &success_body(json!(1))).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "{\"status\":\"ok\",\"data\":1}\n");
    }
}
