//! Outcome of running one schema against one value

use super::errors::{Issue, ValidationError};

/// Result of a single validation pass.
///
/// A failure always carries at least one issue.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult<T> {
    Success(T),
    Failure(Vec<Issue>),
}

impl<T> ValidationResult<T> {
    /// Failure with a single issue
    pub fn fail(issue: Issue) -> Self {
        ValidationResult::Failure(vec![issue])
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ValidationResult::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the collected issues (empty on success)
    pub fn issues(&self) -> &[Issue] {
        match self {
            ValidationResult::Success(_) => &[],
            ValidationResult::Failure(issues) => issues,
        }
    }

    /// Renders every issue as a human-readable message, in order.
    pub fn messages(&self) -> Vec<String> {
        self.issues().iter().map(ToString::to_string).collect()
    }

    /// Returns the validated value, discarding any issues
    pub fn ok(self) -> Option<T> {
        match self {
            ValidationResult::Success(value) => Some(value),
            ValidationResult::Failure(_) => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> ValidationResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ValidationResult::Success(value) => ValidationResult::Success(f(value)),
            ValidationResult::Failure(issues) => ValidationResult::Failure(issues),
        }
    }

    /// Converts into a `Result`, wrapping issues in a [`ValidationError`].
    pub fn into_result(self) -> Result<T, ValidationError> {
        match self {
            ValidationResult::Success(value) => Ok(value),
            ValidationResult::Failure(issues) => Err(ValidationError::new(issues)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::errors::{Kind, PathSegment};
    use serde_json::json;

    #[test]
    fn test_success_has_no_issues() {
        let result = ValidationResult::Success(5);
        assert!(result.is_success());
        assert!(result.issues().is_empty());
        assert!(result.messages().is_empty());
        assert_eq!(result.ok(), Some(5));
    }

    #[test]
    fn test_failure_messages_are_rendered() {
        let result: ValidationResult<()> = ValidationResult::fail(
            Issue::mismatch(Kind::Number, &json!("x")).within(PathSegment::Index(2)),
        );
        assert!(result.is_failure());
        assert_eq!(result.messages(), vec!["Error at index 2: Expected a number"]);
    }

    #[test]
    fn test_map_keeps_failure() {
        let result: ValidationResult<i32> =
            ValidationResult::fail(Issue::mismatch(Kind::Number, &json!(null)));
        let mapped = result.map(|n| n * 2);
        assert_eq!(mapped.issues().len(), 1);
    }

    #[test]
    fn test_into_result() {
        let err = ValidationResult::<()>::fail(Issue::mismatch(Kind::Array, &json!({})))
            .into_result()
            .unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: Expected an array");
    }
}
