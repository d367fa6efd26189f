//! Field-level validation results.
//!
//! Every violation found in a request is collected into one ordered
//! [`ValidationFailure`]; the client sees them joined into a single message such as
//! `"Invalid input: ID must be a numeric value, ID must be a positive number"`.

use serde::Serialize;
use std::fmt;
use validator::{ValidationErrors, ValidationErrorsKind};

pub const INVALID_INPUT_PREFIX: &str = "Invalid input: ";
pub const ID_NOT_NUMERIC: &str = "ID must be a numeric value";
pub const ID_NOT_POSITIVE: &str = "ID must be a positive number";

/// One violated constraint, addressed by its field path (`name`, `tags[0].label`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Ordered list of violations for a whole request part (path, query or body).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationFailure(Vec<FieldViolation>);

impl ValidationFailure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![FieldViolation::new(field, message)])
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldViolation::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    /// Violation messages joined with `", "`.
    pub fn joined(&self) -> String {
        self.0
            .iter()
            .map(|v| v.message.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Client-facing message: `"Invalid input: "` followed by [`joined`](Self::joined).
    pub fn message(&self) -> String {
        format!("{}{}", INVALID_INPUT_PREFIX, self.joined())
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ValidationFailure {}

impl From<ValidationErrors> for ValidationFailure {
    fn from(errors: ValidationErrors) -> Self {
        let mut failure = ValidationFailure::new();
        collect(&errors, "", &mut failure);
        failure
    }
}

// validator keeps fields in a HashMap, so sort by name for a stable message.
fn collect(errors: &ValidationErrors, prefix: &str, out: &mut ValidationFailure) {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    for (field, kind) in fields {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(errs) => {
                for err in errs {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid ({})", path, err.code));
                    out.push(path.clone(), message);
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}

/// Parses a path `id` into a strictly positive integer.
///
/// Non-numeric input only reports the numeric-format violation; a number that is
/// both fractional and non-positive reports both.
pub fn validate_id(raw: &str) -> Result<i64, ValidationFailure> {
    let raw = raw.trim();

    if let Ok(id) = raw.parse::<i64>() {
        return if id > 0 {
            Ok(id)
        } else {
            Err(ValidationFailure::single("id", ID_NOT_POSITIVE))
        };
    }

    let mut failure = ValidationFailure::single("id", ID_NOT_NUMERIC);
    if let Ok(value) = raw.parse::<f64>() {
        if value.is_finite() && value <= 0.0 {
            failure.push("id", ID_NOT_POSITIVE);
        }
    }
    Err(failure)
}
