//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field was absent or null
    Missing { field: &'static str },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field has the wrong JSON type
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    /// Integer field outside its inclusive range
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    /// Referenced camper or activity does not exist
    UnknownReference,

    /// Value rejected by a database constraint
    Constraint,

    /// Request body could not be read as the expected JSON shape
    MalformedBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::WrongType { field, expected } => {
                write!(f, "{} must be {}", field, expected)
            }
            Self::OutOfRange { field, min, max } => {
                write!(f, "{} must be an integer between {} and {}", field, min, max)
            }
            Self::UnknownReference => write!(f, "referenced camper or activity does not exist"),
            Self::Constraint => write!(f, "value rejected by a database constraint"),
            Self::MalformedBody { reason } => write!(f, "malformed request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check an integer against an inclusive range.
pub(crate) fn in_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<i64, ValidationError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange { field, min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::OutOfRange {
            field: "age",
            min: 8,
            max: 18,
        };
        assert_eq!(err.to_string(), "age must be an integer between 8 and 18");
    }

    #[test]
    fn range_is_inclusive() {
        assert_eq!(in_range("time", 0, 0, 23), Ok(0));
        assert_eq!(in_range("time", 23, 0, 23), Ok(23));
        assert!(in_range("time", 24, 0, 23).is_err());
        assert!(in_range("time", -1, 0, 23).is_err());
    }
}
