//! Validation error types.

use std::fmt;

use thiserror::Error;

/// The rule a single field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// The field is absent from the body.
    Missing,
    /// Expected a JSON string.
    NotAString,
    /// Expected an integer (or something that coerces to one).
    NotAnInteger,
    /// A string that does not parse as an integer.
    UnparsableInteger,
    /// A number with a non-zero fractional part.
    FractionalNumber,
    /// Text shorter than `min` characters.
    TooShort { min: usize },
    /// Text longer than `max` characters.
    TooLong { max: usize },
    /// Number not strictly greater than `bound`.
    NotGreaterThan { bound: i64 },
}

impl Constraint {
    /// Stable machine-readable identifier, used as the `type` of a 422 entry.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Missing               => "missing",
            Self::NotAString            => "string_type",
            Self::NotAnInteger          => "int_type",
            Self::UnparsableInteger     => "int_parsing",
            Self::FractionalNumber      => "int_from_float",
            Self::TooShort { .. }       => "string_too_short",
            Self::TooLong { .. }        => "string_too_long",
            Self::NotGreaterThan { .. } => "greater_than",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing                  => write!(f, "Field required"),
            Self::NotAString               => write!(f, "Input should be a valid string"),
            Self::NotAnInteger             => write!(f, "Input should be a valid integer"),
            Self::UnparsableInteger        => {
                write!(f, "Input should be a valid integer, unable to parse string as an integer")
            }
            Self::FractionalNumber         => {
                write!(f, "Input should be a valid integer, got a number with a fractional part")
            }
            Self::TooShort { min }         => write!(f, "String should have at least {min} characters"),
            Self::TooLong { max }          => write!(f, "String should have at most {max} characters"),
            Self::NotGreaterThan { bound } => write!(f, "Input should be greater than {bound}"),
        }
    }
}

/// One field that failed one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Wire name of the offending field.
    pub field: &'static str,
    pub constraint: Constraint,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.constraint)
    }
}

/// A payload broke one or more field rules.
///
/// Violations are listed in field order (`nombre`, `capacidad`, `tipo`) and
/// the list is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid transport payload: {}", summary(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

fn summary(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
