//! Field validation — run this before anything reaches storage.
//!
//! Rules enforced:
//! 1. `nombre` has between 2 and 100 characters.
//! 2. `capacidad` is strictly greater than 0.
//! 3. `tipo` has between 3 and 50 characters.
//!
//! Lengths count Unicode scalar values, not bytes. All rules are checked so
//! a single response can report every broken field.

use tracing::debug;

use crate::{
    Constraint, FieldViolation, ValidationError,
    models::{TransportPayload, ValidTransport},
};

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 100;
pub const CAPACITY_EXCLUSIVE_MIN: i64 = 0;
pub const TYPE_MIN_LEN: usize = 3;
pub const TYPE_MAX_LEN: usize = 50;

/// Validate a candidate payload.
///
/// # Errors
/// [`ValidationError`] listing every field that broke a rule.
pub fn validate_payload(payload: TransportPayload) -> Result<ValidTransport, ValidationError> {
    let mut violations = Vec::new();

    check_name(&payload.nombre, &mut violations);
    check_capacity(payload.capacidad, &mut violations);
    check_type(&payload.tipo, &mut violations);

    finish(payload, violations)
}

pub(crate) fn check_name(nombre: &str, violations: &mut Vec<FieldViolation>) {
    check_length("nombre", nombre, NAME_MIN_LEN, NAME_MAX_LEN, violations);
}

pub(crate) fn check_capacity(capacidad: i64, violations: &mut Vec<FieldViolation>) {
    if capacidad <= CAPACITY_EXCLUSIVE_MIN {
        violations.push(FieldViolation {
            field: "capacidad",
            constraint: Constraint::NotGreaterThan { bound: CAPACITY_EXCLUSIVE_MIN },
        });
    }
}

pub(crate) fn check_type(tipo: &str, violations: &mut Vec<FieldViolation>) {
    check_length("tipo", tipo, TYPE_MIN_LEN, TYPE_MAX_LEN, violations);
}

pub(crate) fn finish(
    payload: TransportPayload,
    violations: Vec<FieldViolation>,
) -> Result<ValidTransport, ValidationError> {
    if violations.is_empty() {
        Ok(ValidTransport::from_checked(payload))
    } else {
        debug!(count = violations.len(), "transport payload rejected");
        Err(ValidationError { violations })
    }
}

fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
    violations: &mut Vec<FieldViolation>,
) {
    let len = value.chars().count();
    if len < min {
        violations.push(FieldViolation { field, constraint: Constraint::TooShort { min } });
    } else if len > max {
        violations.push(FieldViolation { field, constraint: Constraint::TooLong { max } });
    }
}
