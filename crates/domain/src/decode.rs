//! Reading a transport out of a JSON object.
//!
//! Each field is decoded on its own so one response can carry a type error
//! on `capacidad` next to a length error on `nombre`. Integers are read
//! leniently: `40`, `40.0` and `"40"` all decode to 40, while `4.5`,
//! `"cuarenta"`, booleans and `null` do not. Strings must be JSON strings.
//! Keys other than the three fields are ignored.

use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    Constraint, FieldViolation, ValidationError,
    models::{TransportPayload, ValidTransport},
    validation::{check_capacity, check_name, check_type, finish},
};

/// Decode and validate the fields of a JSON body.
///
/// Violations come back in field order; a field that fails to decode is not
/// checked further.
///
/// # Errors
/// [`ValidationError`] listing every missing, mistyped or out-of-range field.
pub fn validate_fields(body: &Map<String, Value>) -> Result<ValidTransport, ValidationError> {
    let mut violations = Vec::new();

    let nombre = decode_string(body, "nombre", &mut violations);
    if let Some(nombre) = nombre {
        check_name(nombre, &mut violations);
    }

    let capacidad = decode_integer(body, "capacidad", &mut violations);
    if let Some(capacidad) = capacidad {
        check_capacity(capacidad, &mut violations);
    }

    let tipo = decode_string(body, "tipo", &mut violations);
    if let Some(tipo) = tipo {
        check_type(tipo, &mut violations);
    }

    match (nombre, capacidad, tipo) {
        (Some(nombre), Some(capacidad), Some(tipo)) => {
            finish(TransportPayload::new(nombre, capacidad, tipo), violations)
        }
        // A field failed to decode, so at least one violation was recorded.
        _ => {
            debug!(count = violations.len(), "transport body rejected");
            Err(ValidationError { violations })
        }
    }
}

fn decode_string<'a>(
    body: &'a Map<String, Value>,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<&'a str> {
    match body.get(field) {
        Some(Value::String(s)) => Some(s.as_str()),
        Some(_) => {
            violations.push(FieldViolation { field, constraint: Constraint::NotAString });
            None
        }
        None => {
            violations.push(FieldViolation { field, constraint: Constraint::Missing });
            None
        }
    }
}

fn decode_integer(
    body: &Map<String, Value>,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<i64> {
    let decoded = match body.get(field) {
        None => Err(Constraint::Missing),
        Some(Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Ok(i),
            (None, Some(f)) if f.fract() != 0.0 => Err(Constraint::FractionalNumber),
            (None, Some(f)) if f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
            _ => Err(Constraint::NotAnInteger),
        },
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| Constraint::UnparsableInteger),
        Some(_) => Err(Constraint::NotAnInteger),
    };

    match decoded {
        Ok(value) => Some(value),
        Err(constraint) => {
            violations.push(FieldViolation { field, constraint });
            None
        }
    }
}
