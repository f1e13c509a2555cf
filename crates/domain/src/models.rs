//! Transport payload types.
//!
//! Field names on the wire are the Spanish column names used by the client
//! application (`nombre`, `capacidad`, `tipo`).

use crate::{ValidationError, validation::validate_payload};

// ---------------------------------------------------------------------------
// TransportPayload
// ---------------------------------------------------------------------------

/// A candidate transport with every field already typed.
///
/// Bodies arriving as JSON go through [`crate::decode::validate_fields`]
/// instead, which also reports type errors per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportPayload {
    /// Display name, 2..=100 characters.
    pub nombre: String,
    /// Seat or load capacity, strictly positive.
    pub capacidad: i64,
    /// Free-form category, 3..=50 characters.
    pub tipo: String,
}

impl TransportPayload {
    pub fn new(nombre: impl Into<String>, capacidad: i64, tipo: impl Into<String>) -> Self {
        Self {
            nombre: nombre.into(),
            capacidad,
            tipo: tipo.into(),
        }
    }

    /// Check every field rule and, on success, hand back a [`ValidTransport`].
    pub fn validate(self) -> Result<ValidTransport, ValidationError> {
        validate_payload(self)
    }
}

// ---------------------------------------------------------------------------
// ValidTransport
// ---------------------------------------------------------------------------

/// A payload that passed validation.
///
/// Only [`validate_payload`] constructs this type, so the storage layer can
/// accept it without re-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTransport {
    nombre: String,
    capacidad: i64,
    tipo: String,
}

impl ValidTransport {
    pub(crate) fn from_checked(payload: TransportPayload) -> Self {
        Self {
            nombre: payload.nombre,
            capacidad: payload.capacidad,
            tipo: payload.tipo,
        }
    }

    pub fn nombre(&self) -> &str {
        &self.nombre
    }

    pub fn capacidad(&self) -> i64 {
        self.capacidad
    }

    pub fn tipo(&self) -> &str {
        &self.tipo
    }
}
