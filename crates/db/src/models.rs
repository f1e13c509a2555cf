//! Row structs that map 1-to-1 onto database tables.

use domain::ValidTransport;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// transportes
// ---------------------------------------------------------------------------

/// A persisted transport row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct TransportRow {
    /// Assigned by SQLite on insert; never reused.
    pub id: i64,
    pub nombre: String,
    pub capacidad: i64,
    pub tipo: String,
}

impl TransportRow {
    /// Replace every mutable column with the validated values. `id` is kept.
    pub fn apply(&mut self, transport: &ValidTransport) {
        self.nombre = transport.nombre().to_owned();
        self.capacidad = transport.capacidad();
        self.tipo = transport.tipo().to_owned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::TransportPayload;

    #[test]
    fn apply_overwrites_all_fields_but_keeps_id() {
        let mut row = TransportRow {
            id: 7,
            nombre: "Bus".into(),
            capacidad: 40,
            tipo: "urbano".into(),
        };
        let update = TransportPayload::new("Camion", 10, "carga")
            .validate()
            .expect("valid payload");

        row.apply(&update);

        assert_eq!(
            row,
            TransportRow {
                id: 7,
                nombre: "Camion".into(),
                capacidad: 10,
                tipo: "carga".into(),
            }
        );
    }
}
