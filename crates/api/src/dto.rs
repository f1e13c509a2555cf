//! Wire shapes for responses.
//!
//! Rows from the `db` crate are never serialised directly; they are mapped
//! through [`TransportDto`] first.

use db::TransportRow;
use serde::{Deserialize, Serialize};

/// A transport as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportDto {
    pub id: i64,
    pub nombre: String,
    pub capacidad: i64,
    pub tipo: String,
}

impl From<TransportRow> for TransportDto {
    fn from(row: TransportRow) -> Self {
        Self {
            id: row.id,
            nombre: row.nombre,
            capacidad: row.capacidad,
            tipo: row.tipo,
        }
    }
}

/// `{"message": ...}`
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// `{"message": ..., "data": {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse {
    pub message: &'static str,
    pub data: TransportDto,
}

impl DataResponse {
    pub fn new(message: &'static str, row: TransportRow) -> Self {
        Self {
            message,
            data: row.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row() -> TransportRow {
        TransportRow {
            id: 3,
            nombre: "Bus".into(),
            capacidad: 40,
            tipo: "urbano".into(),
        }
    }

    #[test]
    fn row_maps_to_wire_shape() {
        let value = serde_json::to_value(TransportDto::from(row())).unwrap();
        assert_eq!(
            value,
            json!({ "id": 3, "nombre": "Bus", "capacidad": 40, "tipo": "urbano" })
        );
    }

    #[test]
    fn data_response_wraps_message_and_record() {
        let value = serde_json::to_value(DataResponse::new("Transporte agregado", row())).unwrap();
        assert_eq!(value["message"], "Transporte agregado");
        assert_eq!(value["data"]["id"], 3);
        assert_eq!(value["data"]["tipo"], "urbano");
    }
}
