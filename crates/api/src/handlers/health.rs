use axum::Json;

use crate::dto::MessageResponse;

/// Liveness check.
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("API funcionando correctamente"))
}
