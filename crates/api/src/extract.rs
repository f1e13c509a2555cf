//! Body extractor for transport payloads.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use domain::ValidTransport;
use serde_json::Value;

use crate::ApiError;

/// A request body decoded and validated as a transport.
///
/// The `Content-Type` header is not checked: any body that parses as a JSON
/// object is read, as the front-end sometimes omits it.
pub struct TransportBody(pub ValidTransport);

#[async_trait]
impl<S> FromRequest<S> for TransportBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::InvalidBody {
                kind: "body_read",
                message: rejection.body_text(),
            })?;
        parse_transport(&bytes).map(Self)
    }
}

/// Parse raw body bytes and run field validation.
///
/// Whole-body problems (empty, not JSON, not an object) are reported against
/// `body`; everything else is reported per field.
pub fn parse_transport(bytes: &[u8]) -> Result<ValidTransport, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::InvalidBody {
            kind: "missing",
            message: "Field required".to_string(),
        });
    }

    let value: Value = serde_json::from_slice(bytes).map_err(|e| ApiError::InvalidBody {
        kind: "json_invalid",
        message: format!("JSON decode error: {e}"),
    })?;

    let body = value.as_object().ok_or_else(|| ApiError::InvalidBody {
        kind: "model_attributes_type",
        message: "Input should be a valid dictionary or object to extract fields from".to_string(),
    })?;

    Ok(domain::validate_fields(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_kind(bytes: &[u8]) -> &'static str {
        match parse_transport(bytes) {
            Err(ApiError::InvalidBody { kind, .. }) => kind,
            other => panic!("expected a body-level error, got {other:?}"),
        }
    }

    #[test]
    fn whole_body_problems_are_classified() {
        assert_eq!(body_kind(b""), "missing");
        assert_eq!(body_kind(b"  \n"), "missing");
        assert_eq!(body_kind(b"{not json"), "json_invalid");
        assert_eq!(body_kind(b"[1, 2]"), "model_attributes_type");
        assert_eq!(body_kind(b"\"Bus\""), "model_attributes_type");
    }

    #[test]
    fn field_problems_become_validation_errors() {
        let result = parse_transport(br#"{"nombre": "Bus", "tipo": "urbano"}"#);
        match result {
            Err(ApiError::Validation(err)) => {
                assert_eq!(err.violations.len(), 1);
                assert_eq!(err.violations[0].field, "capacidad");
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_body_is_accepted() {
        let transport = parse_transport(br#"{"nombre": "Bus", "capacidad": "40", "tipo": "urbano"}"#)
            .expect("valid body");
        assert_eq!(transport.capacidad(), 40);
    }
}
