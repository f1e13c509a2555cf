//! `domain` crate — the transport payload and its field validation rules.
//!
//! Pure and synchronous: nothing in here touches storage or the network.

pub mod models;
pub mod error;
pub mod decode;
pub mod validation;

pub use models::{TransportPayload, ValidTransport};
pub use error::{Constraint, FieldViolation, ValidationError};
pub use decode::validate_fields;
pub use validation::validate_payload;
