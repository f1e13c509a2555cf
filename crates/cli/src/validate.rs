//! Offline check of a payload file, backing the `validate` sub-command.

use std::path::Path;

use anyhow::Context;
use domain::{ValidTransport, ValidationError};
use serde_json::Value;

/// Read `path` and run it through the same field decoding and rules as the
/// HTTP handlers.
///
/// The outer error covers unreadable files and non-object JSON; the inner
/// result is the validation outcome.
pub fn validate_file(path: &Path) -> anyhow::Result<Result<ValidTransport, ValidationError>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read file {}", path.display()))?;

    let value: Value = serde_json::from_str(&content).context("invalid JSON payload")?;
    let body = value
        .as_object()
        .context("payload must be a JSON object")?;

    Ok(domain::validate_fields(body))
}

/// Human-readable summary of a validation outcome.
pub fn report(outcome: &Result<ValidTransport, ValidationError>) -> String {
    match outcome {
        Ok(transport) => format!(
            "✅ Payload is valid: {} ({}, capacity {})",
            transport.nombre(),
            transport.tipo(),
            transport.capacidad()
        ),
        Err(e) => {
            let mut out = String::from("❌ Validation failed:");
            for violation in &e.violations {
                out.push_str(&format!("\n  - {violation}"));
            }
            out
        }
    }
}
