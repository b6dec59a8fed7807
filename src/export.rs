//! Workflow export
//!
//! Turns one record's payload into an indented `workflow.json` and hands it to
//! a [`SaveSink`]. A textual payload is parsed before anything is written; if
//! it is not valid JSON the export stops there and no file is produced.

use crate::record::Payload;
use crate::storage::SaveSink;
use eyre::{Context, Result};
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

/// Name of the exported file
pub const EXPORT_FILE_NAME: &str = "workflow.json";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("workflow payload is not valid JSON")]
    MalformedPayload(#[source] serde_json::Error),

    #[error("failed to serialize workflow payload")]
    Serialize(#[source] serde_json::Error),

    #[error("no workflow with id '{0}'")]
    RecordNotFound(String),
}

/// Structured form of a payload, parsing it first when it is text
pub fn parse_payload(payload: &Payload) -> Result<Value, ExportError> {
    match payload {
        Payload::Structured(value) => Ok(value.clone()),
        Payload::Text(text) => serde_json::from_str(text).map_err(ExportError::MalformedPayload),
    }
}

/// Render a payload as JSON text with 2-space indentation
///
/// Object keys keep the order they have in the payload.
pub fn render_payload(payload: &Payload) -> Result<String, ExportError> {
    let value = parse_payload(payload)?;
    serde_json::to_string_pretty(&value).map_err(ExportError::Serialize)
}

/// Render a payload and save it as `workflow.json`
///
/// # Errors
/// Returns [`ExportError::MalformedPayload`] without touching the sink when a
/// textual payload does not parse, or the sink's error if saving fails.
pub fn export_payload(payload: &Payload, sink: &impl SaveSink) -> Result<PathBuf> {
    let rendered = render_payload(payload)?;
    let path = sink
        .save(EXPORT_FILE_NAME, rendered.as_bytes())
        .context("Failed to save exported workflow")?;

    log::info!("Exported workflow to {}", path.display());
    Ok(path)
}
