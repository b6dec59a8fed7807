//! Workflow records
//!
//! A record is one row of the snapshot handed to the table. Records arrive
//! already shaped (see the serde names below) and are never mutated.
//!
//! Example record:
//! ```json
//! {
//!   "id": "wf-1",
//!   "workflowName": "Sync CRM",
//!   "workflowDescription": "Nightly contact sync",
//!   "nodeCount": 4,
//!   "nodeTypes": ["n8n-nodes-base.httpRequest", "n8n-nodes-base.set"],
//!   "credentialsUsed": ["HubSpot account"],
//!   "workflowJson": {"nodes": [], "connections": {}}
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Raw workflow definition attached to a record
///
/// The payload is carried through untouched and only interpreted on export.
/// It may arrive either as structured JSON or as its textual encoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Payload {
    /// Textual JSON encoding, parsed lazily on export
    Text(String),
    /// Already-structured JSON value
    Structured(Value),
}

impl Default for Payload {
    fn default() -> Self {
        Payload::Structured(Value::Null)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Structured(value)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

/// One workflow row of the snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRecord {
    /// Opaque unique identifier
    pub id: String,
    /// Workflow name
    #[serde(rename = "workflowName")]
    pub name: String,
    /// Free-form description, empty when the source has none
    #[serde(rename = "workflowDescription", default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Number of nodes in the workflow
    #[serde(default)]
    pub node_count: u64,
    /// Node type names, duplicates allowed
    #[serde(default, deserialize_with = "null_as_default")]
    pub node_types: Vec<String>,
    /// Credential names, duplicates allowed
    #[serde(default, deserialize_with = "null_as_default")]
    pub credentials_used: Vec<String>,
    /// Raw workflow definition
    #[serde(rename = "workflowJson", default)]
    pub payload: Payload,
}

impl WorkflowRecord {
    /// Create a record with empty description, arrays and payload
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            node_count: 0,
            node_types: Vec::new(),
            credentials_used: Vec::new(),
            payload: Payload::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_node_count(mut self, node_count: u64) -> Self {
        self.node_count = node_count;
        self
    }

    pub fn with_node_types<I, S>(mut self, node_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.node_types = node_types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_credentials<I, S>(mut self, credentials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.credentials_used = credentials.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_payload(mut self, payload: impl Into<Payload>) -> Self {
        self.payload = payload.into();
        self
    }
}

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
