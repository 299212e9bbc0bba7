//! Request envelope and operation payloads.
//!
//! Every operation submitted to the engine travels in a versioned
//! envelope carrying a request id and timestamp, so invocations can be
//! correlated and audited by the hosting platform. The payloads
//! themselves are plain data; builders in [`crate::ops`] validate inputs
//! before producing an envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::key::RecordKey;
use crate::record::Record;
use crate::value::Value;

/// Versioned wrapper around every procura operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcuraRequest {
    /// Protocol version (e.g., "1.0").
    pub version: String,

    /// Unique identifier for this request (for correlation/debugging).
    pub request_id: Uuid,

    /// When this request was created.
    pub timestamp: DateTime<Utc>,

    /// The operation to execute.
    pub operation: Operation,
}

impl ProcuraRequest {
    /// Current protocol version.
    pub const CURRENT_VERSION: &'static str = "1.0";

    /// Creates a new request with the given operation.
    #[must_use]
    pub fn new(operation: Operation) -> Self {
        Self {
            version: Self::CURRENT_VERSION.to_string(),
            request_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            operation,
        }
    }

    /// Sets a custom request ID (useful for correlation).
    #[must_use]
    pub fn with_request_id(mut self, request_id: Uuid) -> Self {
        self.request_id = request_id;
        self
    }
}

/// All supported operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "payload", rename_all = "snake_case")]
pub enum Operation {
    /// Replace one field of one record (the core operation).
    UpdateField(UpdateFieldPayload),

    /// Store a new contract record; fails if the key already exists.
    RecordContract(RecordContractPayload),

    /// Fetch one record by key.
    GetRecord(GetRecordPayload),

    /// List records, optionally filtered by document type.
    ListRecords(ListRecordsPayload),
}

/// Payload for the single-field update operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateFieldPayload {
    /// Key of the record to update.
    pub key: RecordKey,

    /// Name of the field to replace.
    pub field: String,

    /// Replacement value. Any value the field type accepts; no validation
    /// beyond assignment is performed by this core.
    pub value: Value,
}

/// Payload for recording a new contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordContractPayload {
    /// The record to store.
    pub record: Record,
}

/// Payload for a single-record lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetRecordPayload {
    /// Key of the record to fetch.
    pub key: RecordKey,
}

/// Payload for listing records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListRecordsPayload {
    /// Restrict the listing to one document type; `None` lists everything.
    pub doc_type: Option<String>,
}
