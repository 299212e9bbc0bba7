//! RECORD_CONTRACT request builder.
//!
//! Assembles a new record field by field and wraps it in a request
//! envelope. Whether the key is genuinely new is decided by the registry
//! at execution time, not here.

use std::collections::BTreeMap;

use crate::error::ValidationError;
use crate::key::RecordKey;
use crate::record::Record;
use crate::request::{Operation, ProcuraRequest, RecordContractPayload};
use crate::value::Value;

/// Builder for RECORD_CONTRACT requests.
///
/// # Example
/// ```rust,ignore
/// let request = RecordContractBuilder::new()
///     .key("PO-1001")
///     .doc_type("SUPPLIERCONTRACT")
///     .field("contractorInfo", "Acme")
///     .field("amount", 500)
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordContractBuilder {
    key: Option<String>,
    doc_type: Option<String>,
    fields: BTreeMap<String, Value>,
}

impl RecordContractBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the record key (required).
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the document type tag (required), e.g. `SUPPLIERCONTRACT`.
    #[must_use]
    pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = Some(doc_type.into());
        self
    }

    /// Add one named field. Later calls with the same name win.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Build the RECORD_CONTRACT request.
    ///
    /// # Errors
    /// Returns `ValidationError::MissingField` if key or document type is
    /// not set, `ValidationError::EmptyKey` for a blank key, and
    /// `ValidationError::EmptyDocType` for a blank document type.
    pub fn build(self) -> Result<ProcuraRequest, ValidationError> {
        let key = self.key.ok_or_else(|| ValidationError::MissingField {
            field: "key".to_string(),
        })?;
        let key = RecordKey::new(key)?;

        let doc_type = self.doc_type.ok_or_else(|| ValidationError::MissingField {
            field: "doc_type".to_string(),
        })?;

        let doc_type = doc_type.trim().to_string();
        if doc_type.is_empty() {
            return Err(ValidationError::EmptyDocType);
        }

        let record = Record {
            key,
            doc_type,
            fields: self.fields,
        };

        Ok(ProcuraRequest::new(Operation::RecordContract(
            RecordContractPayload { record },
        )))
    }
}
