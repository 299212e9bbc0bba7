//! JSON helpers for records and request envelopes.
//!
//! Serde already provides (de)serialization; this module centralizes the
//! convenience helpers used at the registry boundary and keeps the error
//! mapping in one place.

use crate::error::{ProcuraError, ProcuraResult};
use crate::record::Record;
use crate::registry::RegistryError;
use crate::request::ProcuraRequest;

/// Serialize a record to compact JSON.
///
/// # Errors
/// `Serialization` if encoding fails.
pub fn record_to_json(record: &Record) -> Result<String, RegistryError> {
    serde_json::to_string(record)
        .map_err(|e| RegistryError::Serialization(format!("encode record: {e}")))
}

/// Deserialize a record from JSON.
///
/// # Errors
/// `Serialization` if the input is not a valid record (including an empty
/// key, which the key type rejects during deserialization).
pub fn record_from_json(s: &str) -> Result<Record, RegistryError> {
    serde_json::from_str::<Record>(s)
        .map_err(|e| RegistryError::Serialization(format!("decode record: {e}")))
}

/// Serialize a request envelope to pretty JSON.
///
/// # Errors
/// `Internal` if encoding fails.
pub fn request_to_json_pretty(request: &ProcuraRequest) -> ProcuraResult<String> {
    serde_json::to_string_pretty(request)
        .map_err(|e| ProcuraError::internal(format!("serialize request: {e}")))
}

/// Deserialize a request envelope from JSON.
///
/// # Errors
/// `Internal` if the input is not a valid envelope.
pub fn request_from_json(s: &str) -> ProcuraResult<ProcuraRequest> {
    serde_json::from_str::<ProcuraRequest>(s)
        .map_err(|e| ProcuraError::internal(format!("deserialize request: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::key::RecordKey;
    use crate::ops::UpdateFieldBuilder;

    fn contract() -> Record {
        let mut record = Record::new(
            RecordKey::new("PO-1001").unwrap(),
            "SUPPLIERCONTRACT",
        );
        record.set_field("contractorInfo", "Acme");
        record.set_field("amount", 500);
        record
    }

    #[test]
    fn test_record_json_roundtrip() {
        let record = contract();
        let json = record_to_json(&record).unwrap();
        let decoded = record_from_json(&json).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_record_decode_rejects_blank_key() {
        let json = r#"{"key": "  ", "doc_type": "SUPPLIERCONTRACT", "fields": {}}"#;
        let result = record_from_json(json);
        assert!(matches!(result, Err(RegistryError::Serialization(_))));
    }

    #[test]
    fn test_record_decode_rejects_garbage() {
        assert!(record_from_json("not json").is_err());
        assert!(record_from_json("{}").is_err());
    }

    #[test]
    fn test_request_json_roundtrip() {
        let request = UpdateFieldBuilder::new()
            .key("PO-1001")
            .field("contractorInfo")
            .value("NewVendor")
            .build()
            .unwrap();

        let json = request_to_json_pretty(&request).unwrap();
        let decoded = request_from_json(&json).unwrap();
        assert_eq!(decoded, request);
    }
}
