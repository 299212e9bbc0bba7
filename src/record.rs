//! Keyed procurement records.
//!
//! A record is a structured value addressable by a unique key within a
//! registry - a supplier contract under its PO number, contractor info
//! under the same key, and so on. The update operation treats everything
//! except the one targeted field as opaque: those fields must come back
//! from the registry bit-identical, and [`Record::fingerprint_excluding`]
//! exists so callers and tests can check exactly that.

use std::collections::BTreeMap;

use blake3::Hasher;
use serde::{Deserialize, Serialize};

use crate::key::RecordKey;
use crate::value::Value;

/// A structured, keyed record held by a registry.
///
/// The registry owns the record's lifecycle; this crate only ever reads
/// a record, mutates an in-memory copy, and asks the registry to write
/// it back under the same key.
///
/// # Examples
///
/// ```
/// use procura::{Record, RecordKey, Value};
///
/// let mut record = Record::new(
///     RecordKey::new("PO-1001").unwrap(),
///     "SUPPLIERCONTRACT",
/// );
/// record.set_field("contractorInfo", "Acme");
/// record.set_field("amount", 500);
///
/// assert_eq!(record.field("amount"), Some(&Value::Int(500)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique key within the registry, e.g. a PO number.
    pub key: RecordKey,

    /// Document type tag, e.g. `SUPPLIERCONTRACT` or `CONTRACTORINFO`.
    pub doc_type: String,

    /// Named fields. Ordered map so encodings and fingerprints are stable.
    pub fields: BTreeMap<String, Value>,
}

impl Record {
    /// Creates an empty record with the given key and document type.
    #[must_use]
    pub fn new(key: RecordKey, doc_type: impl Into<String>) -> Self {
        Self {
            key,
            doc_type: doc_type.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Returns the value stored under `name`, if any.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Sets `name` to `value`, replacing any previous value.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Number of fields on the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record carries no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Stable content fingerprint over key, document type, and all fields.
    ///
    /// Two records with equal content always produce the same fingerprint,
    /// independent of how they were built.
    #[must_use]
    pub fn fingerprint(&self) -> [u8; 32] {
        self.fingerprint_inner(None)
    }

    /// Fingerprint with one field left out of the hash.
    ///
    /// This is how the preservation invariant is checked: after a single-field
    /// update, `fingerprint_excluding(field)` must be unchanged while
    /// `fingerprint()` reflects the new value.
    #[must_use]
    pub fn fingerprint_excluding(&self, field: &str) -> [u8; 32] {
        self.fingerprint_inner(Some(field))
    }

    fn fingerprint_inner(&self, excluded: Option<&str>) -> [u8; 32] {
        let mut hasher = Hasher::new();
        hash_str(&mut hasher, self.key.as_str());
        hash_str(&mut hasher, &self.doc_type);

        for (name, value) in &self.fields {
            if excluded == Some(name.as_str()) {
                continue;
            }
            hash_str(&mut hasher, name);
            hash_value(&mut hasher, value);
        }

        *hasher.finalize().as_bytes()
    }
}

// Length-prefixed so adjacent strings cannot collide across boundaries.
fn hash_str(hasher: &mut Hasher, s: &str) {
    hasher.update(&(s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}

fn hash_value(hasher: &mut Hasher, value: &Value) {
    match value {
        Value::Bool(v) => {
            hasher.update(b"b");
            hasher.update(&[u8::from(*v)]);
        }
        Value::Int(v) => {
            hasher.update(b"i");
            hasher.update(&v.to_le_bytes());
        }
        Value::Float(v) => {
            hasher.update(b"f");
            hasher.update(&v.to_le_bytes());
        }
        Value::String(v) => {
            hasher.update(b"s");
            hash_str(hasher, v);
        }
        Value::Timestamp(v) => {
            hasher.update(b"t");
            hasher.update(&v.timestamp_micros().to_le_bytes());
        }
        Value::Structured(v) => {
            hasher.update(b"j");
            hash_str(hasher, &v.to_string());
        }
        Value::Null => {
            hasher.update(b"n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_field_access_and_replacement() {
        let mut record = contract();
        assert_eq!(record.field("contractorInfo"), Some(&Value::String("Acme".into())));
        assert_eq!(record.field("missing"), None);
        assert_eq!(record.len(), 2);
        assert!(!record.is_empty());

        record.set_field("contractorInfo", "NewVendor");
        assert_eq!(
            record.field("contractorInfo"),
            Some(&Value::String("NewVendor".into()))
        );
        // Replacement does not grow the map.
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_fingerprint_is_stable_across_construction_order() {
        let a = contract();

        let mut b = Record::new(RecordKey::new("PO-1001").unwrap(), "SUPPLIERCONTRACT");
        b.set_field("amount", 500);
        b.set_field("contractorInfo", "Acme");

        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_fingerprint_changes_with_content() {
        let a = contract();

        let mut b = a.clone();
        b.set_field("contractorInfo", "NewVendor");
        assert_ne!(a.fingerprint(), b.fingerprint());

        let mut c = a.clone();
        c.doc_type = "CONTRACTORINFO".to_string();
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn test_fingerprint_excluding_masks_one_field() {
        let a = contract();
        let mut b = a.clone();
        b.set_field("contractorInfo", "NewVendor");

        // With the mutated field excluded the two records hash identically;
        // excluding an untouched field still tells them apart.
        assert_eq!(
            a.fingerprint_excluding("contractorInfo"),
            b.fingerprint_excluding("contractorInfo")
        );
        assert_ne!(
            a.fingerprint_excluding("amount"),
            b.fingerprint_excluding("amount")
        );
    }

    #[test]
    fn test_fingerprint_distinguishes_value_types() {
        let mut a = Record::new(RecordKey::new("PO-1").unwrap(), "T");
        a.set_field("x", Value::Null);
        let mut b = Record::new(RecordKey::new("PO-1").unwrap(), "T");
        b.set_field("x", Value::String(String::new()));
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_record_json_roundtrip() {
        let record = contract();
        let json = serde_json::to_string(&record).unwrap();
        let decoded: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, record);
        assert_eq!(decoded.fingerprint(), record.fingerprint());
    }
}
