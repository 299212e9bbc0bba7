//! In-memory registry backend.
//!
//! Thread-safe reference implementation of the [`Registry`] trait for
//! embedded usage and tests. State lives behind a single `RwLock`, so
//! each call observes and produces a consistent registry snapshot; no
//! coordination happens across calls.

use std::collections::{BTreeSet, HashMap};
use std::sync::RwLock;

use crate::key::RecordKey;
use crate::record::Record;
use crate::registry::traits::{Registry, RegistryError};

fn lock_err(context: &'static str) -> RegistryError {
    RegistryError::Backend(format!("poisoned lock: {context}"))
}

#[derive(Debug, Default)]
struct RegistryState {
    by_key: HashMap<RecordKey, Record>,
    by_doc_type: HashMap<String, BTreeSet<RecordKey>>,
}

fn index_insert(state: &mut RegistryState, record: &Record) {
    state
        .by_doc_type
        .entry(record.doc_type.clone())
        .or_default()
        .insert(record.key.clone());
}

fn index_remove(state: &mut RegistryState, doc_type: &str, key: &RecordKey) {
    if let Some(keys) = state.by_doc_type.get_mut(doc_type) {
        keys.remove(key);
        if keys.is_empty() {
            state.by_doc_type.remove(doc_type);
        }
    }
}

/// Thread-safe in-memory registry.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    state: RwLock<RegistryState>,
}

impl InMemoryRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    ///
    /// # Errors
    /// `Backend` if the state lock is poisoned.
    pub fn len(&self) -> Result<usize, RegistryError> {
        let state = self.state.read().map_err(|_| lock_err("registry.len"))?;
        Ok(state.by_key.len())
    }

    /// Returns true if no records are held.
    ///
    /// # Errors
    /// `Backend` if the state lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, RegistryError> {
        Ok(self.len()? == 0)
    }
}

impl Registry for InMemoryRegistry {
    fn get(&self, key: &RecordKey) -> Result<Record, RegistryError> {
        let state = self.state.read().map_err(|_| lock_err("registry.get"))?;
        state
            .by_key
            .get(key)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(key.clone()))
    }

    fn update(&self, record: Record) -> Result<(), RegistryError> {
        let mut state = self.state.write().map_err(|_| lock_err("registry.update"))?;
        let prev = state
            .by_key
            .get(&record.key)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(record.key.clone()))?;

        if prev.doc_type != record.doc_type {
            index_remove(&mut state, &prev.doc_type, &prev.key);
            index_insert(&mut state, &record);
        }

        state.by_key.insert(record.key.clone(), record);
        Ok(())
    }

    fn insert(&self, record: Record) -> Result<(), RegistryError> {
        let mut state = self.state.write().map_err(|_| lock_err("registry.insert"))?;
        if state.by_key.contains_key(&record.key) {
            return Err(RegistryError::DuplicateKey(record.key.clone()));
        }

        index_insert(&mut state, &record);
        state.by_key.insert(record.key.clone(), record);
        Ok(())
    }

    fn list(&self, doc_type: Option<&str>) -> Result<Vec<Record>, RegistryError> {
        let state = self.state.read().map_err(|_| lock_err("registry.list"))?;

        match doc_type {
            Some(doc_type) => {
                let Some(keys) = state.by_doc_type.get(doc_type) else {
                    return Ok(Vec::new());
                };
                Ok(keys
                    .iter()
                    .filter_map(|key| state.by_key.get(key).cloned())
                    .collect())
            }
            None => {
                let mut records: Vec<Record> = state.by_key.values().cloned().collect();
                records.sort_by(|a, b| a.key.cmp(&b.key));
                Ok(records)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::value::Value;

    fn key(s: &str) -> RecordKey {
        RecordKey::new(s).unwrap()
    }

    fn contract(k: &str, vendor: &str) -> Record {
        let mut record = Record::new(key(k), "SUPPLIERCONTRACT");
        record.set_field("contractorInfo", vendor);
        record.set_field("amount", 500);
        record
    }

    #[test]
    fn test_insert_get_roundtrip() {
        let registry = InMemoryRegistry::new();
        let record = contract("PO-1001", "Acme");

        registry.insert(record.clone()).unwrap();
        assert_eq!(registry.len().unwrap(), 1);

        let got = registry.get(&key("PO-1001")).unwrap();
        assert_eq!(got, record);
    }

    #[test]
    fn test_insert_duplicate_key_rejected() {
        let registry = InMemoryRegistry::new();
        registry.insert(contract("PO-1001", "Acme")).unwrap();

        let result = registry.insert(contract("PO-1001", "Other"));
        assert!(matches!(result, Err(RegistryError::DuplicateKey(k)) if k.as_str() == "PO-1001"));

        // The stored record is untouched by the rejected insert.
        let got = registry.get(&key("PO-1001")).unwrap();
        assert_eq!(got.field("contractorInfo"), Some(&Value::String("Acme".into())));
    }

    #[test]
    fn test_get_missing_key_fails_not_found() {
        let registry = InMemoryRegistry::new();
        let result = registry.get(&key("PO-9999"));
        assert!(matches!(result, Err(RegistryError::NotFound(k)) if k.as_str() == "PO-9999"));
    }

    #[test]
    fn test_update_replaces_stored_record() {
        let registry = InMemoryRegistry::new();
        registry.insert(contract("PO-1001", "Acme")).unwrap();

        let mut updated = contract("PO-1001", "NewVendor");
        updated.set_field("amount", 750);
        registry.update(updated.clone()).unwrap();

        let got = registry.get(&key("PO-1001")).unwrap();
        assert_eq!(got, updated);
        assert_eq!(registry.len().unwrap(), 1);
    }

    #[test]
    fn test_update_missing_key_fails_not_found() {
        let registry = InMemoryRegistry::new();
        let result = registry.update(contract("PO-9999", "Acme"));
        assert!(matches!(result, Err(RegistryError::NotFound(_))));
        assert!(registry.is_empty().unwrap());
    }

    #[test]
    fn test_list_filters_by_doc_type_and_sorts_by_key() {
        let registry = InMemoryRegistry::new();
        registry.insert(contract("PO-1002", "Beta")).unwrap();
        registry.insert(contract("PO-1001", "Acme")).unwrap();

        let mut info = Record::new(key("PO-1001-C1"), "CONTRACTORINFO");
        info.set_field("contractorName", "Jordan Lee");
        registry.insert(info).unwrap();

        let contracts = registry.list(Some("SUPPLIERCONTRACT")).unwrap();
        assert_eq!(contracts.len(), 2);
        assert_eq!(contracts[0].key.as_str(), "PO-1001");
        assert_eq!(contracts[1].key.as_str(), "PO-1002");

        let everything = registry.list(None).unwrap();
        assert_eq!(everything.len(), 3);
        assert!(everything.windows(2).all(|w| w[0].key < w[1].key));

        assert!(registry.list(Some("WORKFLOW")).unwrap().is_empty());
    }

    #[test]
    fn test_update_reindexes_when_doc_type_changes() {
        let registry = InMemoryRegistry::new();
        registry.insert(contract("PO-1001", "Acme")).unwrap();

        let mut moved = registry.get(&key("PO-1001")).unwrap();
        moved.doc_type = "ARCHIVEDCONTRACT".to_string();
        registry.update(moved).unwrap();

        assert!(registry.list(Some("SUPPLIERCONTRACT")).unwrap().is_empty());
        let archived = registry.list(Some("ARCHIVEDCONTRACT")).unwrap();
        assert_eq!(archived.len(), 1);
        assert_eq!(archived[0].key.as_str(), "PO-1001");
    }
}
