//! The single-field update operation.
//!
//! This is the contract the crate is built around: look one record up by
//! key, replace exactly one field on the in-memory copy, write the record
//! back under the same key. Two strictly ordered steps - the write is
//! never issued before the lookup has resolved.

use crate::error::ValidationError;
use crate::key::RecordKey;
use crate::registry::{Registry, RegistryError};
use crate::request::{Operation, ProcuraRequest, UpdateFieldPayload};
use crate::value::Value;

/// Apply a single-field update against `registry`.
///
/// Behavior:
/// 1. Fetch the record under `payload.key`. A lookup miss propagates as
///    [`RegistryError::NotFound`] and no write is attempted.
/// 2. Set `payload.field` to `payload.value` on the fetched copy; every
///    other field is left untouched.
/// 3. Ask the registry to persist the copy under the same key. A rejected
///    write propagates unchanged ([`RegistryError::Write`] or whatever the
///    backend raised).
///
/// The operation performs no retries, no recovery, and no rollback;
/// isolation between concurrent invocations is the registry's concern.
/// The field assignment is idempotent: applying the same payload twice
/// leaves the same stored record as applying it once.
///
/// # Errors
/// Propagates [`RegistryError`] from either registry call, unchanged.
///
/// # Examples
///
/// ```
/// use procura::{InMemoryRegistry, Record, RecordKey, Registry, UpdateFieldPayload, Value};
/// use procura::ops::update_field;
///
/// let registry = InMemoryRegistry::new();
/// let key = RecordKey::new("PO-1001").unwrap();
/// let mut record = Record::new(key.clone(), "SUPPLIERCONTRACT");
/// record.set_field("contractorInfo", "Acme");
/// registry.insert(record).unwrap();
///
/// update_field(&registry, &UpdateFieldPayload {
///     key: key.clone(),
///     field: "contractorInfo".to_string(),
///     value: Value::String("NewVendor".to_string()),
/// }).unwrap();
///
/// let stored = registry.get(&key).unwrap();
/// assert_eq!(stored.field("contractorInfo"), Some(&Value::String("NewVendor".into())));
/// ```
pub fn update_field(
    registry: &dyn Registry,
    payload: &UpdateFieldPayload,
) -> Result<(), RegistryError> {
    let mut record = registry.get(&payload.key)?;
    record.set_field(payload.field.clone(), payload.value.clone());
    registry.update(record)
}

/// Builder for UPDATE_FIELD requests.
///
/// # Example
/// ```rust,ignore
/// let request = UpdateFieldBuilder::new()
///     .key("PO-1001")
///     .field("contractorInfo")
///     .value("NewVendor")
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct UpdateFieldBuilder {
    key: Option<String>,
    field: Option<String>,
    value: Option<Value>,
}

impl UpdateFieldBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key of the record to update (required).
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the name of the field to replace (required).
    #[must_use]
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Set the replacement value (required).
    #[must_use]
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Build the UPDATE_FIELD request.
    ///
    /// # Errors
    /// Returns `ValidationError::MissingField` if any required field is not
    /// set, `ValidationError::EmptyKey` for a blank key, and
    /// `ValidationError::EmptyFieldName` for a blank field name.
    pub fn build(self) -> Result<ProcuraRequest, ValidationError> {
        let key = self.key.ok_or_else(|| ValidationError::MissingField {
            field: "key".to_string(),
        })?;
        let key = RecordKey::new(key)?;

        let field = self.field.ok_or_else(|| ValidationError::MissingField {
            field: "field".to_string(),
        })?;

        let field = field.trim().to_string();
        if field.is_empty() {
            return Err(ValidationError::EmptyFieldName);
        }

        let value = self.value.ok_or_else(|| ValidationError::MissingField {
            field: "value".to_string(),
        })?;

        let payload = UpdateFieldPayload { key, field, value };
        Ok(ProcuraRequest::new(Operation::UpdateField(payload)))
    }
}
