//! Execution engine dispatching requests against a registry.
//!
//! The registry handle is injected explicitly at construction; there is
//! no process-wide registry-by-name resolution. The engine is a thin
//! router: each operation maps onto one or two registry calls, and all
//! registry errors propagate unchanged inside [`ProcuraError::Registry`].

use std::sync::Arc;

use crate::error::{ProcuraError, ProcuraResult};
use crate::ops::update_field;
use crate::record::Record;
use crate::registry::Registry;
use crate::request::{Operation, ProcuraRequest};

/// Result of executing a procura operation.
#[derive(Debug)]
pub enum EngineResponse {
    /// Result of UPDATE_FIELD: the stored record now carries the new value.
    Updated,

    /// Result of RECORD_CONTRACT: the record was stored under its key.
    Recorded,

    /// Result of GET_RECORD.
    Record(Record),

    /// Result of LIST_RECORDS.
    Records(Vec<Record>),
}

/// Procura execution engine.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use procura::{EngineResponse, InMemoryRegistry, RegistryEngine};
/// use procura::ops::{RecordContractBuilder, UpdateFieldBuilder};
///
/// let engine = RegistryEngine::new(Arc::new(InMemoryRegistry::new()));
///
/// let record = RecordContractBuilder::new()
///     .key("PO-1001")
///     .doc_type("SUPPLIERCONTRACT")
///     .field("contractorInfo", "Acme")
///     .build()
///     .unwrap();
/// engine.execute(record).unwrap();
///
/// let update = UpdateFieldBuilder::new()
///     .key("PO-1001")
///     .field("contractorInfo")
///     .value("NewVendor")
///     .build()
///     .unwrap();
/// assert!(matches!(engine.execute(update), Ok(EngineResponse::Updated)));
/// ```
#[derive(Clone)]
pub struct RegistryEngine {
    registry: Arc<dyn Registry>,
}

impl RegistryEngine {
    /// Creates an engine over the injected registry handle.
    #[must_use]
    pub fn new(registry: Arc<dyn Registry>) -> Self {
        Self { registry }
    }

    /// Execute one request against the registry.
    ///
    /// # Errors
    /// [`ProcuraError::Registry`] wrapping the unchanged registry error
    /// (`NotFound` on a lookup miss, `Write` on a rejected write-back,
    /// `DuplicateKey` on re-recording an existing contract).
    pub fn execute(&self, request: ProcuraRequest) -> ProcuraResult<EngineResponse> {
        match request.operation {
            Operation::UpdateField(payload) => {
                update_field(self.registry.as_ref(), &payload)?;
                Ok(EngineResponse::Updated)
            }
            Operation::RecordContract(payload) => {
                self.registry.insert(payload.record)?;
                Ok(EngineResponse::Recorded)
            }
            Operation::GetRecord(payload) => {
                let record = self.registry.get(&payload.key)?;
                Ok(EngineResponse::Record(record))
            }
            Operation::ListRecords(payload) => {
                let records = self.registry.list(payload.doc_type.as_deref())?;
                Ok(EngineResponse::Records(records))
            }
        }
    }
}

impl std::fmt::Debug for RegistryEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEngine").finish_non_exhaustive()
    }
}
