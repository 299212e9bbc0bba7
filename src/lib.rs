//! # Procura - procurement record registry core
//!
//! Procura models the smallest useful slice of a procurement ledger: keyed
//! records (supplier contracts, contractor info) held by a pluggable
//! registry, and a conditional update operation that fetches one record by
//! key, replaces exactly one field, and writes the record back under the
//! same key.
//!
//! ## Core Concepts
//!
//! - **Record**: a structured value with a unique key and named fields
//! - **Registry**: an external key-value collaborator supporting `get` and `update`
//! - **Update operation**: read one record, replace one field, write it back
//! - **Request envelope**: versioned wrapper with request id and timestamp
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use procura::{InMemoryRegistry, RegistryEngine};
//! use procura::ops::UpdateFieldBuilder;
//!
//! let engine = RegistryEngine::new(Arc::new(InMemoryRegistry::new()));
//!
//! let request = UpdateFieldBuilder::new()
//!     .key("PO-1001")
//!     .field("contractorInfo")
//!     .value("NewVendor")
//!     .build()?;
//!
//! engine.execute(request)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod codec;
pub mod engine;
pub mod error;
pub mod key;
pub mod ops;
pub mod record;
pub mod registry;
pub mod request;
pub mod value;

// Re-export primary types at crate root for convenience
pub use engine::{EngineResponse, RegistryEngine};
pub use error::{ProcuraError, ProcuraResult, ValidationError};
pub use key::RecordKey;
pub use ops::{update_field, RecordContractBuilder, UpdateFieldBuilder};
pub use record::Record;
pub use registry::{InMemoryRegistry, Registry, RegistryError};
pub use request::{
    GetRecordPayload, ListRecordsPayload, Operation, ProcuraRequest, RecordContractPayload,
    UpdateFieldPayload,
};
pub use value::Value;
