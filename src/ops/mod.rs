//! Operation builders and the core update pipeline.
//!
//! Builders give a fluent, validating API for constructing request
//! envelopes; [`update_field`] is the two-step read-then-write pipeline
//! the crate exists for.

mod record;
mod update;

pub use record::RecordContractBuilder;
pub use update::{update_field, UpdateFieldBuilder};
