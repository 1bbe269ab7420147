//! Cross-cutting error types for Plantilla.
//!
//! Transport errors live in `plantilla-gateway` and configuration errors in
//! `plantilla-config`. Everything that can go wrong while interpreting a
//! downloaded collection is defined here.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A sort or filter named a field the player payload does not have.
    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    /// The parent field exists but has no such nested field.
    #[error("Unknown subfield: {field}.{subfield}")]
    UnknownSubfield { field: String, subfield: String },
}
