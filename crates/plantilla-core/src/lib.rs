//! # plantilla-core
//!
//! Core types and pure collection transforms for the Plantilla client.
//!
//! This crate provides the foundational types shared across all Plantilla crates:
//! - [`Record`] and its player payload, as served by the gateway
//! - Home/about payloads with the [`NullData`] fallback sentinel
//! - Typed field accessors used by the sort engine
//! - Stable sorts and equality filters over a downloaded collection
//! - Cross-cutting error types

pub mod errors;
pub mod fields;
pub mod filter;
pub mod payload;
pub mod record;
pub mod sort;

pub use errors::CoreError;
pub use fields::{AddressPart, CompositeField, DatePart, NumericField, TextField};
pub use filter::{Combinator, MultiFieldFilter, filter_by_multiple_fields, filter_by_name};
pub use payload::{AboutPayload, HomePayload, NullData};
pub use record::{Direccion, Fecha, PlayerData, Record, RecordRef};
pub use sort::{
    sort_alphabetically, sort_by_composite_field, sort_by_field, sort_by_numeric_field,
};
