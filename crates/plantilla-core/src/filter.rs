//! Exact-match filters over a downloaded collection.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// How the per-field matches of a [`MultiFieldFilter`] are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combinator {
    /// Every field must match (AND).
    #[default]
    All,
    /// At least one field must match (OR).
    Any,
}

/// Criteria for [`filter_by_multiple_fields`].
///
/// `participaciones` is compared against the string form of
/// `numero_participaciones_jo`, so `"3"` matches `3` but `"03"` does not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiFieldFilter {
    pub nombre: String,
    pub localidad: String,
    pub participaciones: String,
    pub lateralidad: String,
}

impl MultiFieldFilter {
    #[must_use]
    pub fn matches(&self, record: &Record, combinator: Combinator) -> bool {
        let data = &record.data;
        let checks = [
            data.nombre == self.nombre,
            data.direccion.localidad == self.localidad,
            data.numero_participaciones_jo.to_string() == self.participaciones,
            data.lateralidad == self.lateralidad,
        ];
        match combinator {
            Combinator::All => checks.iter().all(|&hit| hit),
            Combinator::Any => checks.iter().any(|&hit| hit),
        }
    }
}

/// Keep the records whose `nombre` equals `name` exactly.
#[must_use]
pub fn filter_by_name(records: Vec<Record>, name: &str) -> Vec<Record> {
    records
        .into_iter()
        .filter(|record| record.data.nombre == name)
        .collect()
}

/// Keep the records matching `filter` under `combinator`.
#[must_use]
pub fn filter_by_multiple_fields(
    records: Vec<Record>,
    filter: &MultiFieldFilter,
    combinator: Combinator,
) -> Vec<Record> {
    records
        .into_iter()
        .filter(|record| filter.matches(record, combinator))
        .collect()
}
