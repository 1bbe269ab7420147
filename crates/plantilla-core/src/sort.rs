//! In-place, stable, ascending sorts over a downloaded collection.
//!
//! Text comparisons are case-insensitive (lower-cased); records that compare
//! equal keep their downloaded order.

use crate::fields::{CompositeField, NumericField, TextField};
use crate::record::Record;

/// Sort by `nombre`, ignoring case.
pub fn sort_alphabetically(records: &mut [Record]) {
    sort_by_field(records, TextField::Nombre);
}

/// Sort by any string-valued top-level field, ignoring case.
pub fn sort_by_field(records: &mut [Record], field: TextField) {
    records.sort_by_cached_key(|record| field.get(&record.data).to_lowercase());
}

/// Sort by a nested field. Date parts compare as numbers, address parts as
/// case-insensitive text.
pub fn sort_by_composite_field(records: &mut [Record], field: CompositeField) {
    match field {
        CompositeField::Fecha(part) => {
            records.sort_by_key(|record| part.get(&record.data.fecha));
        }
        CompositeField::Direccion(part) => {
            records.sort_by_cached_key(|record| part.get(&record.data.direccion).to_lowercase());
        }
    }
}

/// Sort by a numeric field compared as `f64`.
pub fn sort_by_numeric_field(records: &mut [Record], field: NumericField) {
    records.sort_by(|a, b| field.get(&a.data).total_cmp(&field.get(&b.data)));
}
