use std::fmt::Display;

use crate::error::{RecordError, RecordResult};
use crate::field::Field;
use crate::value::Value;

/// A fixed-shape record stored in a line oriented file, one field per line.
///
/// The [Ord] implementation is the natural order of the record. [Display] is its canonical
/// text form.
pub trait Record: Ord + Display + Sized {
    /// Record name used in diagnostics
    const NAME: &'static str;

    /// Positional fields of one record, in file order.
    fn fields() -> Vec<Field>;

    /// Build a record from values parsed according to [Record::fields].
    fn from_values(values: Vec<Value>) -> RecordResult<Self>;

    /// Values to persist, in the order of [Record::fields].
    fn to_values(&self) -> Vec<Value>;

    /// One row of a rendered table. Defaults to the canonical text form.
    fn row(&self) -> String {
        self.to_string()
    }
}

/// Move `values` into an array of exactly `N` elements, failing with
/// [RecordError::SchemaMismatch] otherwise.
pub fn take_values<const N: usize>(record: &'static str, values: Vec<Value>) -> RecordResult<[Value; N]> {
    <[Value; N]>::try_from(values).map_err(|_| schema_mismatch(record, N))
}

pub(crate) fn schema_mismatch(record: &'static str, expected: usize) -> RecordError {
    RecordError::SchemaMismatch {
        record,
        expected,
    }
}
