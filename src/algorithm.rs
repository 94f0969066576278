use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::comparator::Comparator;

/// In-place sorting algorithm
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Algorithm {
    /// The standard library merge sort, O(n log n) and stable. See [general_sort].
    #[default]
    General,
    /// Pairwise exchange against the end of the unsorted range, O(n²) and not stable.
    /// See [exchange_sort].
    Exchange,
}

impl Algorithm {
    pub fn sort<T, C: Comparator<T> + ?Sized>(&self, records: &mut [T], comparator: &C) {
        match self {
            Algorithm::General => {
                general_sort(records, comparator)
            }
            Algorithm::Exchange => {
                exchange_sort(records, comparator)
            }
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::General => write!(f, "general"),
            Algorithm::Exchange => write!(f, "exchange"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(Algorithm::General),
            "exchange" => Ok(Algorithm::Exchange),
            _ => Err(format!("unknown algorithm '{}', expected 'general' or 'exchange'", s)),
        }
    }
}

/// Sort `records` in place with the standard library sort. Records the comparator considers
/// equal keep their relative order.
pub fn general_sort<T, C: Comparator<T> + ?Sized>(records: &mut [T], comparator: &C) {
    records.sort_by(|a, b| comparator.compare(a, b));
}

/// Sort `records` in place by exchanging pairs.
///
/// For every `i` from the last index down to 1 and every `j` from 0 up to `i - 1`, `records[j]`
/// and `records[i]` are swapped as soon as the comparator puts `records[j]` after `records[i]`.
/// Every pass leaves the greatest remaining record at `i`.
///
/// Unlike adjacent-swap bubble sort this is not stable: records the comparator considers equal
/// may change their relative order.
pub fn exchange_sort<T, C: Comparator<T> + ?Sized>(records: &mut [T], comparator: &C) {
    let mut swaps: usize = 0;
    for i in (1..records.len()).rev() {
        for j in 0..i {
            if comparator.compare(&records[j], &records[i]) == Ordering::Greater {
                records.swap(j, i);
                swaps += 1;
            }
        }
    }
    log::debug!("Exchange sort of {} records made {} swaps", records.len(), swaps);
}
