use std::path::PathBuf;

use crate::algorithm::Algorithm;
use crate::comparator::{Comparator, Natural, Reversed};
use crate::config::Config;
use crate::error::RecordResult;
use crate::order::Order;
use crate::record::Record;
use crate::record_file::{read_records, write_records};

/// Load records from a file, sort them and optionally write them to another file.
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use text_record_sort::algorithm::Algorithm;
/// use text_record_sort::book::{self, Book};
/// use text_record_sort::sort::Sort;
///
/// fn sort_books(input: PathBuf, output: PathBuf) -> Result<Vec<Book>, anyhow::Error> {
///     let mut book_sort: Sort<Book> = Sort::new(input);
///     // author, then title, with the exchange sort
///     book_sort.with_comparator(book::by_author_then_title());
///     book_sort.with_algorithm(Algorithm::Exchange);
///     // persist the sorted records, by default they are only returned
///     book_sort.with_output(output);
///     Ok(book_sort.sort()?)
/// }
/// ```
pub struct Sort<T: Record> {
    input: PathBuf,
    output: Option<PathBuf>,
    comparator: Option<Box<dyn Comparator<T>>>,
    algorithm: Algorithm,
    order: Order,
}

impl<T: Record + 'static> Sort<T> {
    /// Create a default Sort definition.
    ///
    /// * records are sorted in their natural order
    /// * the [Algorithm::General] sort is used
    /// * default Order is Asc
    /// * nothing is written
    pub fn new(input: PathBuf) -> Sort<T> {
        Sort {
            input,
            output: None,
            comparator: Some(Box::new(Natural::new())),
            algorithm: Algorithm::General,
            order: Order::Asc,
        }
    }

    /// Write the records to `output` after sorting
    pub fn with_output(&mut self, output: PathBuf) {
        self.output = Some(output);
    }

    /// Sort with `comparator` instead of the natural order
    pub fn with_comparator<C: Comparator<T> + 'static>(&mut self, comparator: C) {
        self.comparator = Some(Box::new(comparator));
    }

    /// Keep the records in source order
    pub fn with_source_order(&mut self) {
        self.comparator = None;
    }

    /// Set the sort algorithm. The default is [Algorithm::General]
    pub fn with_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Set the sort direction. The default is [Order::Asc]
    pub fn with_order(&mut self, order: Order) {
        self.order = order;
    }

    fn create_config(&self) -> Config {
        Config::new(
            self.input.clone(),
            self.output.clone(),
            self.algorithm,
            self.order,
        )
    }

    /// Load, sort and, when an output is set, write the records. The sorted records are returned.
    pub fn sort(&self) -> RecordResult<Vec<T>> {
        let mut records = self.load()?;
        self.order(&mut records);
        self.save(&records)?;
        Ok(records)
    }

    /// Read the records from the input file.
    pub fn load(&self) -> RecordResult<Vec<T>> {
        let config = self.create_config();
        read_records(config.input())
    }

    /// Reorder `records` in place.
    pub fn order(&self, records: &mut [T]) {
        let config = self.create_config();
        let comparator = match &self.comparator {
            Some(comparator) => comparator,
            None => {
                log::info!("Keeping {} records in source order", records.len());
                return;
            }
        };

        log::info!("Start {} sort of {} records, order: {:?}", config.algorithm(), records.len(), config.order());
        match config.order() {
            Order::Asc => {
                config.algorithm().sort(records, comparator)
            }
            Order::Desc => {
                config.algorithm().sort(records, &Reversed::new(comparator))
            }
        }
        log::info!("Finish {} sort", config.algorithm());
    }

    /// Write `records` to the output file, if one is set.
    pub fn save(&self, records: &[T]) -> RecordResult<()> {
        let config = self.create_config();
        match config.output() {
            Some(output) => {
                write_records(output, records)
            }
            None => {
                Ok(())
            }
        }
    }
}
