//! This crate loads fixed-shape records from line oriented text files, sorts them with composable
//! comparators and writes them back in the same format.
//!
//! A record file starts with the number of records, followed by the fields of each record, one
//! field per line. Two record types are provided, [Book](book::Book) and
//! [Vehicle](vehicle::Vehicle); other types plug in by implementing [Record](record::Record).
//!
//! Records are ordered by a [Comparator](comparator::Comparator). Comparators are built from the
//! natural order of a record or of one of its fields, and combined by reversal and by chaining a
//! primary with a secondary comparator. Two in-place algorithms are available: the standard library
//! sort and a pairwise exchange sort, see [Algorithm](algorithm::Algorithm).
//!
//! # Examples
//! ```
//! use std::path::PathBuf;
//! use text_record_sort::algorithm::Algorithm;
//! use text_record_sort::comparator::{Comparator, Natural};
//! use text_record_sort::book::Book;
//! use text_record_sort::render::render_table;
//! use text_record_sort::sort::Sort;
//!
//! fn sort_books(input: PathBuf, output: PathBuf) -> Result<(), anyhow::Error> {
//!     let mut book_sort: Sort<Book> = Sort::new(input);
//!
//!     // reversed natural order, that is author and then title, both descending
//!     book_sort.with_comparator(Natural::new().reversed());
//!
//!     // the exchange sort is quadratic and does not keep equal records in their relative order
//!     book_sort.with_algorithm(Algorithm::Exchange);
//!
//!     // without an output the sorted records are only returned
//!     book_sort.with_output(output);
//!
//!     let books = book_sort.sort()?;
//!     print!("{}", render_table("Books", &books));
//!     Ok(())
//! }
//! ```
//!

pub(crate) mod config;

pub mod algorithm;
pub mod book;
pub mod comparator;
pub mod engine;
pub mod error;
pub mod field;
pub mod field_type;
pub mod order;
pub mod record;
pub mod record_file;
pub mod render;
pub mod sort;
pub mod value;
pub mod vehicle;
