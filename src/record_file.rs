//! Line oriented record files.
//!
//! A record file starts with a line holding the number of records, followed by the fields of
//! every record, one field per line, in the order given by [Record::fields].
//! ```text
//! 2
//! 1
//! Rings
//! Tolkien
//! 2
//! Hobbit
//! Tolkien
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{RecordError, RecordResult};
use crate::field::Field;
use crate::field_type::FieldType;
use crate::record::Record;
use crate::value::Value;

// upper bound for preallocation, the count line is not trusted
const MAX_INITIAL_CAPACITY: usize = 4096;

/// Read records from a line oriented source.
pub struct RecordReader<R: BufRead> {
    reader: R,
    line: String,
    line_number: usize,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R) -> RecordReader<R> {
        RecordReader {
            reader,
            line: String::new(),
            line_number: 0,
        }
    }

    fn next_line(&mut self, field_def: &Field) -> RecordResult<Value> {
        self.line.clear();
        let length = self.reader.read_line(&mut self.line)?;
        self.line_number += 1;
        if length == 0 {
            return Err(RecordError::unexpected_end(self.line_number, field_def.name()));
        }

        let line = self.line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(&self.line);
        Value::new(line, self.line_number, field_def)
    }

    /// Read the leading record count.
    pub fn read_count(&mut self) -> RecordResult<usize> {
        let count_def = Field::new("count", FieldType::Integer);
        match self.next_line(&count_def)? {
            Value::Integer { i } => {
                usize::try_from(i).map_err(|_| RecordError::NegativeCount { count: i })
            }
            _ => {
                Err(RecordError::malformed_field(self.line_number, count_def.name(), &self.line))
            }
        }
    }

    /// Read the fields of one record and build it.
    pub fn read_record<T: Record>(&mut self, fields: &[Field]) -> RecordResult<T> {
        let mut values = Vec::with_capacity(fields.len());
        for field_def in fields {
            values.push(self.next_line(field_def)?);
        }
        T::from_values(values)
    }

    /// Read the record count, then exactly that many records, in source order.
    pub fn read_all<T: Record>(&mut self) -> RecordResult<Vec<T>> {
        let count = self.read_count()?;
        let fields = T::fields();
        let mut records = Vec::with_capacity(count.min(MAX_INITIAL_CAPACITY));
        for _ in 0..count {
            records.push(self.read_record(&fields)?);
        }
        Ok(records)
    }
}

/// Write records to a line oriented destination.
pub struct RecordWriter<W: Write> {
    writer: W,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(writer: W) -> RecordWriter<W> {
        RecordWriter {
            writer,
        }
    }

    /// Write the record count, then every record in slice order, and flush.
    pub fn write_all<T: Record>(&mut self, records: &[T]) -> RecordResult<()> {
        writeln!(self.writer, "{}", records.len())?;
        for record in records {
            for value in record.to_values() {
                writeln!(self.writer, "{}", value.to_line())?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Read all records from the file at `path`.
///
/// Fails with [RecordError::SourceUnavailable] when the file can not be opened. Any malformed
/// or missing field fails the whole read, no partial result is returned.
pub fn read_records<T: Record>(path: &Path) -> RecordResult<Vec<T>> {
    let file = File::open(path)
        .map_err(|e| RecordError::source_unavailable(path, e))?;
    let records = RecordReader::new(BufReader::new(file)).read_all()?;
    log::info!("Read {} {} records from {}", records.len(), T::NAME, path.display());
    Ok(records)
}

/// Write `records` to the file at `path`, replacing its content.
///
/// Fails with [RecordError::DestinationUnavailable] when the file can not be created.
pub fn write_records<T: Record>(path: &Path, records: &[T]) -> RecordResult<()> {
    let file = File::create(path)
        .map_err(|e| RecordError::destination_unavailable(path, e))?;
    RecordWriter::new(BufWriter::new(file)).write_all(records)?;
    log::info!("Wrote {} {} records to {}", records.len(), T::NAME, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Book;
    use crate::vehicle::Vehicle;

    const BOOKS: &str = "2\n1\nRings\nTolkien\n2\nHobbit\nTolkien\n";

    const VEHICLES: &str = "2\n\
        ----\nZastava 101\n1999\nBenzin\n52.0\nCrvena\n231000\n\
        ----\nYugo\n1985\nBenzin\n40.0\nPlava\n500000\n";

    fn read<T: Record>(content: &str) -> RecordResult<Vec<T>> {
        RecordReader::new(content.as_bytes()).read_all()
    }

    fn write<T: Record>(records: &[T]) -> String {
        let mut buffer = Vec::new();
        RecordWriter::new(&mut buffer).write_all(records).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_read_books() {
        let books: Vec<Book> = read(BOOKS).unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].to_string(), "1 Tolkien: Rings");
        assert_eq!(books[1].to_string(), "2 Tolkien: Hobbit");
    }

    #[test]
    fn test_read_vehicles() {
        let vehicles: Vec<Vehicle> = read(VEHICLES).unwrap();
        assert_eq!(vehicles.len(), 2);
        assert_eq!(vehicles[0].model(), "Zastava 101");
        assert_eq!(vehicles[0].engine().power(), 52.0);
        assert_eq!(vehicles[1].odometer(), 500_000);
    }

    #[test]
    fn test_read_crlf() {
        let books: Vec<Book> = read("1\r\n7\r\nDune\r\nHerbert\r\n").unwrap();
        assert_eq!(books[0].title(), "Dune");
        assert_eq!(books[0].author(), "Herbert");
    }

    #[test]
    fn test_read_ignores_trailing_lines() {
        let books: Vec<Book> = read("1\n7\nDune\nHerbert\n8\nEmma\n").unwrap();
        assert_eq!(books.len(), 1);
    }

    #[test]
    fn test_read_empty_collection() {
        let books: Vec<Book> = read("0\n").unwrap();
        assert!(books.is_empty());
    }

    #[test]
    fn test_read_malformed_year() {
        let content = VEHICLES.replace("1985", "nineteen eighty five");
        match read::<Vehicle>(&content) {
            Err(RecordError::MalformedField { line, field, .. }) => {
                assert_eq!(line, 11);
                assert_eq!(field, "year");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_read_negative_count() {
        assert!(matches!(read::<Book>("-1\n"), Err(RecordError::NegativeCount { count: -1 })));
    }

    #[test]
    fn test_read_malformed_count() {
        match read::<Book>(" two \n1\nRings\nTolkien\n") {
            Err(RecordError::MalformedField { line, field, value }) => {
                assert_eq!(line, 1);
                assert_eq!(field, "count");
                assert_eq!(value, " two ");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(read::<Book>(" 1 \n1\nRings\nTolkien\n").unwrap().len(), 1);
    }

    #[test]
    fn test_read_truncated() {
        match read::<Book>("2\n1\nRings\nTolkien\n2\nHobbit\n") {
            Err(RecordError::UnexpectedEnd { line, field }) => {
                assert_eq!(line, 7);
                assert_eq!(field, "author");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(read::<Book>(""), Err(RecordError::UnexpectedEnd { line: 1, .. })));
    }

    #[test]
    fn test_write_books() {
        let books: Vec<Book> = read(BOOKS).unwrap();
        assert_eq!(write(&books), BOOKS);
    }

    #[test]
    fn test_write_vehicles_replaces_skipped_lines() {
        let vehicles: Vec<Vehicle> = read(VEHICLES).unwrap();
        let written = write(&vehicles);
        assert_eq!(written, VEHICLES.replace("----", ""));
        let reread: Vec<Vehicle> = read(&written).unwrap();
        assert_eq!(reread.len(), 2);
        assert_eq!(reread[1].to_values(), vehicles[1].to_values());
    }
}
