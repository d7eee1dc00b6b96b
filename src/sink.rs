use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::data::{Field, SalesRecord};
use crate::errors::SynthError;

/// Ordered consumer of emitted records.
pub trait RecordSink {
    /// Append one row.
    fn write_record(&mut self, record: &SalesRecord) -> Result<(), SynthError>;
    /// Flush pending output. Called once after the last row.
    fn finish(&mut self) -> Result<(), SynthError> {
        Ok(())
    }
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn write_record(&mut self, record: &SalesRecord) -> Result<(), SynthError> {
        (**self).write_record(record)
    }

    fn finish(&mut self) -> Result<(), SynthError> {
        (**self).finish()
    }
}

/// CSV writer that emits the schema header once, then one line per record.
///
/// Cells containing the delimiter, quotes, or line breaks are quoted.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    header_written: bool,
}

impl CsvSink<BufWriter<File>> {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, SynthError> {
        let file = File::create(path.as_ref())?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> CsvSink<W> {
    /// Wrap any writer; the header goes out with the first record.
    pub fn new(inner: W) -> Self {
        let writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::CRLF)
            .from_writer(inner);
        Self {
            writer,
            header_written: false,
        }
    }

    fn ensure_header(&mut self) -> Result<(), SynthError> {
        if !self.header_written {
            self.writer.write_record(Field::header())?;
            self.header_written = true;
        }
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W, SynthError> {
        self.ensure_header()?;
        self.writer
            .into_inner()
            .map_err(|err| SynthError::Io(err.into_error()))
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_record(&mut self, record: &SalesRecord) -> Result<(), SynthError> {
        self.ensure_header()?;
        self.writer.write_record(record.cells())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SynthError> {
        self.ensure_header()?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Collects records in memory, in emission order.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    records: Vec<SalesRecord>,
}

impl MemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records received so far, duplicates included.
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    /// Consume the sink and keep its records.
    pub fn into_records(self) -> Vec<SalesRecord> {
        self.records
    }
}

impl RecordSink for MemorySink {
    fn write_record(&mut self, record: &SalesRecord) -> Result<(), SynthError> {
        self.records.push(record.clone());
        Ok(())
    }
}
