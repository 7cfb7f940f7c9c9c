use indexmap::IndexMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One input row: field name to raw text value, in header order.
///
/// A field the row ran out of values for is `None`.
pub type Record = IndexMap<String, Option<String>>;

/// Options controlling how the delimited input is parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    pub delimiter: u8,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl ReaderOptions {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("Failed to open input file {path}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed input in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("line {line}: found {found} fields, but the header has {expected}")]
    ExtraFields {
        line: u64,
        expected: usize,
        found: usize,
    },
}

/// Read every record of a delimited file whose first row is the header
pub fn read_records(path: &Path, options: &ReaderOptions) -> Result<Vec<Record>, ReadError> {
    let file = File::open(path).map_err(|source| ReadError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_records(file, options).map_err(|source| ReadError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), records = records.len(), "read input records");
    Ok(records)
}

/// Parse records from any reader; the header row names the fields.
///
/// Short rows are padded with `None`; rows longer than the header are rejected.
pub fn parse_records<R: Read>(reader: R, options: &ReaderOptions) -> Result<Vec<Record>, ParseError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut records = Vec::new();

    for row in rdr.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        if row.len() > headers.len() {
            return Err(ParseError::ExtraFields {
                line,
                expected: headers.len(),
                found: row.len(),
            });
        }
        if row.len() < headers.len() {
            tracing::warn!(line, found = row.len(), expected = headers.len(), "short row, missing fields set to null");
        }

        let mut record = Record::with_capacity(headers.len());
        for (index, name) in headers.iter().enumerate() {
            // a repeated header name keeps its first position, last value wins
            record.insert(name.to_string(), row.get(index).map(str::to_string));
        }
        records.push(record);
    }

    Ok(records)
}
