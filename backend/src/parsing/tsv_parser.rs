use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{FovError, FovResult};

/// Index of the header row in a raw catalog table.
pub const HEADER_ROW: usize = 1;
/// Index of the first data row in a raw catalog table.
pub const FIRST_DATA_ROW: usize = 2;

/// Rows of text fields exactly as read from the source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The header row (index 1).
    pub fn header(&self) -> FovResult<&[String]> {
        self.rows
            .get(HEADER_ROW)
            .map(Vec::as_slice)
            .ok_or(FovError::MissingHeader)
    }

    /// Position of `name` in the header row.
    pub fn column_index(&self, name: &str) -> FovResult<usize> {
        self.header()?
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| FovError::column_not_found(name))
    }

    /// Data rows with their raw-table index (starting at 2).
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.rows
            .iter()
            .enumerate()
            .skip(FIRST_DATA_ROW)
            .map(|(i, row)| (i, row.as_slice()))
    }

    pub fn data_row_count(&self) -> usize {
        self.rows.len().saturating_sub(FIRST_DATA_ROW)
    }
}

/// Parse delimited text from any reader.
///
/// Every physical line becomes one row, so raw-table indexes always match
/// line numbers. A blank line is kept as an empty row because the csv reader
/// would otherwise drop it. Quoted fields cannot span lines.
pub fn parse_delimited<R: Read>(reader: R, delimiter: u8) -> FovResult<RawTable> {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).delimiter(delimiter).flexible(true);

    let mut rows = Vec::new();
    for line in BufReader::new(reader).split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if line.is_empty() {
            rows.push(Vec::new());
            continue;
        }

        let row = match builder.from_reader(line.as_slice()).records().next() {
            Some(record) => record?.iter().map(str::to_string).collect(),
            None => Vec::new(),
        };
        rows.push(row);
    }

    Ok(RawTable::new(rows))
}

pub fn parse_delimited_str(content: &str, delimiter: u8) -> FovResult<RawTable> {
    parse_delimited(content.as_bytes(), delimiter)
}

/// Parse tab-separated text.
pub fn parse_tsv_str(content: &str) -> FovResult<RawTable> {
    parse_delimited_str(content, b'\t')
}

/// Read a whole delimited file; the handle is closed before returning.
pub fn read_delimited(path: &Path, delimiter: u8) -> FovResult<RawTable> {
    let file = File::open(path)?;
    let table = parse_delimited(file, delimiter)?;
    debug!(
        "Read {} rows ({} data rows) from {}",
        table.rows().len(),
        table.data_row_count(),
        path.display()
    );
    Ok(table)
}

/// Read a tab-separated catalog file.
pub fn read_tsv(path: &Path) -> FovResult<RawTable> {
    read_delimited(path, b'\t')
}
