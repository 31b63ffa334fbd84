use crate::error::PaletteError;
use crate::ordered::unique_in_order;
use anyhow::{anyhow, Context, Result};
use csv::ReaderBuilder;
use std::io::{self, Read};

/// In-memory table of string cells with named columns
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Table {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Position of the column named exactly `name`
    pub fn column_index(&self, name: &str) -> Result<usize, PaletteError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| PaletteError::MissingColumn {
                column: name.to_string(),
                available: self.headers.clone(),
            })
    }

    /// Values of a column, in row order. Short rows yield an empty cell.
    pub fn column(&self, name: &str) -> Result<Vec<&str>, PaletteError> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| cell(row, idx)).collect())
    }

    /// Distinct values of a column in order of first appearance
    pub fn distinct_in_order(&self, name: &str) -> Result<Vec<String>, PaletteError> {
        let values: Vec<String> = self.column(name)?.into_iter().map(str::to_string).collect();
        Ok(unique_in_order(&values))
    }
}

pub(crate) fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

pub fn read_csv_from_stdin() -> Result<Table> {
    read_csv(io::stdin())
}

pub fn read_csv<R: Read>(reader: R) -> Result<Table> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = reader
        .headers()
        .context("Failed to read CSV headers")?
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.context("Failed to read CSV record")?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    if rows.is_empty() {
        return Err(anyhow!("CSV must contain at least one data row"));
    }

    Ok(Table { headers, rows })
}
