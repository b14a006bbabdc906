//! The table itself: a header plus rows of cells.

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use super::Cell;
use crate::errors::CleanError;

/// Rows of cells addressed by column name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Read a CSV file with a header row.
    pub fn read_csv(path: impl AsRef<Path>) -> Result<Self, CleanError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Read CSV data with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CleanError> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').to_string())
            .collect();

        let mut rows = Vec::new();
        let mut record = StringRecord::new();
        while reader.read_record(&mut record)? {
            rows.push(record.iter().map(Cell::from_raw).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Write the table as CSV to a file, replacing it if it exists.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<(), CleanError> {
        let file = File::create(path)?;
        self.to_writer(file)
    }

    /// Write the table as CSV.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), CleanError> {
        let mut writer = WriterBuilder::new().from_writer(writer);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(Cell::render))?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Index of a column that must exist.
    pub fn require_column(&self, name: &str) -> Result<usize, CleanError> {
        self.column_index(name)
            .ok_or_else(|| CleanError::missing_column(name))
    }

    /// The cell at `row` in column `name`.
    pub fn cell(&self, row: usize, name: &str) -> Option<&Cell> {
        let index = self.column_index(name)?;
        self.rows.get(row).and_then(|r| r.get(index))
    }

    /// Replace every cell of a column with `f(row, cell)`.
    ///
    /// Returns `Ok(false)` without calling `f` when the column is absent.
    pub fn map_column<F>(&mut self, name: &str, mut f: F) -> Result<bool, CleanError>
    where
        F: FnMut(usize, Cell) -> Result<Cell, CleanError>,
    {
        let Some(index) = self.column_index(name) else {
            return Ok(false);
        };
        for (row_index, row) in self.rows.iter_mut().enumerate() {
            let cell = std::mem::replace(&mut row[index], Cell::Missing);
            row[index] = f(row_index, cell)?;
        }
        Ok(true)
    }

    /// Keep only the rows for which `keep` returns true. Returns the number dropped.
    pub fn retain_rows<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&[Cell]) -> bool,
    {
        let before = self.rows.len();
        self.rows.retain(|row| keep(row));
        before - self.rows.len()
    }

    /// Copy column `from` into column `to`, appending `to` if it does not exist.
    ///
    /// Returns false when `from` is absent.
    pub fn copy_column(&mut self, from: &str, to: &str) -> bool {
        let Some(source) = self.column_index(from) else {
            return false;
        };
        match self.column_index(to) {
            Some(target) => {
                for row in &mut self.rows {
                    row[target] = row[source].clone();
                }
            }
            None => {
                self.headers.push(to.to_string());
                for row in &mut self.rows {
                    let value = row[source].clone();
                    row.push(value);
                }
            }
        }
        true
    }

    /// Number of missing cells per column, in header order.
    pub fn missing_counts(&self) -> Vec<(String, usize)> {
        self.headers
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let missing = self
                    .rows
                    .iter()
                    .filter(|row| row[index].is_missing())
                    .count();
                (name.clone(), missing)
            })
            .collect()
    }
}
