//! Table of rows backed by delimited text files

use std::error::Error;
use std::fmt;
use std::io::{BufRead, Write};
use std::ops::Index;
use std::path::{Path, PathBuf};

use crate::codec::{join_row, split_row};
use crate::config::Config;
use crate::error::{Result, TableError};
use crate::store;

use super::row::Row;

/// Label used in errors for in-memory sources and sinks
const STREAM_PATH: &str = "<stream>";

/// An ordered collection of rows plus the settings used to load and save them.
///
/// Rows may have different lengths; [`Table::expand`] pads them to a common
/// width. Out of range reads return fallback values instead of failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Row>,
    path: Option<PathBuf>,
    config: Config,
}

impl Table {
    /// Create an empty table with the default separator "," and comment prefix "#"
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with the given settings
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    // File IO

    /// Load a file with the current separator and comment prefix.
    ///
    /// Replaces the current rows and sets the current path. Returns false and
    /// leaves the table untouched if the file cannot be read.
    pub fn load(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        report(self.try_load(path), "load", path)
    }

    /// Load a file after setting the separator and comment prefix
    pub fn load_with(
        &mut self,
        path: impl AsRef<Path>,
        separator: impl Into<String>,
        comment_prefix: impl Into<String>,
    ) -> bool {
        self.config.separator = separator.into();
        self.config.comment_prefix = comment_prefix.into();
        self.load(path)
    }

    /// Reload the current file
    pub fn reload(&mut self) -> bool {
        match self.path.clone() {
            Some(path) => self.load(path),
            None => report(Err(TableError::NoPath), "reload", Path::new("")),
        }
    }

    pub fn try_load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let config = self.config.clone();
        let rows = store::load_file(path, &config)?;
        self.rows = rows;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Save to a file with the current separator and quoting.
    ///
    /// Creates missing directories and sets the current path.
    pub fn save(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        report(self.try_save(path), "save", path)
    }

    /// Save to a file after setting the quoting flag and separator
    pub fn save_with(
        &mut self,
        path: impl AsRef<Path>,
        quote: bool,
        separator: impl Into<String>,
    ) -> bool {
        self.config.quote_fields = quote;
        self.config.separator = separator.into();
        self.save(path)
    }

    /// Save to the current file
    pub fn save_current(&mut self) -> bool {
        match self.path.clone() {
            Some(path) => self.save(path),
            None => report(Err(TableError::NoPath), "save", Path::new("")),
        }
    }

    pub fn try_save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let config = self.config.clone();
        store::save_file(path, &self.rows, &config)?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Create an empty file, clearing the table and setting the current path
    pub fn create_file(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let result = store::save_file(path, &[], &self.config).map(|()| {
            self.rows.clear();
            self.path = Some(path.to_path_buf());
        });
        report(result, "create", path)
    }

    /// Replace the rows with those read from a line source
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> Result<()> {
        let config = self.config.clone();
        self.rows = store::read_rows(reader, &config, Path::new(STREAM_PATH))?;
        Ok(())
    }

    /// Write every row to a sink, one per line
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        store::write_rows(writer, &self.rows, &self.config, Path::new(STREAM_PATH))
    }

    // Data IO

    /// Replace the rows
    pub fn load_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
    }

    /// Replace the rows with raw field lists
    pub fn load_fields(&mut self, rows: Vec<Vec<String>>) {
        self.rows = rows.into_iter().map(Row::from).collect();
    }

    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn add_empty_row(&mut self) {
        self.rows.push(Row::new());
    }

    /// Replace the row at `index`, adding empty rows to reach it
    pub fn set_row(&mut self, index: usize, row: Row) {
        self.expand_rows(index + 1);
        self.rows[index] = row;
    }

    /// Get a copy of a row, or an empty row if out of range
    pub fn get_row(&self, index: usize) -> Row {
        self.rows.get(index).cloned().unwrap_or_default()
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// Insert a row at `index`, adding empty rows to reach it
    pub fn insert_row(&mut self, index: usize, row: Row) {
        self.expand_rows(index);
        self.rows.insert(index, row);
    }

    /// Remove a row; out of range indices are ignored
    pub fn remove_row(&mut self, index: usize) -> Option<Row> {
        if index < self.rows.len() {
            Some(self.rows.remove(index))
        } else {
            None
        }
    }

    /// Grow to at least `rows` rows with at least `cols` fields each.
    ///
    /// Existing rows and fields are kept; new cells are empty strings.
    pub fn expand(&mut self, rows: usize, cols: usize) {
        self.expand_rows(rows);
        for row in &mut self.rows {
            row.expand(cols);
        }
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    fn expand_rows(&mut self, rows: usize) {
        if self.rows.len() < rows {
            self.rows.resize_with(rows, Row::new);
        }
    }

    /// Make sure `row` exists with at least `cols` fields
    fn expand_row(&mut self, row: usize, cols: usize) -> &mut Row {
        self.expand_rows(row + 1);
        let target = &mut self.rows[row];
        target.expand(cols);
        target
    }

    fn last_row_mut(&mut self) -> &mut Row {
        if self.rows.is_empty() {
            self.rows.push(Row::new());
        }
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    // Data access

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of fields in a row, or 0 if the row does not exist
    pub fn num_cols(&self, row: usize) -> usize {
        self.rows.get(row).map(Row::len).unwrap_or(0)
    }

    pub fn get_int(&self, row: usize, col: usize) -> i32 {
        self.rows.get(row).map(|r| r.get_int(col)).unwrap_or(0)
    }

    pub fn get_float(&self, row: usize, col: usize) -> f32 {
        self.rows.get(row).map(|r| r.get_float(col)).unwrap_or(0.0)
    }

    pub fn get_string(&self, row: usize, col: usize) -> String {
        self.rows
            .get(row)
            .map(|r| r.get_string(col))
            .unwrap_or_default()
    }

    pub fn get_bool(&self, row: usize, col: usize) -> bool {
        self.rows.get(row).map(|r| r.get_bool(col)).unwrap_or(false)
    }

    /// Append a field to the last row, creating one if the table is empty
    pub fn add_int(&mut self, value: i32) {
        self.last_row_mut().add_int(value);
    }

    pub fn add_float(&mut self, value: f32) {
        self.last_row_mut().add_float(value);
    }

    pub fn add_string(&mut self, value: impl Into<String>) {
        self.last_row_mut().add_string(value);
    }

    pub fn add_bool(&mut self, value: bool) {
        self.last_row_mut().add_bool(value);
    }

    /// Set a field, expanding rows and columns to fit
    pub fn set_int(&mut self, row: usize, col: usize, value: i32) {
        self.expand_row(row, col + 1).set_int(col, value);
    }

    pub fn set_float(&mut self, row: usize, col: usize, value: f32) {
        self.expand_row(row, col + 1).set_float(col, value);
    }

    pub fn set_string(&mut self, row: usize, col: usize, value: impl Into<String>) {
        self.expand_row(row, col + 1).set_string(col, value);
    }

    pub fn set_bool(&mut self, row: usize, col: usize, value: bool) {
        self.expand_row(row, col + 1).set_bool(col, value);
    }

    /// Print the rows to stdout
    pub fn print(&self) {
        print!("{}", self);
    }

    // Raw data access

    pub fn data(&self) -> &[Row] {
        &self.rows
    }

    pub fn data_mut(&mut self) -> &mut Vec<Row> {
        &mut self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Row> {
        self.rows.iter_mut()
    }

    pub fn first(&self) -> Option<&Row> {
        self.rows.first()
    }

    pub fn last(&self) -> Option<&Row> {
        self.rows.last()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // Util

    /// Trim leading and trailing whitespace from every field
    pub fn trim(&mut self) {
        for row in &mut self.rows {
            row.trim();
        }
    }

    /// Split a row string with the current separator
    pub fn from_row_string(&self, text: &str) -> Vec<String> {
        split_row(text, &self.config.separator)
    }

    /// Join fields with the current separator, without quoting
    pub fn to_row_string<S: AsRef<str>>(&self, fields: &[S]) -> String {
        join_row(fields, &self.config.separator, false)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn field_separator(&self) -> &str {
        &self.config.separator
    }

    pub fn comment_prefix(&self) -> &str {
        &self.config.comment_prefix
    }

    pub fn quote_fields(&self) -> bool {
        self.config.quote_fields
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn set_field_separator(&mut self, separator: impl Into<String>) {
        self.config.separator = separator.into();
    }

    pub fn set_comment_prefix(&mut self, prefix: impl Into<String>) {
        self.config.comment_prefix = prefix.into();
    }

    pub fn set_quote_fields(&mut self, quote: bool) {
        self.config.quote_fields = quote;
    }
}

/// Log a failed IO operation and collapse the result to a success flag
fn report(result: Result<()>, action: &str, path: &Path) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(path = %path.display(), "{} failed: {}", action, error_chain(&e));
            false
        }
    }
}

fn error_chain(e: &TableError) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(
                f,
                "{}",
                row.to_row_string(&self.config.separator, self.config.quote_fields)
            )?;
        }
        Ok(())
    }
}

impl Index<usize> for Table {
    type Output = Row;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl From<Table> for Vec<Row> {
    fn from(table: Table) -> Self {
        table.rows
    }
}

impl IntoIterator for Table {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a mut Table {
    type Item = &'a mut Row;
    type IntoIter = std::slice::IterMut<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter_mut()
    }
}
