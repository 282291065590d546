//! A single row of string fields with typed accessors

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::codec::{join_row, split_row};

/// A row in the table.
///
/// Fields are stored as text and reinterpreted on access. Rows may have any
/// number of fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row from field values
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a row string into a row
    pub fn from_row_string(text: &str, separator: &str) -> Self {
        Self {
            fields: split_row(text, separator),
        }
    }

    /// Join the fields into a row string
    pub fn to_row_string(&self, separator: &str, quote: bool) -> String {
        join_row(&self.fields, separator, quote)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut Vec<String> {
        &mut self.fields
    }

    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.fields.iter()
    }

    /// Get a field by column index
    pub fn get(&self, col: usize) -> Option<&str> {
        self.fields.get(col).map(String::as_str)
    }

    /// Get a field as a string, or "" if out of range
    pub fn get_string(&self, col: usize) -> String {
        self.get(col).unwrap_or_default().to_string()
    }

    /// Get a field as an integer, or 0 if missing or not numeric
    pub fn get_int(&self, col: usize) -> i32 {
        self.get(col).map(parse_int).unwrap_or(0)
    }

    /// Get a field as a float, or 0.0 if missing or not numeric
    pub fn get_float(&self, col: usize) -> f32 {
        self.get(col).map(parse_float).unwrap_or(0.0)
    }

    /// Get a field as a boolean, or false if missing
    pub fn get_bool(&self, col: usize) -> bool {
        self.get(col).map(parse_bool).unwrap_or(false)
    }

    /// Set a field, expanding the row to fit
    pub fn set_string(&mut self, col: usize, value: impl Into<String>) {
        self.expand(col + 1);
        self.fields[col] = value.into();
    }

    pub fn set_int(&mut self, col: usize, value: i32) {
        self.set_string(col, value.to_string());
    }

    pub fn set_float(&mut self, col: usize, value: f32) {
        self.set_string(col, value.to_string());
    }

    pub fn set_bool(&mut self, col: usize, value: bool) {
        self.set_string(col, value.to_string());
    }

    /// Append a field to the end of the row
    pub fn add_string(&mut self, value: impl Into<String>) {
        self.fields.push(value.into());
    }

    pub fn add_int(&mut self, value: i32) {
        self.add_string(value.to_string());
    }

    pub fn add_float(&mut self, value: f32) {
        self.add_string(value.to_string());
    }

    pub fn add_bool(&mut self, value: bool) {
        self.add_string(value.to_string());
    }

    /// Insert a field, padding with empty fields if `col` is past the end
    pub fn insert_field(&mut self, col: usize, value: impl Into<String>) {
        self.expand(col);
        self.fields.insert(col, value.into());
    }

    /// Remove a field; out of range indices are ignored
    pub fn remove_field(&mut self, col: usize) -> Option<String> {
        if col < self.fields.len() {
            Some(self.fields.remove(col))
        } else {
            None
        }
    }

    /// Grow to at least `cols` fields, filling with empty strings.
    /// Never shrinks.
    pub fn expand(&mut self, cols: usize) {
        if self.fields.len() < cols {
            self.fields.resize(cols, String::new());
        }
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Trim leading and trailing whitespace from every field
    pub fn trim(&mut self) {
        for field in &mut self.fields {
            let trimmed = field.trim();
            if trimmed.len() != field.len() {
                *field = trimmed.to_string();
            }
        }
    }
}

fn parse_int(s: &str) -> i32 {
    let trimmed = s.trim();
    if let Ok(i) = trimmed.parse::<i32>() {
        return i;
    }
    // "3.7" reads as 3; out of range values saturate
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => f.trunc() as i32,
        _ => 0,
    }
}

fn parse_float(s: &str) -> f32 {
    s.trim().parse::<f32>().unwrap_or(0.0)
}

fn parse_bool(s: &str) -> bool {
    let trimmed = s.trim();
    trimmed.eq_ignore_ascii_case("true") || parse_int(trimmed) != 0
}

impl Index<usize> for Row {
    type Output = String;

    fn index(&self, col: usize) -> &Self::Output {
        &self.fields[col]
    }
}

impl From<Vec<String>> for Row {
    fn from(fields: Vec<String>) -> Self {
        Self { fields }
    }
}

impl From<Row> for Vec<String> {
    fn from(row: Row) -> Self {
        row.fields
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_fields(iter)
    }
}

impl IntoIterator for Row {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_getters() {
        let row = Row::from_fields(["42", " 7 ", "3.9", "-2.5", "abc", "true", "FALSE", "1"]);
        assert_eq!(row.get_int(0), 42);
        assert_eq!(row.get_int(1), 7);
        assert_eq!(row.get_int(2), 3);
        assert_eq!(row.get_int(3), -2);
        assert_eq!(row.get_int(4), 0);
        assert_eq!(row.get_float(2), 3.9);
        assert_eq!(row.get_float(4), 0.0);
        assert!(row.get_bool(5));
        assert!(!row.get_bool(6));
        assert!(row.get_bool(7));
        assert!(row.get_bool(0));
        assert!(!row.get_bool(4));
    }

    #[test]
    fn test_out_of_range_fallbacks() {
        let row = Row::from_fields(["x"]);
        assert_eq!(row.get_string(5), "");
        assert_eq!(row.get_int(5), 0);
        assert_eq!(row.get_float(5), 0.0);
        assert!(!row.get_bool(5));
        assert_eq!(row.get(5), None);
    }

    #[test]
    fn test_int_saturates() {
        let row = Row::from_fields(["1e20", "-1e20", "nan"]);
        assert_eq!(row.get_int(0), i32::MAX);
        assert_eq!(row.get_int(1), i32::MIN);
        assert_eq!(row.get_int(2), 0);
    }

    #[test]
    fn test_setters_expand() {
        let mut row = Row::new();
        row.set_int(2, 5);
        assert_eq!(row.fields(), &["", "", "5"]);

        row.set_bool(0, true);
        row.set_float(1, 1.5);
        assert_eq!(row.fields(), &["true", "1.5", "5"]);
        assert!(row.get_bool(0));
        assert_eq!(row.get_float(1), 1.5);
    }

    #[test]
    fn test_adders() {
        let mut row = Row::new();
        row.add_string("name");
        row.add_int(-3);
        row.add_float(0.25);
        row.add_bool(false);
        assert_eq!(row.fields(), &["name", "-3", "0.25", "false"]);
    }

    #[test]
    fn test_insert_and_remove() {
        let mut row = Row::from_fields(["a", "c"]);
        row.insert_field(1, "b");
        assert_eq!(row.fields(), &["a", "b", "c"]);

        row.insert_field(5, "z");
        assert_eq!(row.fields(), &["a", "b", "c", "", "", "z"]);

        assert_eq!(row.remove_field(0), Some("a".to_string()));
        assert_eq!(row.remove_field(10), None);
        assert_eq!(row.len(), 5);
    }

    #[test]
    fn test_expand_never_shrinks() {
        let mut row = Row::from_fields(["a", "b", "c"]);
        row.expand(2);
        assert_eq!(row.len(), 3);
        row.expand(5);
        assert_eq!(row.fields(), &["a", "b", "c", "", ""]);
    }

    #[test]
    fn test_trim() {
        let mut row = Row::from_fields(["  a ", "b", "\tc\t"]);
        row.trim();
        assert_eq!(row.fields(), &["a", "b", "c"]);
    }

    #[test]
    fn test_row_strings() {
        let row = Row::from_row_string("1;\"x;y\";z", ";");
        assert_eq!(row.fields(), &["1", "x;y", "z"]);
        assert_eq!(row.to_row_string(";", true), "\"1\";\"x;y\";\"z\"");
        assert_eq!(row.to_row_string(",", false), "1,x;y,z");
    }
}
