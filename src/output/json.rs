//! JSON output format

use std::io::Write;

use anyhow::Result;

use crate::model::Table;

use super::OutputFormatter;

/// JSON output formatter: an array of rows, each an array of strings
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, table.data())?;
        } else {
            serde_json::to_writer(&mut *writer, table.data())?;
        }
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Row;

    #[test]
    fn test_compact_json() {
        let mut table = Table::new();
        table.add_row(Row::from_fields(["a", "\"q\""]));
        table.add_row(Row::from_fields([""]));

        let mut out = Vec::new();
        JsonOutput::compact().render(&table, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[[\"a\",\"\\\"q\\\"\"],[\"\"]]\n"
        );
    }

    #[test]
    fn test_pretty_json_parses_back() {
        let mut table = Table::new();
        table.set_string(1, 1, "x");

        let mut out = Vec::new();
        JsonOutput::new().render(&table, &mut out).unwrap();
        let parsed: Vec<Vec<String>> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, vec![vec![], vec!["".to_string(), "x".to_string()]]);
    }
}
