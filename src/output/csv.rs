//! Delimited text output

use std::io::Write;

use anyhow::Result;

use crate::model::Table;

use super::OutputFormatter;

/// Writes rows back as delimited text using the table's separator and quoting
pub struct CsvOutput;

impl OutputFormatter for CsvOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        table.write_to(writer)?;
        Ok(())
    }
}
