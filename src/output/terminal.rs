//! Boxed terminal output

use std::io::Write;

use anyhow::Result;
use tabled::builder::Builder;
use tabled::settings::Style;
use termcolor::{Ansi, Color, ColorSpec, WriteColor};

use crate::model::Table;

use super::OutputFormatter;

/// Terminal output drawn as a grid, one line per row
pub struct TerminalOutput {
    color: bool,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self { color: false }
    }

    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    fn write_summary(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        let widest = table.iter().map(|r| r.len()).max().unwrap_or(0);
        let summary = match table.path() {
            Some(path) => format!(
                "{} ({} rows, up to {} columns)",
                path.display(),
                table.num_rows(),
                widest
            ),
            None => format!("{} rows, up to {} columns", table.num_rows(), widest),
        };

        if self.color {
            let mut out = Ansi::new(writer);
            out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
            write!(out, "{}", summary)?;
            out.reset()?;
            writeln!(out)?;
        } else {
            writeln!(writer, "{}", summary)?;
        }
        Ok(())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TerminalOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        self.write_summary(table, writer)?;

        if table.is_empty() {
            writeln!(writer, "(empty table)")?;
            return Ok(());
        }

        writeln!(writer, "{}", build_grid(table))?;
        Ok(())
    }
}

/// Build a grid with a leading row number column; ragged rows are padded for
/// display only
fn build_grid(table: &Table) -> String {
    let widest = table.iter().map(|r| r.len()).max().unwrap_or(0);
    let mut builder = Builder::default();

    for (i, row) in table.iter().enumerate() {
        let mut record = Vec::with_capacity(widest + 1);
        record.push(i.to_string());
        record.extend(row.iter().cloned());
        record.resize(widest + 1, String::new());
        builder.push_record(record);
    }

    let mut grid = builder.build();
    grid.with(Style::modern());
    grid.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Row;

    fn render(table: &Table, color: bool) -> String {
        let mut out = Vec::new();
        TerminalOutput::with_color(color)
            .render(table, &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_renders_ragged_rows() {
        let mut table = Table::new();
        table.add_row(Row::from_fields(["name", "score"]));
        table.add_row(Row::from_fields(["ada"]));

        let output = render(&table, false);
        assert!(output.starts_with("2 rows, up to 2 columns\n"));
        assert!(output.contains("name"));
        assert!(output.contains("score"));
        assert!(output.contains("ada"));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_empty_table() {
        let output = render(&Table::new(), false);
        assert_eq!(output, "0 rows, up to 0 columns\n(empty table)\n");
    }

    #[test]
    fn test_colored_summary() {
        let mut table = Table::new();
        table.add_string("x");
        let output = render(&table, true);
        assert!(output.starts_with('\u{1b}'));
        assert!(output.contains("1 rows, up to 1 columns"));
    }
}
