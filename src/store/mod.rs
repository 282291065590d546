//! Reading and writing tables as line-delimited text

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Result, TableError};
use crate::model::Row;

/// Read rows from a line source.
///
/// Lines starting with the comment prefix are skipped before splitting. Blank
/// lines become a row with one empty field.
pub fn read_rows<R: BufRead>(reader: R, config: &Config, path: &Path) -> Result<Vec<Row>> {
    let mut rows = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let line = line.strip_suffix('\r').unwrap_or(&line);

        if config.is_comment(line) {
            tracing::trace!(line = line_num + 1, "skipping comment line");
            continue;
        }

        rows.push(Row::from_row_string(line, &config.separator));
    }

    Ok(rows)
}

/// Write rows to a sink, one row per line
pub fn write_rows<W: Write>(mut writer: W, rows: &[Row], config: &Config, path: &Path) -> Result<()> {
    let write_err = |source| TableError::Write {
        path: path.to_path_buf(),
        source,
    };

    for row in rows {
        let line = row.to_row_string(&config.separator, config.quote_fields);
        writeln!(writer, "{}", line).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)
}

/// Load rows from a file
pub fn load_file(path: &Path, config: &Config) -> Result<Vec<Row>> {
    let file = File::open(path).map_err(|source| TableError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = read_rows(BufReader::new(file), config, path)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "loaded table");
    Ok(rows)
}

/// Save rows to a file, creating any missing parent directories
pub fn save_file(path: &Path, rows: &[Row], config: &Config) -> Result<()> {
    ensure_parent_dir(path)?;

    let file = File::create(path).map_err(|source| TableError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    write_rows(BufWriter::new(file), rows, config, path)?;
    tracing::debug!(
        path = %path.display(),
        rows = rows.len(),
        quoted = config.quote_fields,
        "saved table"
    );
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(parent).map_err(|source| TableError::CreateDir {
        path: PathBuf::from(parent),
        source,
    })?;
    tracing::debug!(path = %parent.display(), "created directory");
    Ok(())
}
