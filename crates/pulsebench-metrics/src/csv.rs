//! Append-only CSV measurement log.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{MetricsError, MetricsResult};

const LINE_END: &str = "\r\n";

/// A CSV file that receives one row per measurement.
///
/// The header is written only when the file is new or empty. Rows use CRLF
/// line endings.
#[derive(Debug, Clone)]
pub struct CsvLog {
    path: PathBuf,
    header: &'static [&'static str],
}

impl CsvLog {
    pub fn new(path: impl Into<PathBuf>, header: &'static [&'static str]) -> Self {
        Self {
            path: path.into(),
            header,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `row`, preceded by the header if the file has no content yet.
    pub fn append(&self, row: &[String]) -> MetricsResult<()> {
        let io_err = |source| MetricsError::Io {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_err)?;

        let mut out = String::new();
        if file.metadata().map_err(io_err)?.len() == 0 {
            push_row(&mut out, self.header.iter().copied());
        }
        push_row(&mut out, row.iter().map(String::as_str));

        file.write_all(out.as_bytes()).map_err(io_err)?;
        debug!(path = %self.path.display(), "Appended CSV row");
        Ok(())
    }
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    let line = cells.map(quote).collect::<Vec<_>>().join(",");
    out.push_str(&line);
    out.push_str(LINE_END);
}

/// Quote a cell only when it contains a separator, quote or line break.
fn quote(cell: &str) -> String {
    if cell.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
