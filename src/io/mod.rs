/*!
# IO

Adapters between the MST engines and the outside world.

## Input

- **Json** graph sets: `{"graphs": [...]}` where each graph is given either by index
  (`num_vertices` + `edges` of `{u, v, w}`) or by name (`nodes` + `edges` of
  `{from, to, weight}`). See [`GraphSetReader`].

## Output

- **Json** results: per graph the input statistics and both engines' results, see [`JsonReportWriter`].
- **Csv** summary: one line per graph comparing both engines, see [`CsvSummaryWriter`].
- **Dot**: a rendering of a graph (optionally highlighting a spanning tree) in the
  [DOT language](https://graphviz.org/doc/info/lang.html), see [`DotWriter`].

## Traits

- [`ReportWriter`] is implemented by writers that serialize a list of [`GraphReport`]s.
*/

pub mod csv;
pub mod dot;
pub mod json;
pub mod report;

use std::{
    fs::{File, create_dir_all},
    io::{BufWriter, Result, Write},
    path::Path,
};

use crate::prelude::*;

pub use self::csv::*;
pub use dot::*;
pub use json::*;
pub use report::*;

/// Trait for types that can write benchmark reports in a specific format.
///
/// Provides a low-level method to write to any [`Write`] instance and a convenience
/// wrapper to write directly to files.
pub trait ReportWriter {
    /// Writes the given reports to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_reports<W>(&self, reports: &[GraphReport], writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given reports to a file, creating missing parent directories first.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_reports_file<P>(&self, reports: &[GraphReport], path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(create_file(path)?);
        self.try_write_reports(reports, &mut writer)?;
        writer.flush()
    }
}

/// Creates (or truncates) the file at `path` and all its missing parent directories
pub(crate) fn create_file<P: AsRef<Path>>(path: P) -> Result<File> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }
    File::create(path)
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

use io_error;
use raise_error_unless;
