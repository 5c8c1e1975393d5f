//! # Csv
//!
//! A summary table with one line per graph comparing both engines:
//! ```text
//! graph_id,vertices,edges,prim_cost,kruskal_cost,prim_time_ms,kruskal_time_ms,prim_ops,kruskal_ops
//! 1,4,5,6,6,0.012,0.004,5,5
//! ```

use super::*;

/// Column names of the summary table
pub const SUMMARY_HEADER: [&str; 9] = [
    "graph_id",
    "vertices",
    "edges",
    "prim_cost",
    "kruskal_cost",
    "prim_time_ms",
    "kruskal_time_ms",
    "prim_ops",
    "kruskal_ops",
];

/// A writer for the Csv summary
#[derive(Debug, Clone)]
pub struct CsvSummaryWriter {
    /// Column separator
    separator: char,
    /// Number of decimals printed for times
    time_precision: usize,
}

impl Default for CsvSummaryWriter {
    fn default() -> Self {
        Self {
            separator: ',',
            time_precision: 3,
        }
    }
}

impl CsvSummaryWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the column separator
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Updates the number of decimals printed for times
    pub fn time_precision(mut self, precision: usize) -> Self {
        self.time_precision = precision;
        self
    }

    fn write_row<W: Write>(&self, writer: &mut W, report: &GraphReport) -> Result<()> {
        let sep = self.separator;
        let prec = self.time_precision;

        writeln!(
            writer,
            "{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{:.prec$}{sep}{:.prec$}{sep}{}{sep}{}",
            report.graph_id,
            report.input_stats.vertices,
            report.input_stats.edges,
            report.prim.total_cost(),
            report.kruskal.total_cost(),
            report.prim.time_ms(),
            report.kruskal.time_ms(),
            report.prim.operations(),
            report.kruskal.operations(),
        )
    }
}

impl ReportWriter for CsvSummaryWriter {
    fn try_write_reports<W: Write>(&self, reports: &[GraphReport], mut writer: W) -> Result<()> {
        let sep = self.separator.to_string();
        writeln!(writer, "{}", SUMMARY_HEADER.join(sep.as_str()))?;

        for report in reports {
            self.write_row(&mut writer, report)?;
        }

        Ok(())
    }
}
