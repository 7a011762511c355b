//! Tab-separated report writer.

use std::io::{self, Write};

use crate::driver::{ConfigError, Outcome};
use crate::metrics::BenchmarkResult;

pub const HEADER: &str = "Algorithm\tSeconds/Block\tBytes/sec (RAM)\tBytes/sec (HDD)";

/// One report line for a measured configuration.
///
/// Unbounded throughput prints as `inf`.
pub fn format_row(result: &BenchmarkResult) -> String {
    format!(
        "{}\t{:.6}\t{:.2}\t{:.2}",
        result.config,
        result.block_time().as_secs_f64(),
        result.ram_throughput(),
        result.file_throughput(),
    )
}

/// One report line for a configuration that could not be measured.
pub fn format_skipped(err: &ConfigError) -> String {
    format!("{}\tskipped: {}: {}", err.config, err.phase, err.source)
}

/// Writes the header once, then a row per configuration as results arrive.
pub struct Report<W: Write> {
    out: W,
}

impl<W: Write> Report<W> {
    /// Start a report, writing the header line.
    pub fn new(mut out: W) -> io::Result<Self> {
        writeln!(out, "{HEADER}")?;
        Ok(Self { out })
    }

    pub fn record(&mut self, outcome: &Outcome) -> io::Result<()> {
        let line = match outcome {
            Ok(result) => format_row(result),
            Err(err) => format_skipped(err),
        };
        writeln!(self.out, "{line}")?;
        // Rows appear as each configuration finishes.
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
