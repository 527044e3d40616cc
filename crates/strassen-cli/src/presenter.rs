//! Per-block report writing and console presentation.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use strassen_core::{Matrix, OperationCounts};

use crate::output::{format_duration, format_number, write_matrix};
use crate::Element;

/// Operation counts and timings of both algorithms on one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSummary {
    /// Matrix order of the block.
    pub order: usize,
    /// Counts of the naive algorithm.
    pub naive: OperationCounts,
    /// Counts of the Strassen algorithm.
    pub strassen: OperationCounts,
    /// Wall time of the naive algorithm in microseconds.
    #[serde(default)]
    pub naive_micros: u64,
    /// Wall time of the Strassen algorithm in microseconds.
    #[serde(default)]
    pub strassen_micros: u64,
}

impl BlockSummary {
    #[must_use]
    pub fn new(order: usize, naive: OperationCounts, strassen: OperationCounts) -> Self {
        Self {
            order,
            naive,
            strassen,
            naive_micros: 0,
            strassen_micros: 0,
        }
    }

    /// Attach wall times.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn with_durations(mut self, naive: Duration, strassen: Duration) -> Self {
        self.naive_micros = naive.as_micros() as u64;
        self.strassen_micros = strassen.as_micros() as u64;
        self
    }

    /// The tab-separated summary line that heads each block report.
    ///
    /// The additions key is spelled `StrassenCountAddtions`, as existing
    /// report consumers expect.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "MatrixOrder={}\t\tSquareCountMultiplications={}\t\tStrassenCountMultiplications={}\t\tStrassenCountAddtions={}",
            self.order,
            self.naive.multiplications,
            self.strassen.multiplications,
            self.strassen.additions,
        )
    }
}

/// Writes block reports to an output stream.
///
/// Each block is flushed once complete, so a failure on a later block leaves
/// earlier reports intact.
pub struct ReportWriter<W: Write> {
    out: W,
    blocks_written: usize,
}

impl<W: Write> ReportWriter<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out,
            blocks_written: 0,
        }
    }

    /// Write the summary line, both inputs and both products.
    pub fn write_block(
        &mut self,
        summary: &BlockSummary,
        a: &Matrix<Element>,
        b: &Matrix<Element>,
        naive: &Matrix<Element>,
        strassen: &Matrix<Element>,
    ) -> io::Result<()> {
        writeln!(self.out, "{}", summary.summary_line())?;

        for (title, matrix) in [
            ("Input A", a),
            ("Input B", b),
            ("Square Multiply result", naive),
            ("Strassen result", strassen),
        ] {
            writeln!(self.out, "{title}")?;
            write_matrix(&mut self.out, matrix)?;
        }

        writeln!(self.out)?;
        self.out.flush()?;
        self.blocks_written += 1;
        Ok(())
    }

    #[must_use]
    pub fn blocks_written(&self) -> usize {
        self.blocks_written
    }

    /// Recover the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Save block summaries as pretty-printed JSON.
pub fn write_summary_json(path: &Path, summaries: &[BlockSummary]) -> io::Result<()> {
    let content = serde_json::to_string_pretty(summaries).map_err(io::Error::other)?;
    std::fs::write(path, content)
}

/// Console presenter for summary lines and errors.
///
/// Progress goes to `out`, errors to `err`. Quiet mode silences `out` only.
pub struct ConsolePresenter<W: Write = io::Stdout, E: Write = io::Stderr> {
    out: W,
    err: E,
    verbose: bool,
    quiet: bool,
}

impl ConsolePresenter {
    /// Presenter writing to the process stdout and stderr.
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self::with_writers(io::stdout(), io::stderr(), verbose, quiet)
    }
}

impl<W: Write, E: Write> ConsolePresenter<W, E> {
    #[must_use]
    pub fn with_writers(out: W, err: E, verbose: bool, quiet: bool) -> Self {
        Self {
            out,
            err,
            verbose,
            quiet,
        }
    }

    /// Tell the user where the full report goes.
    pub fn present_output_location(&mut self, path: &Path) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "Full output in '{}'", path.display())
    }

    pub fn present_summary(&mut self, summary: &BlockSummary) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        writeln!(self.out, "{}", summary.summary_line())?;

        if self.verbose {
            writeln!(
                self.out,
                "  naive: {} multiplications in {}",
                format_number(summary.naive.multiplications),
                format_duration(Duration::from_micros(summary.naive_micros)),
            )?;
            writeln!(
                self.out,
                "  strassen: {} multiplications, {} additions in {}",
                format_number(summary.strassen.multiplications),
                format_number(summary.strassen.additions),
                format_duration(Duration::from_micros(summary.strassen_micros)),
            )?;
        }
        Ok(())
    }

    /// Report a fatal error. Never silenced by quiet mode.
    pub fn present_error(&mut self, error: &dyn std::fmt::Display) {
        // Nothing useful is left to do if stderr itself fails
        let _ = writeln!(self.err, "Error: {error}");
    }

    /// Recover the output and error streams.
    pub fn into_writers(self) -> (W, E) {
        (self.out, self.err)
    }
}
