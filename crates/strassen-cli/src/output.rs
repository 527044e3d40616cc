//! Text formatting for matrices, counts and durations.

use std::io::{self, Write};
use std::time::Duration;

use strassen_core::Matrix;

use crate::Element;

/// Write a matrix in report form: every value followed by a tab, one row per
/// line, then a blank line.
pub fn write_matrix<W: Write>(out: &mut W, matrix: &Matrix<Element>) -> io::Result<()> {
    for row in matrix.iter_rows() {
        for value in row {
            write!(out, "{value}\t")?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

/// Write one block in input-file form: the order, the rows of `a`, the rows
/// of `b`, then a blank separator line.
pub fn write_input_block<W: Write>(
    out: &mut W,
    a: &Matrix<Element>,
    b: &Matrix<Element>,
) -> io::Result<()> {
    writeln!(out, "{}", a.rows())?;
    for matrix in [a, b] {
        for row in matrix.iter_rows() {
            let line: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(out, "{}", line.join(" "))?;
        }
    }
    writeln!(out)
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
