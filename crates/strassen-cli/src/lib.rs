//! # strassen-cli
//!
//! Matrix block input, report output, benchmark generation and shell completion.

pub mod completion;
pub mod generator;
pub mod input;
pub mod output;
pub mod presenter;

/// Element type of matrices read from and written to text files.
pub type Element = i64;

pub use input::{parse_blocks, BlockReader, InputError, MatrixBlock};
pub use presenter::{BlockSummary, ConsolePresenter, ReportWriter};
