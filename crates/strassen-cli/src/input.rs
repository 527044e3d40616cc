//! Reader for matrix-pair input files.
//!
//! A file is a sequence of blocks. Each block is a line holding the order
//! `n`, then `n` rows of `n` whitespace-separated integers for matrix A and
//! `n` more rows for matrix B. Blank lines between blocks are ignored.
//!
//! ```text
//! 2
//! 1 2
//! 3 4
//! 5 6
//! 7 8
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

use strassen_core::{Matrix, MatrixError};

use crate::Element;

/// Error type for malformed input files. Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The block header is not a positive integer.
    #[error("line {line}: invalid matrix order {token:?}")]
    InvalidOrder { line: usize, token: String },

    /// The file ended in the middle of a matrix.
    #[error("line {line}: file ended too soon, expected {expected} rows, got {got}")]
    UnexpectedEof {
        line: usize,
        expected: usize,
        got: usize,
    },

    /// A row does not hold exactly `order` values.
    #[error("line {line}: row had different length than expected. Expected: {expected}, Got: {got}, Line: {content:?}")]
    RowLength {
        line: usize,
        expected: usize,
        got: usize,
        content: String,
    },

    /// The parsed values do not form a valid matrix.
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// A token is not an integer.
    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber { line: usize, token: String },
}

/// One block of the input file: two square matrices of the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixBlock {
    pub order: usize,
    pub a: Matrix<Element>,
    pub b: Matrix<Element>,
}

/// Streaming block reader. Stops after the first error.
pub struct BlockReader<R> {
    lines: Lines<R>,
    line_no: usize,
    failed: bool,
}

impl<R: BufRead> BlockReader<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            failed: false,
        }
    }

    /// Number of lines consumed so far.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_no
    }

    fn next_line(&mut self) -> Option<Result<String, InputError>> {
        let line = self.lines.next()?;
        self.line_no += 1;
        Some(line.map_err(InputError::from))
    }

    /// Next non-blank line, `None` at end of input.
    fn next_header(&mut self) -> Option<Result<String, InputError>> {
        loop {
            match self.next_line()? {
                Ok(line) if line.trim().is_empty() => {}
                other => return Some(other),
            }
        }
    }

    fn read_block(&mut self, header: &str) -> Result<MatrixBlock, InputError> {
        let order = parse_order(header, self.line_no)?;
        let a = self.read_matrix(order)?;
        let b = self.read_matrix(order)?;
        tracing::debug!(order, line = self.line_no, "read matrix block");
        Ok(MatrixBlock { order, a, b })
    }

    fn read_matrix(&mut self, order: usize) -> Result<Matrix<Element>, InputError> {
        // The header is untrusted until the rows have been read
        let mut data = Vec::with_capacity(order.saturating_mul(order).min(1 << 20));

        for row in 0..order {
            let Some(line) = self.next_line() else {
                return Err(InputError::UnexpectedEof {
                    line: self.line_no,
                    expected: order,
                    got: row,
                });
            };
            let line = line?;

            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != order {
                return Err(InputError::RowLength {
                    line: self.line_no,
                    expected: order,
                    got: tokens.len(),
                    content: line.clone(),
                });
            }

            for token in tokens {
                let value = token
                    .parse::<Element>()
                    .map_err(|_| InputError::InvalidNumber {
                        line: self.line_no,
                        token: token.to_string(),
                    })?;
                data.push(value);
            }
        }

        Ok(Matrix::from_vec(order, order, data)?)
    }
}

impl<R: BufRead> Iterator for BlockReader<R> {
    type Item = Result<MatrixBlock, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = match self.next_header()? {
            Ok(header) => self.read_block(&header),
            Err(e) => Err(e),
        };
        self.failed = result.is_err();
        Some(result)
    }
}

fn parse_order(header: &str, line: usize) -> Result<usize, InputError> {
    let token = header.trim();
    match token.parse::<usize>() {
        Ok(order) if order > 0 => Ok(order),
        _ => Err(InputError::InvalidOrder {
            line,
            token: token.to_string(),
        }),
    }
}

/// Open an input file for streaming.
pub fn open_blocks(path: &Path) -> Result<BlockReader<BufReader<File>>, InputError> {
    let file = File::open(path)?;
    Ok(BlockReader::new(BufReader::new(file)))
}

/// Parse every block of an in-memory document.
pub fn parse_blocks(input: &str) -> Result<Vec<MatrixBlock>, InputError> {
    BlockReader::new(input.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLE: &str = "2\n1 2\n3 4\n5 6\n7 8\n\n1\n3\n4\n";

    #[test]
    fn parses_blocks() {
        let blocks = parse_blocks(SAMPLE).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].order, 2);
        assert_eq!(blocks[0].a.to_rows(), vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(blocks[0].b.to_rows(), vec![vec![5, 6], vec![7, 8]]);
        assert_eq!(blocks[1].a.to_rows(), vec![vec![3]]);
        assert_eq!(blocks[1].b.to_rows(), vec![vec![4]]);
    }

    #[test]
    fn tolerates_extra_whitespace() {
        let blocks = parse_blocks("\n\n  2  \n 1   2 \n3\t4\n-5 6\n7 -8  \n\n\n").unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].a.to_rows(), vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(blocks[0].b.to_rows(), vec![vec![-5, 6], vec![7, -8]]);
    }

    #[test]
    fn empty_input_has_no_blocks() {
        assert!(parse_blocks("").unwrap().is_empty());
        assert!(parse_blocks("\n \n").unwrap().is_empty());
    }

    #[test]
    fn short_row_reports_line() {
        let err = parse_blocks("2\n1 2\n3\n5 6\n7 8\n").unwrap_err();
        match err {
            InputError::RowLength {
                line,
                expected,
                got,
                ..
            } => {
                assert_eq!((line, expected, got), (3, 2, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn truncated_file() {
        let err = parse_blocks("2\n1 2\n3 4\n5 6\n").unwrap_err();
        assert!(matches!(
            err,
            InputError::UnexpectedEof {
                expected: 2,
                got: 1,
                ..
            }
        ));
        assert!(err.to_string().contains("file ended too soon"));
    }

    #[test]
    fn non_numeric_token() {
        let err = parse_blocks("1\nx\n4\n").unwrap_err();
        assert!(matches!(err, InputError::InvalidNumber { line: 2, ref token } if token == "x"));
    }

    #[test]
    fn invalid_order() {
        for doc in ["abc\n", "0\n", "-2\n"] {
            let err = parse_blocks(doc).unwrap_err();
            assert!(matches!(err, InputError::InvalidOrder { line: 1, .. }), "{doc:?}");
        }
    }

    #[test]
    fn huge_order_fails_cleanly() {
        let err = parse_blocks("18446744073709551615\n1 2\n").unwrap_err();
        assert!(matches!(err, InputError::RowLength { line: 2, .. }));
    }

    #[test]
    fn reader_stops_after_error() {
        let mut reader = BlockReader::new("1\n2\n3\n1\nbad\n1\n1\n5\n6\n".as_bytes());
        assert!(reader.next().unwrap().is_ok());
        assert!(reader.next().unwrap().is_err());
        assert!(reader.next().is_none());
        assert_eq!(reader.line_number(), 5);
    }

    #[test]
    fn open_missing_file() {
        let err = open_blocks(Path::new("/definitely/not/here.txt")).err().unwrap();
        assert!(matches!(err, InputError::Io(_)));
    }

    proptest! {
        #[test]
        fn parser_never_panics(doc in "[0-9x \n-]{0,64}") {
            let _ = parse_blocks(&doc);
        }
    }
}
