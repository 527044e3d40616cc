//! Constants shared by the library and the command-line driver.

/// Number of element-wise passes per Strassen level: ten sums/differences
/// plus eight quadrant assembly passes.
pub const STRASSEN_PASSES_PER_LEVEL: u64 = 18;

/// Number of recursive sub-products per Strassen level.
pub const STRASSEN_SUBPRODUCTS: u64 = 7;

/// Exit codes of the `strassen` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Malformed or unreadable input file.
    pub const ERROR_INPUT: i32 = 2;
    /// Algorithm results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
