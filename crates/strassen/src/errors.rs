//! Application errors and exit codes.

use strassen_cli::InputError;
use strassen_core::constants::exit_codes;
use strassen_core::MatrixError;

/// Errors raised by the application layer itself.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),

    /// A block would exceed the configured memory limit.
    #[error("order {order} needs an estimated {needed_mb} MB, limit is {limit_mb} MB")]
    MemoryBudget {
        order: usize,
        needed_mb: usize,
        limit_mb: usize,
    },
}

/// Map an error chain to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<AppError>() {
            return match e {
                AppError::Config(_) | AppError::MemoryBudget { .. } => exit_codes::ERROR_CONFIG,
            };
        }
        if let Some(e) = cause.downcast_ref::<MatrixError>() {
            return match e {
                MatrixError::Mismatch(_, _) => exit_codes::ERROR_MISMATCH,
                _ => exit_codes::ERROR_INPUT,
            };
        }
        if cause.downcast_ref::<InputError>().is_some() {
            return exit_codes::ERROR_INPUT;
        }
    }
    exit_codes::ERROR_GENERIC
}
