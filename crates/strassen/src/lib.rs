//! Strassen library: application logic for the matrix multiplication comparison.

pub mod app;
pub mod config;
pub mod errors;
