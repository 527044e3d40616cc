//! Workspace-level integration tests for the Strassen workspace.
//!
//! The test suites live in `tests/`; this crate has no runtime code.
