//! Test modules for the prefix tree crate.
//!
//! This module contains the crate-level test suites:
//! - Command dispatch of the binary
//! - Configuration loading and validation
//! - Error conversion and reporting
//! - Property-based tests for the prefix tree
//! - Shared fixtures and strategies


pub use test_utils::{word_list_strategy, word_strategy, TestFixture};
