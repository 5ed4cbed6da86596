//! Core functionality for the scsslint stylesheet linter
//!
//! This crate provides:
//! - lint rules over `@import`-like at-rules
//! - diagnostic generation and reporting
//! - configuration management
//! - file discovery and processing

pub mod check;
pub mod config;
pub mod diagnostic;
pub mod lints;
pub mod location;
pub mod options;
pub mod output_format;
pub mod stylesheet;
pub mod utils;

#[cfg(test)]
pub mod utils_test;
