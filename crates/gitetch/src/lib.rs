//! gitetch library
//!
//! This module exports the core pipeline of gitetch for use in integration
//! tests and benchmarks: CLI configuration, calendar planning, plan
//! execution, and dry-run reporting.

pub mod config;
pub mod executor;
pub mod plan;
pub mod report;
