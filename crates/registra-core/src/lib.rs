//! # registra-core
//!
//! Core types and abstractions for the registra correspondence engine.
//!
//! This crate provides the domain data model shared by the algorithm
//! crates: process records, document summaries, matrix rows, plus the
//! error type, logging field constants, and the worksheet export
//! projection consumed by the spreadsheet writer.

pub mod defaults;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use export::{export_rows, ExportCell, ExportRow};
pub use models::*;
