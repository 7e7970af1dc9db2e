//! # registra-matrix
//!
//! Correspondence matrix engine: reconciles a dispatch order's incoming
//! (agency) documents with its outgoing (company) documents into paired
//! rows for display and export.
//!
//! Three layered components, leaves first:
//!
//! 1. [`classify`] — resolves which document a process record carries
//!    and classifies its direction across two historical data shapes.
//! 2. [`tree`] — builds the parent/child reply forest used by the
//!    timeline view and flattens it for display.
//! 3. [`matrix`] — the three-phase pairing algorithm producing the
//!    ordered incoming/outgoing table.
//!
//! Everything here is a pure synchronous function over caller-supplied
//! snapshots: no I/O, no shared state, safe to re-invoke on every input
//! change.

pub mod classify;
pub mod matrix;
pub mod tree;

pub use classify::{
    classify_record, effective_document, partition_records, DirectionRule, DirectionalPairs,
    DocumentShape, EffectiveDocument, PrefixDirectionRule, RuleDirection,
};
pub use matrix::build_correspondence_matrix;
pub use tree::{build_record_forest, RecordForest, RecordNode};
