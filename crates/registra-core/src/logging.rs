//! Structured logging field name constants for registra.
//!
//! All crates use these constants for consistent structured logging
//! fields, so log aggregation tools can query by standardized field
//! names across every subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | WARN  | Recoverable data irregularity, fallback applied |
//! | INFO  | Operation completions on caller-facing surfaces |
//! | DEBUG | Decision points, phase summaries, config choices |
//! | TRACE | Per-record iteration, high-volume pairing detail |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "matrix", "tree", "classify", "export"
pub const SUBSYSTEM: &str = "subsystem";

/// Logical operation name.
/// Examples: "build_matrix", "build_forest", "partition_records"
pub const OPERATION: &str = "op";

/// Dispatch order id the operation runs against, when the caller
/// supplies one for correlation.
pub const DISPATCH_ID: &str = "dispatch_id";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Process record id being operated on.
pub const RECORD_ID: &str = "record_id";

/// Document id being classified or placed.
pub const DOCUMENT_ID: &str = "document_id";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Number of process records in the input snapshot.
pub const RECORD_COUNT: &str = "record_count";

/// Number of incoming document pairs derived from records.
pub const INCOMING_COUNT: &str = "incoming_count";

/// Number of outgoing document pairs derived from records.
pub const OUTGOING_COUNT: &str = "outgoing_count";

/// Number of rows paired by the explicit chain phase.
pub const CHAIN_PAIR_COUNT: &str = "chain_pair_count";

/// Number of rows paired by the date-proximity phase.
pub const DATE_PAIR_COUNT: &str = "date_pair_count";

/// Number of standalone (single-sided) rows emitted.
pub const STANDALONE_COUNT: &str = "standalone_count";

/// Total rows in the finished matrix.
pub const ROW_COUNT: &str = "row_count";
