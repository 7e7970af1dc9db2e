//! Centralized default constants for the registra correspondence engine.
//!
//! **This module is the single source of truth** for all shared default
//! values. Crates and embedding applications should reference these
//! constants instead of defining their own magic values.

// =============================================================================
// DOCUMENT NUMBER CONVENTION
// =============================================================================

/// Prefix token that marks a document number as authored by the company's
/// outgoing office. The registry stamps outbound correspondence as
/// `OUT-<serial>/<year>`; anything else in the number field came from an
/// external agency. Overridable per deployment via
/// `PrefixDirectionRule::new`.
pub const OUTGOING_NUMBER_PREFIX: &str = "OUT";

// =============================================================================
// EXPORT RENDERING
// =============================================================================

/// Status display string for a document backed by a process record.
pub const STATUS_ASSIGNED: &str = "assigned";

/// Status display string for a document linked to the dispatch order but
/// not tied to any process record.
pub const STATUS_UNASSIGNED: &str = "unassigned";

/// Arrow glyph placed between the incoming and outgoing cells of a
/// worksheet row when both sides are populated.
pub const ARROW_INDICATOR: &str = "→";

/// Date display format for worksheet cells (ISO 8601 calendar date).
pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d";
