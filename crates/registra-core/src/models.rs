//! Core data models for the registra correspondence engine.
//!
//! These types are read-only projections of caller-supplied snapshots:
//! the data-fetching layer hands over the process records and document
//! links for one dispatch order, the algorithm crates compute fresh
//! output from them on every invocation, and nothing here is mutated
//! or persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// PROCESS RECORD TYPES
// =============================================================================

/// Workflow status of a process record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Overdue,
    OnHold,
}

/// Lightweight projection of a registered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: i64,
    /// Registry number as stamped on the document, e.g. `OUT-142/2026`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// One step in a dispatch order's paperwork lifecycle.
///
/// A record optionally references one document, in one of two historical
/// shapes. The current shape is `document_id`/`document`; migrated rows
/// may instead (or additionally) carry the legacy
/// `incoming_document`/`outgoing_document` split. Resolution priority
/// lives in `registra-matrix::classify`. A record with no document
/// reference of either shape is a document-less milestone (e.g. a
/// meeting): it participates in tree building but contributes nothing
/// to the correspondence matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub id: i64,
    /// Caller-assigned display position; may collide across records.
    pub sort_order: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_date: Option<NaiveDate>,
    /// Free-text description of the step; preferred over the document's
    /// own subject when the record is placed into the matrix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The record this one answers/follows. May reference a record
    /// outside the current working set; a dangling reference demotes
    /// the record to a tree root, it is never an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_record_id: Option<i64>,
    pub status: RecordStatus,

    // Current document shape
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<DocumentSummary>,

    // Legacy document shape (pre-migration rows)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoming_document_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoming_document: Option<DocumentSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outgoing_document_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outgoing_document: Option<DocumentSummary>,
}

// =============================================================================
// DOCUMENT DIRECTION
// =============================================================================

/// Direction of a document relative to the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Received from an external agency.
    Incoming,
    /// Sent by the company in reply.
    Outgoing,
}

/// A document linked to the dispatch order but not referenced by any
/// process record. The direction tag is assigned at link-creation time
/// by the document-linking feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnassignedDocumentLink {
    pub document_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub direction: Direction,
}

/// A (record, document) tuple produced by classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocPair {
    pub record: ProcessRecord,
    pub document: DocumentSummary,
    pub direction: Direction,
}

// =============================================================================
// MATRIX TYPES
// =============================================================================

/// What stands behind a matrix cell: a workflow record or a bare link.
///
/// The two backings are mutually exclusive by construction; renderers
/// that need the historical `unassigned` boolean read it through
/// [`MatrixItem::unassigned`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixBacking {
    Record(ProcessRecord),
    Link(UnassignedDocumentLink),
}

/// The normalized, direction-agnostic unit placed into a matrix cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixItem {
    pub document_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub backing: MatrixBacking,
}

impl MatrixItem {
    /// True when the document is linked to the dispatch order without a
    /// backing process record.
    pub fn unassigned(&self) -> bool {
        matches!(self.backing, MatrixBacking::Link(_))
    }

    /// The backing process record, if any.
    pub fn record(&self) -> Option<&ProcessRecord> {
        match &self.backing {
            MatrixBacking::Record(r) => Some(r),
            MatrixBacking::Link(_) => None,
        }
    }

    /// The backing unassigned link, if any.
    pub fn link(&self) -> Option<&UnassignedDocumentLink> {
        match &self.backing {
            MatrixBacking::Record(_) => None,
            MatrixBacking::Link(l) => Some(l),
        }
    }
}

/// One line of the incoming/outgoing correspondence table.
///
/// Holds zero or one document on each side; at least one side is always
/// populated. A row is either a matched pair or a standalone document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoming: Option<MatrixItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outgoing: Option<MatrixItem>,
}

impl MatrixRow {
    pub fn paired(incoming: MatrixItem, outgoing: MatrixItem) -> Self {
        Self {
            incoming: Some(incoming),
            outgoing: Some(outgoing),
        }
    }

    pub fn incoming_only(incoming: MatrixItem) -> Self {
        Self {
            incoming: Some(incoming),
            outgoing: None,
        }
    }

    pub fn outgoing_only(outgoing: MatrixItem) -> Self {
        Self {
            incoming: None,
            outgoing: Some(outgoing),
        }
    }

    /// Chronological sort key for the finished matrix.
    ///
    /// The incoming date wins when present; an incoming item without a
    /// date falls through to the outgoing date. `None` sorts before any
    /// calendar date, matching the table renderer's expectation that
    /// undated rows lead.
    pub fn sort_date(&self) -> Option<NaiveDate> {
        self.incoming
            .as_ref()
            .and_then(|i| i.date)
            .or_else(|| self.outgoing.as_ref().and_then(|o| o.date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(date: Option<&str>) -> MatrixItem {
        MatrixItem {
            document_id: 1,
            number: None,
            date: date.map(|d| d.parse().unwrap()),
            subject: None,
            backing: MatrixBacking::Link(UnassignedDocumentLink {
                document_id: 1,
                number: None,
                subject: None,
                date: date.map(|d| d.parse().unwrap()),
                direction: Direction::Incoming,
            }),
        }
    }

    #[test]
    fn sort_date_prefers_incoming() {
        let row = MatrixRow::paired(item(Some("2026-01-10")), item(Some("2026-01-15")));
        assert_eq!(row.sort_date(), Some("2026-01-10".parse().unwrap()));
    }

    #[test]
    fn sort_date_falls_through_undated_incoming() {
        let row = MatrixRow::paired(item(None), item(Some("2026-01-15")));
        assert_eq!(row.sort_date(), Some("2026-01-15".parse().unwrap()));
    }

    #[test]
    fn sort_date_none_when_both_undated() {
        let row = MatrixRow::incoming_only(item(None));
        assert_eq!(row.sort_date(), None);
    }

    #[test]
    fn none_date_sorts_first() {
        // Undated values lead every chronological ordering in the table.
        let undated: Option<NaiveDate> = None;
        let dated: Option<NaiveDate> = Some("2026-01-01".parse().unwrap());
        assert!(undated < dated);
    }

    #[test]
    fn record_status_serde_shape() {
        let json = serde_json::to_string(&RecordStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
