//! Fixture builders shared by the integration suites.

use chrono::NaiveDate;
use registra_core::{
    Direction, DocumentSummary, MatrixRow, ProcessRecord, RecordStatus, UnassignedDocumentLink,
};

pub fn date(s: &str) -> NaiveDate {
    s.parse().expect("fixture date must be ISO formatted")
}

pub fn base_record(id: i64, sort_order: i32) -> ProcessRecord {
    ProcessRecord {
        id,
        sort_order,
        record_date: None,
        description: None,
        parent_record_id: None,
        status: RecordStatus::Pending,
        document_id: None,
        document: None,
        incoming_document_id: None,
        incoming_document: None,
        outgoing_document_id: None,
        outgoing_document: None,
    }
}

/// Record carrying a current-shape document whose number classifies by
/// the default prefix convention (`OUT…` = outgoing, anything else
/// incoming).
pub fn documented_record(
    id: i64,
    doc_id: i64,
    number: &str,
    doc_date: Option<&str>,
    parent: Option<i64>,
) -> ProcessRecord {
    let mut record = base_record(id, id as i32);
    record.parent_record_id = parent;
    record.document_id = Some(doc_id);
    record.document = Some(DocumentSummary {
        id: doc_id,
        number: Some(number.to_string()),
        subject: Some(format!("subject of {number}")),
        date: doc_date.map(date),
    });
    record
}

pub fn incoming_record(id: i64, doc_id: i64, doc_date: &str) -> ProcessRecord {
    documented_record(id, doc_id, &format!("AG-{doc_id}/2026"), Some(doc_date), None)
}

pub fn outgoing_record(id: i64, doc_id: i64, doc_date: &str, parent: Option<i64>) -> ProcessRecord {
    documented_record(id, doc_id, &format!("OUT-{doc_id}/2026"), Some(doc_date), parent)
}

pub fn link(doc_id: i64, doc_date: Option<&str>, direction: Direction) -> UnassignedDocumentLink {
    UnassignedDocumentLink {
        document_id: doc_id,
        number: Some(format!("LNK-{doc_id}/2026")),
        subject: None,
        date: doc_date.map(date),
        direction,
    }
}

/// Every document id placed in the matrix, in row order, incoming cell
/// before outgoing cell.
pub fn placed_document_ids(rows: &[MatrixRow]) -> Vec<i64> {
    let mut ids = Vec::new();
    for row in rows {
        if let Some(i) = &row.incoming {
            ids.push(i.document_id);
        }
        if let Some(o) = &row.outgoing {
            ids.push(o.document_id);
        }
    }
    ids
}
