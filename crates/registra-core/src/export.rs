//! Worksheet projection of the correspondence matrix.
//!
//! The spreadsheet exporter writes one worksheet row per matrix row with
//! the columns: sequence number, incoming number/date/subject/status,
//! arrow indicator (only when both sides are populated), outgoing
//! number/date/subject/status. This module performs that projection so
//! the workbook writer stays a dumb cell emitter.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::defaults::{ARROW_INDICATOR, EXPORT_DATE_FORMAT, STATUS_ASSIGNED, STATUS_UNASSIGNED};
use crate::models::{MatrixItem, MatrixRow};

/// One side of a worksheet row. Missing values render as empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportCell {
    pub number: String,
    pub date: String,
    pub subject: String,
    /// `"assigned"` when a process record backs the document,
    /// `"unassigned"` when only a dispatch link does.
    pub status: String,
}

impl ExportCell {
    fn from_item(item: &MatrixItem) -> Self {
        let status = if item.unassigned() {
            STATUS_UNASSIGNED
        } else {
            STATUS_ASSIGNED
        };
        Self {
            number: item.number.clone().unwrap_or_default(),
            date: item
                .date
                .map(|d| d.format(EXPORT_DATE_FORMAT).to_string())
                .unwrap_or_default(),
            subject: item.subject.clone().unwrap_or_default(),
            status: status.to_string(),
        }
    }
}

/// One worksheet row, ready for the workbook writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    /// 1-based sequence number column.
    pub seq: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoming: Option<ExportCell>,
    /// Arrow indicator column, present only for matched pairs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outgoing: Option<ExportCell>,
}

/// Project finished matrix rows into worksheet rows, preserving order.
pub fn export_rows(rows: &[MatrixRow]) -> Vec<ExportRow> {
    let exported: Vec<ExportRow> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let incoming = row.incoming.as_ref().map(ExportCell::from_item);
            let outgoing = row.outgoing.as_ref().map(ExportCell::from_item);
            let arrow = (incoming.is_some() && outgoing.is_some())
                .then(|| ARROW_INDICATOR.to_string());
            ExportRow {
                seq: idx + 1,
                incoming,
                arrow,
                outgoing,
            }
        })
        .collect();

    debug!(
        subsystem = "export",
        op = "export_rows",
        row_count = exported.len(),
        "worksheet rows projected"
    );

    exported
}
