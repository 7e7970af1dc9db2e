//! Three-phase correspondence matrix builder.
//!
//! Reconciles one dispatch order's incoming and outgoing documents into
//! paired table rows:
//!
//! 1. **Chain pairing** — an outgoing record that declares a
//!    `parent_record_id` pairs with the incoming record it answers,
//!    regardless of dates.
//! 2. **Date-proximity pairing** — every document still unmatched
//!    (including unassigned links) is pooled per direction and greedily
//!    paired: each incoming document, in ascending date order, claims
//!    the unused outgoing document with the closest date at or after
//!    its own. Unclaimed documents become standalone rows.
//! 3. **Finalize** — all rows are re-sorted chronologically so chain
//!    pairs interleave with date pairs.
//!
//! The greedy order is part of the observable contract: an earlier
//! incoming document can claim an outgoing document that would have
//! been a tighter match for a later one. Real-world reply patterns make
//! this accurate enough; this is not an assignment-problem solver.

use std::collections::HashSet;

use tracing::{debug, trace};

use registra_core::{
    Direction, DocPair, MatrixBacking, MatrixItem, MatrixRow, UnassignedDocumentLink,
};

use crate::classify::DirectionalPairs;

fn item_from_pair(pair: &DocPair) -> MatrixItem {
    MatrixItem {
        document_id: pair.document.id,
        number: pair.document.number.clone(),
        date: pair.document.date,
        subject: pair
            .record
            .description
            .clone()
            .or_else(|| pair.document.subject.clone()),
        backing: MatrixBacking::Record(pair.record.clone()),
    }
}

fn item_from_link(link: &UnassignedDocumentLink) -> MatrixItem {
    MatrixItem {
        document_id: link.document_id,
        number: link.number.clone(),
        date: link.date,
        subject: link.subject.clone(),
        backing: MatrixBacking::Link(link.clone()),
    }
}

/// Build the ordered correspondence matrix for one dispatch order.
///
/// `pairs` holds the record-backed documents (see
/// [`crate::classify::partition_records`]); `links` holds the documents
/// linked to the dispatch order without a backing record, each tagged
/// with its direction. Every input document appears in exactly one row
/// of the result, every row has at least one side populated, and the
/// row list is non-decreasing in [`MatrixRow::sort_date`]. Pure and
/// deterministic; empty inputs yield an empty matrix.
pub fn build_correspondence_matrix(
    pairs: &DirectionalPairs,
    links: &[UnassignedDocumentLink],
) -> Vec<MatrixRow> {
    // Phase 1: explicit chain pairing. First outgoing claimant wins an
    // incoming parent; later claimants fall through to Phase 2.
    let mut consumed_incoming: HashSet<i64> = HashSet::new();
    let mut consumed_outgoing: HashSet<i64> = HashSet::new();
    let mut rows: Vec<MatrixRow> = Vec::new();

    for out_pair in &pairs.outgoing {
        let Some(parent_id) = out_pair.record.parent_record_id else {
            continue;
        };
        if consumed_incoming.contains(&parent_id) {
            trace!(
                subsystem = "matrix",
                record_id = out_pair.record.id,
                parent_id,
                "incoming parent already claimed, deferring to date pairing"
            );
            continue;
        }
        if let Some(in_pair) = pairs.incoming.iter().find(|p| p.record.id == parent_id) {
            consumed_incoming.insert(parent_id);
            consumed_outgoing.insert(out_pair.record.id);
            rows.push(MatrixRow::paired(
                item_from_pair(in_pair),
                item_from_pair(out_pair),
            ));
        }
    }
    let chain_pair_count = rows.len();

    // Phase 2: pool everything unmatched, per direction, ascending by
    // date with undated items first. The stable sort keeps record-backed
    // items ahead of unassigned links on equal dates.
    let mut incoming_pool: Vec<MatrixItem> = pairs
        .incoming
        .iter()
        .filter(|p| !consumed_incoming.contains(&p.record.id))
        .map(item_from_pair)
        .chain(
            links
                .iter()
                .filter(|l| l.direction == Direction::Incoming)
                .map(item_from_link),
        )
        .collect();
    incoming_pool.sort_by_key(|i| i.date);

    let mut outgoing_pool: Vec<MatrixItem> = pairs
        .outgoing
        .iter()
        .filter(|p| !consumed_outgoing.contains(&p.record.id))
        .map(item_from_pair)
        .chain(
            links
                .iter()
                .filter(|l| l.direction == Direction::Outgoing)
                .map(item_from_link),
        )
        .collect();
    outgoing_pool.sort_by_key(|i| i.date);

    let mut used = vec![false; outgoing_pool.len()];
    let mut date_pair_count = 0usize;

    for incoming in &incoming_pool {
        // Closest unused successor: smallest outgoing date at or after
        // the incoming date. Undated outgoing items only qualify for
        // undated incoming items (None >= Some(_) is false).
        let mut best: Option<usize> = None;
        for (idx, candidate) in outgoing_pool.iter().enumerate() {
            if used[idx] || candidate.date < incoming.date {
                continue;
            }
            match best {
                Some(b) if outgoing_pool[b].date <= candidate.date => {}
                _ => best = Some(idx),
            }
        }
        match best {
            Some(idx) => {
                used[idx] = true;
                date_pair_count += 1;
                rows.push(MatrixRow::paired(
                    incoming.clone(),
                    outgoing_pool[idx].clone(),
                ));
            }
            None => rows.push(MatrixRow::incoming_only(incoming.clone())),
        }
    }

    for (idx, outgoing) in outgoing_pool.iter().enumerate() {
        if !used[idx] {
            rows.push(MatrixRow::outgoing_only(outgoing.clone()));
        }
    }

    // Phase 3: full chronological re-sort (stable) so chain pairs
    // interleave with date pairs.
    rows.sort_by_key(MatrixRow::sort_date);

    debug!(
        subsystem = "matrix",
        op = "build_matrix",
        incoming_count = pairs.incoming.len(),
        outgoing_count = pairs.outgoing.len(),
        chain_pair_count,
        date_pair_count,
        standalone_count = rows.len() - chain_pair_count - date_pair_count,
        row_count = rows.len(),
        "correspondence matrix built"
    );

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use registra_core::{DocumentSummary, ProcessRecord, RecordStatus};

    fn record(id: i64, date: Option<&str>, parent: Option<i64>) -> ProcessRecord {
        ProcessRecord {
            id,
            sort_order: id as i32,
            record_date: date.map(|d| d.parse().unwrap()),
            description: None,
            parent_record_id: parent,
            status: RecordStatus::Pending,
            document_id: None,
            document: None,
            incoming_document_id: None,
            incoming_document: None,
            outgoing_document_id: None,
            outgoing_document: None,
        }
    }

    fn pair(record_id: i64, doc_id: i64, date: Option<&str>, direction: Direction) -> DocPair {
        pair_with_parent(record_id, doc_id, date, direction, None)
    }

    fn pair_with_parent(
        record_id: i64,
        doc_id: i64,
        date: Option<&str>,
        direction: Direction,
        parent: Option<i64>,
    ) -> DocPair {
        DocPair {
            record: record(record_id, date, parent),
            document: DocumentSummary {
                id: doc_id,
                number: None,
                subject: Some(format!("document {doc_id}")),
                date: date.map(|d| d.parse().unwrap()),
            },
            direction,
        }
    }

    #[test]
    fn subject_prefers_record_description() {
        let mut p = pair(1, 100, Some("2026-01-10"), Direction::Incoming);
        p.record.description = Some("agency inquiry".to_string());
        let item = item_from_pair(&p);
        assert_eq!(item.subject.as_deref(), Some("agency inquiry"));
        assert!(!item.unassigned());

        p.record.description = None;
        let item = item_from_pair(&p);
        assert_eq!(item.subject.as_deref(), Some("document 100"));
    }

    #[test]
    fn chain_pairing_ignores_dates() {
        // Outgoing dated before its incoming parent still pairs.
        let pairs = DirectionalPairs {
            incoming: vec![pair(10, 100, Some("2026-02-01"), Direction::Incoming)],
            outgoing: vec![pair_with_parent(
                20,
                200,
                Some("2026-01-15"),
                Direction::Outgoing,
                Some(10),
            )],
        };
        let rows = build_correspondence_matrix(&pairs, &[]);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].incoming.is_some() && rows[0].outgoing.is_some());
    }

    #[test]
    fn second_chain_claimant_falls_through() {
        let pairs = DirectionalPairs {
            incoming: vec![pair(10, 100, Some("2026-01-01"), Direction::Incoming)],
            outgoing: vec![
                pair_with_parent(20, 200, Some("2026-01-05"), Direction::Outgoing, Some(10)),
                pair_with_parent(21, 201, Some("2026-01-06"), Direction::Outgoing, Some(10)),
            ],
        };
        let rows = build_correspondence_matrix(&pairs, &[]);
        // One chain pair plus one standalone outgoing.
        assert_eq!(rows.len(), 2);
        let standalone: Vec<_> = rows.iter().filter(|r| r.incoming.is_none()).collect();
        assert_eq!(standalone.len(), 1);
        assert_eq!(
            standalone[0].outgoing.as_ref().unwrap().document_id,
            201
        );
    }

    #[test]
    fn date_pairing_never_pairs_backwards() {
        let pairs = DirectionalPairs {
            incoming: vec![pair(1, 100, Some("2026-02-01"), Direction::Incoming)],
            outgoing: vec![pair(2, 200, Some("2026-01-15"), Direction::Outgoing)],
        };
        let rows = build_correspondence_matrix(&pairs, &[]);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.incoming.is_none() || r.outgoing.is_none()));
    }

    #[test]
    fn closest_successor_wins() {
        let pairs = DirectionalPairs {
            incoming: vec![pair(1, 100, Some("2026-01-10"), Direction::Incoming)],
            outgoing: vec![
                pair(2, 200, Some("2026-03-01"), Direction::Outgoing),
                pair(3, 201, Some("2026-01-12"), Direction::Outgoing),
            ],
        };
        let rows = build_correspondence_matrix(&pairs, &[]);
        let paired = rows
            .iter()
            .find(|r| r.incoming.is_some() && r.outgoing.is_some())
            .unwrap();
        assert_eq!(paired.outgoing.as_ref().unwrap().document_id, 201);
    }

    #[test]
    fn undated_outgoing_only_matches_undated_incoming() {
        let pairs = DirectionalPairs {
            incoming: vec![pair(1, 100, Some("2026-01-10"), Direction::Incoming)],
            outgoing: vec![pair(2, 200, None, Direction::Outgoing)],
        };
        let rows = build_correspondence_matrix(&pairs, &[]);
        assert_eq!(rows.len(), 2);

        let pairs = DirectionalPairs {
            incoming: vec![pair(1, 100, None, Direction::Incoming)],
            outgoing: vec![pair(2, 200, None, Direction::Outgoing)],
        };
        let rows = build_correspondence_matrix(&pairs, &[]);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn unassigned_links_enter_the_pools() {
        let pairs = DirectionalPairs::default();
        let links = vec![
            UnassignedDocumentLink {
                document_id: 300,
                number: Some("AG-3/2026".to_string()),
                subject: None,
                date: Some("2026-01-10".parse().unwrap()),
                direction: Direction::Incoming,
            },
            UnassignedDocumentLink {
                document_id: 301,
                number: Some("OUT-8/2026".to_string()),
                subject: None,
                date: Some("2026-01-11".parse().unwrap()),
                direction: Direction::Outgoing,
            },
        ];
        let rows = build_correspondence_matrix(&pairs, &links);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].incoming.as_ref().unwrap().unassigned());
        assert!(rows[0].outgoing.as_ref().unwrap().unassigned());
    }

    #[test]
    fn empty_inputs_yield_empty_matrix() {
        let rows = build_correspondence_matrix(&DirectionalPairs::default(), &[]);
        assert!(rows.is_empty());
    }
}
