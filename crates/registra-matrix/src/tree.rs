//! Reply-chain forest for the dispatch timeline view.
//!
//! Process records form parent/child chains through
//! `parent_record_id` ("this record answers that record"). The timeline
//! renderer needs those chains as an indented, deterministically ordered
//! list, which this module produces in two steps: build a forest, then
//! flatten it depth-first.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use registra_core::ProcessRecord;

/// One node of the reply forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordNode {
    pub record: ProcessRecord,
    /// 0 for roots, parent depth + 1 for children. Drives indentation.
    pub depth: u32,
    /// Arena indices into [`RecordForest::nodes`], in attach order.
    pub children: Vec<usize>,
}

/// Arena-backed forest of process records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordForest {
    pub nodes: Vec<RecordNode>,
    /// Arena indices of the roots, in sorted record order.
    pub roots: Vec<usize>,
}

impl RecordForest {
    /// Flatten to display order: depth-first pre-order per root, roots
    /// in build order.
    pub fn flatten(&self) -> Vec<&RecordNode> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<usize> = self.roots.iter().rev().copied().collect();
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            out.push(node);
            stack.extend(node.children.iter().rev());
        }
        out
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Build the reply forest from a flat record snapshot.
///
/// Records are stable-sorted by `(sort_order, record_date)` with a
/// missing date sorting first, then walked once. A record attaches to
/// its declared parent only if that parent's node was created earlier
/// in the same pass; a dangling, later-sorted, or self-referencing
/// parent id silently demotes the record to a root. That single-pass
/// rule makes cycles structurally impossible.
pub fn build_record_forest(records: Vec<ProcessRecord>) -> RecordForest {
    let mut sorted = records;
    sorted.sort_by_key(|r| (r.sort_order, r.record_date));

    let mut forest = RecordForest {
        nodes: Vec::with_capacity(sorted.len()),
        roots: Vec::new(),
    };
    let mut index_by_id: HashMap<i64, usize> = HashMap::with_capacity(sorted.len());

    for record in sorted {
        // Parent lookup happens before this record's own id is
        // registered, so a self-referencing record lands as a root.
        let parent_idx = record
            .parent_record_id
            .and_then(|pid| index_by_id.get(&pid).copied());
        let idx = forest.nodes.len();
        match parent_idx {
            Some(p) => {
                let depth = forest.nodes[p].depth + 1;
                forest.nodes.push(RecordNode {
                    record,
                    depth,
                    children: Vec::new(),
                });
                forest.nodes[p].children.push(idx);
            }
            None => {
                forest.nodes.push(RecordNode {
                    record,
                    depth: 0,
                    children: Vec::new(),
                });
                forest.roots.push(idx);
            }
        }
        index_by_id.insert(forest.nodes[idx].record.id, idx);
    }

    debug!(
        subsystem = "tree",
        op = "build_forest",
        record_count = forest.nodes.len(),
        root_count = forest.roots.len(),
        "record forest built"
    );

    forest
}
