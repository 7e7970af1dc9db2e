//! Document resolution and direction classification for process records.
//!
//! Two historical data shapes coexist in migrated dispatch data: the
//! current shape (`document_id` + embedded `document` summary) and the
//! legacy shape (separate `incoming_document`/`outgoing_document`
//! fields). This module normalizes a record to one effective document
//! and classifies its direction once, at the start of the pipeline, so
//! the fallback rules never leak into the tree or matrix builders.

use serde::{Deserialize, Serialize};
use tracing::trace;

use registra_core::defaults::OUTGOING_NUMBER_PREFIX;
use registra_core::{Direction, DocPair, DocumentSummary, Error, ProcessRecord, Result};

// =============================================================================
// EFFECTIVE DOCUMENT RESOLUTION
// =============================================================================

/// Which historical shape supplied the effective document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentShape {
    /// Current `document_id`/`document` shape.
    Current,
    /// Legacy `incoming_document` field.
    LegacyIncoming,
    /// Legacy `outgoing_document` field.
    LegacyOutgoing,
}

/// A record's document reference after shape resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveDocument {
    pub document: DocumentSummary,
    pub shape: DocumentShape,
}

/// Resolve which document (if any) a record carries.
///
/// The current shape wins over the legacy fields. Legacy rows carry
/// `document_id = 0` as a null marker, so a zero id is treated as
/// absent and falls through to the legacy fields. Returns `None` for
/// document-less milestones (meetings, internal notes).
pub fn effective_document(record: &ProcessRecord) -> Option<EffectiveDocument> {
    if let Some(id) = record.document_id.filter(|id| *id != 0) {
        let document = record.document.clone().unwrap_or(DocumentSummary {
            id,
            number: None,
            subject: None,
            date: None,
        });
        return Some(EffectiveDocument {
            document,
            shape: DocumentShape::Current,
        });
    }
    if let Some(doc) = &record.incoming_document {
        return Some(EffectiveDocument {
            document: doc.clone(),
            shape: DocumentShape::LegacyIncoming,
        });
    }
    if let Some(doc) = &record.outgoing_document {
        return Some(EffectiveDocument {
            document: doc.clone(),
            shape: DocumentShape::LegacyOutgoing,
        });
    }
    None
}

// =============================================================================
// DIRECTION RULES
// =============================================================================

/// Outcome of applying a direction rule to a document number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleDirection {
    Incoming,
    Outgoing,
    /// The number carries no usable convention (e.g. empty string);
    /// classification falls through to the legacy shape fields.
    Unknown,
}

/// Injectable strategy for classifying a document number's direction.
///
/// The registry convention (outgoing-office prefix) is an
/// organizational naming scheme, not a law of nature, so it is a
/// configuration value rather than a hidden constant.
pub trait DirectionRule {
    fn classify(&self, number: &str) -> RuleDirection;
}

/// Default convention-based rule: numbers stamped with the company's
/// outgoing-office prefix are outgoing, any other non-empty number came
/// from an external agency and is incoming.
#[derive(Debug, Clone)]
pub struct PrefixDirectionRule {
    prefix: String,
}

impl PrefixDirectionRule {
    /// Build a rule for a deployment-specific prefix token.
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(Error::Config(
                "outgoing document-number prefix must not be empty".to_string(),
            ));
        }
        Ok(Self { prefix })
    }
}

impl Default for PrefixDirectionRule {
    fn default() -> Self {
        Self {
            prefix: OUTGOING_NUMBER_PREFIX.to_string(),
        }
    }
}

impl DirectionRule for PrefixDirectionRule {
    fn classify(&self, number: &str) -> RuleDirection {
        if number.is_empty() {
            RuleDirection::Unknown
        } else if number.starts_with(&self.prefix) {
            RuleDirection::Outgoing
        } else {
            RuleDirection::Incoming
        }
    }
}

// =============================================================================
// RECORD CLASSIFICATION
// =============================================================================

/// Classify the direction of a record's document.
///
/// Rule order: a current-shape document with a number string is
/// classified by the injected rule; otherwise the legacy incoming
/// field wins, then the legacy outgoing field. Absence of data yields
/// `None`, never an error.
pub fn classify_record(
    record: &ProcessRecord,
    rule: &dyn DirectionRule,
) -> Option<(Direction, DocumentSummary)> {
    if let Some(effective) = effective_document(record) {
        if effective.shape == DocumentShape::Current {
            if let Some(number) = effective.document.number.as_deref() {
                match rule.classify(number) {
                    RuleDirection::Incoming => {
                        return Some((Direction::Incoming, effective.document))
                    }
                    RuleDirection::Outgoing => {
                        return Some((Direction::Outgoing, effective.document))
                    }
                    RuleDirection::Unknown => {}
                }
            }
        }
    }
    if let Some(doc) = &record.incoming_document {
        return Some((Direction::Incoming, doc.clone()));
    }
    if let Some(doc) = &record.outgoing_document {
        return Some((Direction::Outgoing, doc.clone()));
    }
    None
}

/// Incoming/outgoing document pairs derived from one dispatch order's
/// records, in input record order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionalPairs {
    pub incoming: Vec<DocPair>,
    pub outgoing: Vec<DocPair>,
}

impl DirectionalPairs {
    pub fn is_empty(&self) -> bool {
        self.incoming.is_empty() && self.outgoing.is_empty()
    }
}

/// Partition records into incoming/outgoing document pairs.
///
/// A record normally contributes to at most one list. The exception is
/// a legacy row carrying both an incoming and an outgoing document:
/// those are two separate physical documents on one record and each
/// goes to its list. Document-less milestones contribute nothing.
pub fn partition_records(records: &[ProcessRecord], rule: &dyn DirectionRule) -> DirectionalPairs {
    let mut pairs = DirectionalPairs::default();
    for record in records {
        let current_shape = effective_document(record)
            .filter(|e| e.shape == DocumentShape::Current)
            .map(|e| e.document);
        let ruled = current_shape.as_ref().and_then(|doc| {
            doc.number.as_deref().and_then(|n| match rule.classify(n) {
                RuleDirection::Incoming => Some(Direction::Incoming),
                RuleDirection::Outgoing => Some(Direction::Outgoing),
                RuleDirection::Unknown => None,
            })
        });
        if let (Some(direction), Some(document)) = (ruled, current_shape) {
            trace!(record_id = record.id, document_id = document.id, ?direction, "classified by number convention");
            let pair = DocPair {
                record: record.clone(),
                document,
                direction,
            };
            match direction {
                Direction::Incoming => pairs.incoming.push(pair),
                Direction::Outgoing => pairs.outgoing.push(pair),
            }
            continue;
        }
        if let Some(doc) = &record.incoming_document {
            pairs.incoming.push(DocPair {
                record: record.clone(),
                document: doc.clone(),
                direction: Direction::Incoming,
            });
        }
        if let Some(doc) = &record.outgoing_document {
            pairs.outgoing.push(DocPair {
                record: record.clone(),
                document: doc.clone(),
                direction: Direction::Outgoing,
            });
        }
    }
    pairs
}
