//! Error types for the block catalog, document operations, and JSON boundary.
//!
//! All failures are local, synchronous, and recoverable. Every mutating
//! document operation is atomic: on error the document is exactly as it was
//! before the call.

use thiserror::Error;

use crate::model::{BlockId, SlotRef};

/// A type tag outside the registered catalog was requested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown block type {tag:?}")]
pub struct UnknownTypeError {
    /// The unrecognized tag as supplied by the caller.
    pub tag: String,
}

/// Error from a structural operation on a document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DocumentError {
    #[error("block {id} does not exist in the document")]
    UnknownBlock { id: BlockId },

    #[error("parent block {id} does not exist in the document")]
    UnknownParent { id: BlockId },

    #[error("block id {id} already exists in the document")]
    DuplicateId { id: BlockId },

    #[error("block {id} declares no child slot {slot}")]
    InvalidSlot { id: BlockId, slot: SlotRef },

    #[error("block {id} still has children; removing it requires cascade")]
    NonLeafRemoval { id: BlockId },

    #[error("relinking {id} under {new_parent} would create a cycle")]
    Cycle { id: BlockId, new_parent: BlockId },

    #[error("data does not satisfy the schema of block {id}: {reason}")]
    SchemaMismatch { id: BlockId, reason: String },

    #[error("the root block {id} cannot be removed or relocated")]
    RootMutation { id: BlockId },
}

/// One invariant violation found by a full-document walk.
///
/// Violations are reported, not thrown: [`crate::validate::validate_document`]
/// returns every violation it finds so import paths can reject an external
/// document with a complete diagnosis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("root id {root} is not present in the document")]
    MissingRoot { root: BlockId },

    #[error("slot {slot} of {container} references missing block {child}")]
    DanglingReference {
        container: BlockId,
        slot: SlotRef,
        child: BlockId,
    },

    #[error("block {child} is claimed by more than one parent slot (again in {slot} of {container})")]
    DuplicateParentage {
        child: BlockId,
        container: BlockId,
        slot: SlotRef,
    },

    #[error("block {start} transitively references itself")]
    Cycle { start: BlockId },

    #[error("block {id} violates its type schema: {reason}")]
    SchemaMismatch { id: BlockId, reason: String },
}

/// Error while encoding a document to its persisted JSON form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("block id {id:?} collides with the reserved \"root\" key")]
    ReservedId { id: BlockId },

    #[error("JSON serialization failed: {message}")]
    Json { message: String },
}

/// Error while decoding an externally supplied document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("malformed JSON: {message}")]
    Json { message: String },

    #[error("document is not a JSON object")]
    NotAnObject,

    #[error("document has no \"root\" key")]
    MissingRootKey,

    #[error("the \"root\" key must hold a block id string")]
    RootNotAnId,

    #[error("entry {id:?} is not a valid block: {message}")]
    MalformedBlock { id: String, message: String },

    #[error("document rejected with {} invariant violation(s)", violations.len())]
    InvalidDocument { violations: Vec<Violation> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_ids() {
        let err = DocumentError::InvalidSlot {
            id: BlockId::new("col-1"),
            slot: SlotRef::Column(2),
        };
        assert_eq!(
            err.to_string(),
            "block col-1 declares no child slot columns[2].childrenIds"
        );

        let violation = Violation::DanglingReference {
            container: BlockId::new("root"),
            slot: SlotRef::Children,
            child: BlockId::new("ghost"),
        };
        assert_eq!(
            violation.to_string(),
            "slot childrenIds of root references missing block ghost"
        );
    }

    #[test]
    fn test_unknown_type_error_quotes_tag() {
        let err = UnknownTypeError { tag: "LoopContainer".to_string() };
        assert_eq!(err.to_string(), "unknown block type \"LoopContainer\"");
    }
}
