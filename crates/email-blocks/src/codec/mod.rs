//! JSON boundary for persisted documents.
//!
//! The persisted form is a single object: a `"root"` key naming the root
//! identifier, and one key per block id mapping to the block's tagged
//! representation. Output keys are sorted, so encoding is canonical —
//! equal documents encode to identical text.
//!
//! Import never repairs: [`decode_document`] validates the assembled
//! document and rejects it with the full violation list.

use rustc_hash::FxHashMap;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{DecodeError, EncodeError};
use crate::model::{Block, BlockId, EmailDocument};

/// The reserved mapping key naming the root identifier.
const ROOT_KEY: &str = "root";

/// Builds the persisted JSON value for `doc`.
///
/// Fails if a block id collides with the reserved `"root"` key, which the
/// persisted form cannot represent.
pub fn document_to_value(doc: &EmailDocument) -> Result<Value, EncodeError> {
    let mut map = Map::new();
    map.insert(
        ROOT_KEY.to_string(),
        Value::String(doc.root_id().as_str().to_string()),
    );
    for (id, block) in doc.iter() {
        if id.as_str() == ROOT_KEY {
            return Err(EncodeError::ReservedId { id: id.clone() });
        }
        let value = serde_json::to_value(block)
            .map_err(|e| EncodeError::Json { message: e.to_string() })?;
        map.insert(id.as_str().to_string(), value);
    }
    Ok(Value::Object(map))
}

/// Encodes `doc` to compact canonical JSON.
pub fn encode_document(doc: &EmailDocument) -> Result<String, EncodeError> {
    let value = document_to_value(doc)?;
    serde_json::to_string(&value).map_err(|e| EncodeError::Json { message: e.to_string() })
}

/// Encodes `doc` to pretty-printed canonical JSON.
pub fn encode_document_pretty(doc: &EmailDocument) -> Result<String, EncodeError> {
    let value = document_to_value(doc)?;
    serde_json::to_string_pretty(&value).map_err(|e| EncodeError::Json { message: e.to_string() })
}

/// Decodes an externally supplied document, validating before accepting.
///
/// The returned document is guaranteed invariant-clean; any violation
/// rejects the whole input via [`DecodeError::InvalidDocument`].
pub fn decode_document(json: &str) -> Result<EmailDocument, DecodeError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| DecodeError::Json { message: e.to_string() })?;
    let Value::Object(map) = value else {
        return Err(DecodeError::NotAnObject);
    };
    let root = match map.get(ROOT_KEY) {
        None => return Err(DecodeError::MissingRootKey),
        Some(Value::String(root)) => BlockId::new(root.clone()),
        Some(_) => return Err(DecodeError::RootNotAnId),
    };

    let mut blocks: FxHashMap<BlockId, Block> = FxHashMap::default();
    for (key, entry) in &map {
        if key == ROOT_KEY {
            continue;
        }
        let block: Block =
            serde_json::from_value(entry.clone()).map_err(|e| DecodeError::MalformedBlock {
                id: key.clone(),
                message: e.to_string(),
            })?;
        blocks.insert(BlockId::new(key.clone()), block);
    }

    let doc = EmailDocument::from_parts(root, blocks);
    let violations = doc.validate();
    if !violations.is_empty() {
        warn!(count = violations.len(), "rejecting imported document");
        return Err(DecodeError::InvalidDocument { violations });
    }
    Ok(doc)
}
