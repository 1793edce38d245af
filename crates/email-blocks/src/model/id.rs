//! Opaque block identifiers.
//!
//! Identifiers are assigned by the caller at insertion time and treated as
//! pre-unique opaque strings; the document model never generates one behind
//! the caller's back.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An opaque, externally supplied block identifier.
///
/// This is the universal handle for blocks in a document: the key of the
/// document mapping and the element type of every child-id list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    /// Wraps an already-unique identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        BlockId(id.into())
    }

    /// Generates a fresh random identifier (UUID v4, hyphenated lowercase).
    ///
    /// Convenience for callers without their own id scheme; nothing in the
    /// model requires ids of this shape.
    pub fn random() -> Self {
        BlockId(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(s: &str) -> Self {
        BlockId(s.to_string())
    }
}

impl From<String> for BlockId {
    fn from(s: String) -> Self {
        BlockId(s)
    }
}

impl Borrow<str> for BlockId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
