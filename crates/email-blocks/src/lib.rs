//! Block document model and type catalog for a visual email-template
//! composer.
//!
//! An email template is a tree of typed, styleable blocks: headings, text,
//! buttons, images, containers, multi-column layouts. This crate owns the
//! two structural cores of that editor:
//!
//! - the **registry** ([`registry`]): for each block type, the shape of its
//!   payload and a pure factory producing a ready-to-insert default;
//! - the **document tree model** ([`model::EmailDocument`]): stable block
//!   identifiers mapped to blocks, child-id lists forming a tree, and
//!   atomic structural operations that preserve the tree invariants.
//!
//! Rendering, drag-and-drop, undo history, and persistence live in the
//! surrounding application; this crate only meets them at two seams: the
//! JSON boundary ([`codec`]) and the localized labels of the insertion
//! menu ([`i18n`]).
//!
//! # Quick Start
//!
//! ```rust
//! use email_blocks::{BlockId, BlockKind, EmailDocument, SlotRef};
//! use email_blocks::registry::make_default;
//! use email_blocks::codec::encode_document;
//!
//! // A document rooted at the canvas-level layout block.
//! let root = BlockId::new("layout-1");
//! let mut doc = EmailDocument::new(root.clone(), make_default(BlockKind::EmailLayout)).unwrap();
//!
//! // The caller owns id assignment; the model only checks uniqueness.
//! doc.insert(&root, SlotRef::Children, None, BlockId::new("heading-1"),
//!     make_default(BlockKind::Heading)).unwrap();
//!
//! assert!(doc.validate().is_empty());
//! let json = encode_document(&doc).unwrap();
//! assert!(json.contains("\"Heading\""));
//! ```
//!
//! # Modules
//!
//! - [`model`]: core data types (BlockId, Block, styles, EmailDocument)
//! - [`registry`]: the type catalog and default factories
//! - [`validate`]: full-document invariant reporting
//! - [`codec`]: JSON encoding/decoding with validate-first import
//! - [`i18n`]: read-only localization table
//! - [`error`]: error types
//!
//! # Concurrency
//!
//! Everything here is synchronous and single-owner: the registry catalog
//! and string table are immutable process-wide state; a document is
//! exclusively owned by whoever holds it. Collaborative editing is the
//! embedding application's problem.

pub mod codec;
pub mod error;
pub mod i18n;
pub mod model;
pub mod registry;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::{decode_document, document_to_value, encode_document, encode_document_pretty};
pub use error::{
    DecodeError, DocumentError, EncodeError, UnknownTypeError, Violation,
};
pub use model::{Block, BlockId, BlockKind, EmailDocument, Padding, SlotRef};
pub use registry::{list_types, make_default, make_default_for_tag, CatalogEntry, TypeListing, CATALOG};
pub use validate::validate_document;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
