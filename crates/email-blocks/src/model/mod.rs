//! Data model types for email documents.
//!
//! - Identifiers (opaque, caller-supplied)
//! - Styles (padding, alignment, font attributes)
//! - Blocks (closed tagged variants with per-type payloads)
//! - Documents (id → block mapping rooted at a designated block)

pub mod block;
pub mod document;
pub mod id;
pub mod style;

pub use block::{
    AvatarData, AvatarProps, Block, BlockKind, ButtonData, ButtonProps, Column,
    ColumnsContainerData, ColumnsContainerProps, ContainerData, ContainerProps, DividerData,
    DividerProps, EmailLayoutData, EmailLayoutProps, HeadingData, HeadingProps, HtmlData,
    HtmlProps, HtmlStyle, ImageData, ImageProps, PaddingStyle, SlotRef, SpacerData, TextData,
    TextProps, TextStyle,
};
pub use document::EmailDocument;
pub use id::BlockId;
pub use style::{AvatarShape, FontWeight, Padding, TextAlignment, VerticalAlignment};
