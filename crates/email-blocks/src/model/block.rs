//! The closed tagged-variant block type and its per-type payloads.
//!
//! A block serializes to `{ "type": <tag>, "data": { "props": ..., "style": ... } }`.
//! Container-like payloads carry ordered child-id lists inside `props`; the
//! document model reaches those lists only through the slot surface
//! ([`Block::slots`], [`Block::child_ids`]) and stays agnostic to the
//! concrete set of type tags.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::UnknownTypeError;
use crate::model::id::BlockId;
use crate::model::style::{
    AvatarShape, FontWeight, Padding, TextAlignment, VerticalAlignment,
};

/// Discriminant of a block, matching the persisted `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Heading,
    Text,
    Button,
    Image,
    Avatar,
    Divider,
    Spacer,
    Html,
    ColumnsContainer,
    Container,
    EmailLayout,
}

impl BlockKind {
    /// Returns the persisted type tag.
    pub fn as_tag(self) -> &'static str {
        match self {
            BlockKind::Heading => "Heading",
            BlockKind::Text => "Text",
            BlockKind::Button => "Button",
            BlockKind::Image => "Image",
            BlockKind::Avatar => "Avatar",
            BlockKind::Divider => "Divider",
            BlockKind::Spacer => "Spacer",
            BlockKind::Html => "Html",
            BlockKind::ColumnsContainer => "ColumnsContainer",
            BlockKind::Container => "Container",
            BlockKind::EmailLayout => "EmailLayout",
        }
    }

    /// Resolves a persisted type tag to its kind.
    pub fn from_tag(tag: &str) -> Result<BlockKind, UnknownTypeError> {
        match tag {
            "Heading" => Ok(BlockKind::Heading),
            "Text" => Ok(BlockKind::Text),
            "Button" => Ok(BlockKind::Button),
            "Image" => Ok(BlockKind::Image),
            "Avatar" => Ok(BlockKind::Avatar),
            "Divider" => Ok(BlockKind::Divider),
            "Spacer" => Ok(BlockKind::Spacer),
            "Html" => Ok(BlockKind::Html),
            "ColumnsContainer" => Ok(BlockKind::ColumnsContainer),
            "Container" => Ok(BlockKind::Container),
            "EmailLayout" => Ok(BlockKind::EmailLayout),
            _ => Err(UnknownTypeError { tag: tag.to_string() }),
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Names one child-id list declared by a container block's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotRef {
    /// The single `childrenIds` list of `Container` / `EmailLayout`.
    Children,
    /// The `columns[n].childrenIds` list of `ColumnsContainer`.
    Column(u32),
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotRef::Children => f.write_str("childrenIds"),
            SlotRef::Column(n) => write!(f, "columns[{n}].childrenIds"),
        }
    }
}

// =============================================================================
// Per-type payloads
// =============================================================================

/// Style carried by most block types: just box padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaddingStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingProps {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingData {
    pub props: HeadingProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<PaddingStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextProps {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextData {
    pub props: TextProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonProps {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonData {
    pub props: ButtonProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<PaddingStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProps {
    pub url: String,
    pub alt: String,
    pub content_alignment: VerticalAlignment,
    /// Wrapping link target; `None` renders the image unlinked.
    pub link_href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageData {
    pub props: ImageProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<PaddingStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarProps {
    pub image_url: String,
    pub shape: AvatarShape,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarData {
    pub props: AvatarProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<PaddingStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerProps {
    pub line_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividerData {
    pub props: DividerProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<PaddingStyle>,
}

/// Spacer carries no payload at all; `data` persists as `{}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpacerData {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlProps {
    /// Raw markup, passed through to the renderer untouched.
    pub contents: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlData {
    pub props: HtmlProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<HtmlStyle>,
}

/// One column of a multi-column layout: an ordered child-id list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    #[serde(default)]
    pub children_ids: Vec<BlockId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnsContainerProps {
    pub columns_gap: u32,
    /// Must agree with `columns.len()`; checked by [`Block::check_shape`].
    pub columns_count: u32,
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnsContainerData {
    pub props: ColumnsContainerProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<PaddingStyle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProps {
    #[serde(default)]
    pub children_ids: Vec<BlockId>,
}

impl ContainerProps {
    fn is_empty(&self) -> bool {
        self.children_ids.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerData {
    #[serde(default, skip_serializing_if = "ContainerProps::is_empty")]
    pub props: ContainerProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<PaddingStyle>,
}

/// Canvas-level root block: backdrop, content canvas, and top-level children.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailLayoutProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default)]
    pub children_ids: Vec<BlockId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmailLayoutData {
    pub props: EmailLayoutProps,
}

// =============================================================================
// Block
// =============================================================================

/// A typed, styleable document node.
///
/// The set of variants is closed; extending it means adding one variant
/// here, one catalog entry in [`crate::registry`], and (for nesting types)
/// arms in the slot surface below. Nothing else in the crate matches on
/// the tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Block {
    Heading { data: HeadingData },
    Text { data: TextData },
    Button { data: ButtonData },
    Image { data: ImageData },
    Avatar { data: AvatarData },
    Divider { data: DividerData },
    Spacer { data: SpacerData },
    Html { data: HtmlData },
    ColumnsContainer { data: ColumnsContainerData },
    Container { data: ContainerData },
    EmailLayout { data: EmailLayoutData },
}

impl Block {
    /// Returns this block's kind.
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Heading { .. } => BlockKind::Heading,
            Block::Text { .. } => BlockKind::Text,
            Block::Button { .. } => BlockKind::Button,
            Block::Image { .. } => BlockKind::Image,
            Block::Avatar { .. } => BlockKind::Avatar,
            Block::Divider { .. } => BlockKind::Divider,
            Block::Spacer { .. } => BlockKind::Spacer,
            Block::Html { .. } => BlockKind::Html,
            Block::ColumnsContainer { .. } => BlockKind::ColumnsContainer,
            Block::Container { .. } => BlockKind::Container,
            Block::EmailLayout { .. } => BlockKind::EmailLayout,
        }
    }

    /// Child-id lists declared by this block's schema, in slot order.
    ///
    /// Empty for leaf types. For multi-column layouts there is one slot per
    /// column currently present in `props.columns`.
    pub fn slots(&self) -> Vec<SlotRef> {
        match self {
            Block::ColumnsContainer { data } => (0..data.props.columns.len())
                .map(|i| SlotRef::Column(i as u32))
                .collect(),
            Block::Container { .. } | Block::EmailLayout { .. } => vec![SlotRef::Children],
            _ => Vec::new(),
        }
    }

    /// The ordered child-id list at `slot`, or `None` if this block's
    /// schema declares no such slot.
    pub fn child_ids(&self, slot: SlotRef) -> Option<&[BlockId]> {
        match (self, slot) {
            (Block::ColumnsContainer { data }, SlotRef::Column(n)) => data
                .props
                .columns
                .get(n as usize)
                .map(|c| c.children_ids.as_slice()),
            (Block::Container { data }, SlotRef::Children) => {
                Some(data.props.children_ids.as_slice())
            }
            (Block::EmailLayout { data }, SlotRef::Children) => {
                Some(data.props.children_ids.as_slice())
            }
            _ => None,
        }
    }

    pub(crate) fn child_ids_mut(&mut self, slot: SlotRef) -> Option<&mut Vec<BlockId>> {
        match (self, slot) {
            (Block::ColumnsContainer { data }, SlotRef::Column(n)) => data
                .props
                .columns
                .get_mut(n as usize)
                .map(|c| &mut c.children_ids),
            (Block::Container { data }, SlotRef::Children) => Some(&mut data.props.children_ids),
            (Block::EmailLayout { data }, SlotRef::Children) => {
                Some(&mut data.props.children_ids)
            }
            _ => None,
        }
    }

    /// Iterates every child id across all slots, in slot order.
    pub fn children(&self) -> impl Iterator<Item = &BlockId> {
        self.slots()
            .into_iter()
            .filter_map(|slot| self.child_ids(slot))
            .flatten()
    }

    /// Total number of children across all slots.
    pub fn child_count(&self) -> usize {
        self.children().count()
    }

    /// Returns true if any slot holds at least one child.
    pub fn has_children(&self) -> bool {
        self.children().next().is_some()
    }

    /// Checks the payload's internal consistency against its type schema.
    ///
    /// Serde already enforces field shape at the boundary; this covers what
    /// field types cannot express, currently the column-count agreement of
    /// multi-column layouts.
    pub fn check_shape(&self) -> Result<(), String> {
        if let Block::ColumnsContainer { data } = self {
            let declared = data.props.columns_count as usize;
            let actual = data.props.columns.len();
            if declared != actual {
                return Err(format!(
                    "columnsCount is {declared} but {actual} column(s) are present"
                ));
            }
        }
        Ok(())
    }
}
