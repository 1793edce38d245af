//! The block-type catalog: menu entries and default-instance factories.
//!
//! The catalog is immutable, constructed once, and shared by reference;
//! factories are pure value constructors with no shared state between
//! calls. Adding a block type means one `Block` variant, one entry in
//! [`CATALOG`], and one arm in [`make_default`] — the document model needs
//! no change.

use crate::error::UnknownTypeError;
use crate::i18n;
use crate::model::block::{
    AvatarData, AvatarProps, Block, BlockKind, ButtonData, ButtonProps, Column,
    ColumnsContainerData, ColumnsContainerProps, ContainerData, DividerData, DividerProps,
    EmailLayoutData, EmailLayoutProps, HeadingData, HeadingProps, HtmlData, HtmlProps, HtmlStyle,
    ImageData, ImageProps, PaddingStyle, SpacerData, TextData, TextProps, TextStyle,
};
use crate::model::style::{AvatarShape, FontWeight, Padding, VerticalAlignment};

/// One insertion-menu entry: tag, label key, and icon reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub kind: BlockKind,
    /// Key into the localization table; also the English label.
    pub label_key: &'static str,
    /// Icon identifier resolved by the surrounding UI.
    pub icon: &'static str,
}

/// Every insertable block type, in menu-presentation order.
///
/// `EmailLayout` is deliberately absent: it is the document root, not a
/// menu item.
pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry { kind: BlockKind::Heading, label_key: "Heading", icon: "HMobiledataOutlined" },
    CatalogEntry { kind: BlockKind::Text, label_key: "Text", icon: "NotesOutlined" },
    CatalogEntry { kind: BlockKind::Button, label_key: "Button", icon: "SmartButtonOutlined" },
    CatalogEntry { kind: BlockKind::Image, label_key: "Image", icon: "ImageOutlined" },
    CatalogEntry { kind: BlockKind::Avatar, label_key: "Avatar", icon: "AccountCircleOutlined" },
    CatalogEntry { kind: BlockKind::Divider, label_key: "Divider", icon: "HorizontalRuleOutlined" },
    CatalogEntry { kind: BlockKind::Spacer, label_key: "Spacer", icon: "Crop32Outlined" },
    CatalogEntry { kind: BlockKind::Html, label_key: "HTML", icon: "HtmlOutlined" },
    CatalogEntry {
        kind: BlockKind::ColumnsContainer,
        label_key: "Columns",
        icon: "ViewColumnOutlined",
    },
    CatalogEntry { kind: BlockKind::Container, label_key: "Container", icon: "LibraryAddOutlined" },
];

/// A catalog entry resolved for presentation: localized label included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeListing {
    pub kind: BlockKind,
    pub tag: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Enumerates the insertable types in menu order with localized labels.
pub fn list_types() -> impl Iterator<Item = TypeListing> {
    CATALOG.iter().map(|entry| TypeListing {
        kind: entry.kind,
        tag: entry.kind.as_tag(),
        label: i18n::lookup(entry.label_key),
        icon: entry.icon,
    })
}

const DEFAULT_PADDING: Padding = Padding::symmetric(16, 24);

fn padded() -> Option<PaddingStyle> {
    Some(PaddingStyle { padding: Some(DEFAULT_PADDING) })
}

/// Builds a fully populated, ready-to-insert default instance of `kind`.
///
/// Two calls return two independently mutable values.
pub fn make_default(kind: BlockKind) -> Block {
    match kind {
        BlockKind::Heading => Block::Heading {
            data: HeadingData {
                props: HeadingProps { text: "Heading".to_string() },
                style: padded(),
            },
        },
        BlockKind::Text => Block::Text {
            data: TextData {
                props: TextProps { text: "My new text block".to_string() },
                style: Some(TextStyle {
                    padding: Some(DEFAULT_PADDING),
                    font_weight: Some(FontWeight::Normal),
                }),
            },
        },
        BlockKind::Button => Block::Button {
            data: ButtonData {
                props: ButtonProps {
                    text: "Button".to_string(),
                    url: "https://listmonk.app".to_string(),
                },
                style: padded(),
            },
        },
        BlockKind::Image => Block::Image {
            data: ImageData {
                props: ImageProps {
                    url: "https://upload.wikimedia.org/wikipedia/commons/3/3f/Placeholder_view_vector.svg"
                        .to_string(),
                    alt: "Sample product".to_string(),
                    content_alignment: VerticalAlignment::Middle,
                    link_href: None,
                },
                style: padded(),
            },
        },
        BlockKind::Avatar => Block::Avatar {
            data: AvatarData {
                props: AvatarProps {
                    image_url:
                        "https://upload.wikimedia.org/wikipedia/commons/8/89/Portrait_Placeholder.png"
                            .to_string(),
                    shape: AvatarShape::Circle,
                },
                style: padded(),
            },
        },
        BlockKind::Divider => Block::Divider {
            data: DividerData {
                props: DividerProps { line_color: "#CCCCCC".to_string() },
                style: Some(PaddingStyle {
                    padding: Some(Padding { top: 16, bottom: 16, left: 0, right: 0 }),
                }),
            },
        },
        BlockKind::Spacer => Block::Spacer { data: SpacerData {} },
        BlockKind::Html => Block::Html {
            data: HtmlData {
                props: HtmlProps { contents: "<strong>Hello world</strong>".to_string() },
                style: Some(HtmlStyle {
                    font_size: Some(16),
                    text_align: None,
                    padding: Some(DEFAULT_PADDING),
                }),
            },
        },
        BlockKind::ColumnsContainer => Block::ColumnsContainer {
            data: ColumnsContainerData {
                props: ColumnsContainerProps {
                    columns_gap: 16,
                    columns_count: 3,
                    columns: vec![Column::default(), Column::default(), Column::default()],
                },
                style: padded(),
            },
        },
        BlockKind::Container => Block::Container {
            data: ContainerData { props: Default::default(), style: padded() },
        },
        BlockKind::EmailLayout => Block::EmailLayout {
            data: EmailLayoutData {
                props: EmailLayoutProps {
                    backdrop_color: Some("#F5F5F5".to_string()),
                    canvas_color: Some("#FFFFFF".to_string()),
                    text_color: Some("#262626".to_string()),
                    font_family: None,
                    children_ids: Vec::new(),
                },
            },
        },
    }
}

/// [`make_default`] addressed by persisted tag; unrecognized tags fail.
pub fn make_default_for_tag(tag: &str) -> Result<Block, UnknownTypeError> {
    Ok(make_default(BlockKind::from_tag(tag)?))
}
