//! Simple inspector for persisted email-template JSON files.

use std::fs;

use email_blocks::{decode_document, Block, BlockId, EmailDocument, SlotRef};

fn describe(block: &Block) -> String {
    match block {
        Block::Heading { data } => format!("Heading {:?}", data.props.text),
        Block::Text { data } => {
            let preview: String = data.props.text.chars().take(40).collect();
            format!("Text {preview:?}")
        }
        Block::Button { data } => format!("Button {:?} -> {}", data.props.text, data.props.url),
        Block::Image { data } => format!("Image alt={:?}", data.props.alt),
        Block::Avatar { data } => format!("Avatar {:?}", data.props.shape),
        Block::Divider { data } => format!("Divider {}", data.props.line_color),
        Block::Spacer { .. } => "Spacer".to_string(),
        Block::Html { data } => format!("Html ({} bytes)", data.props.contents.len()),
        Block::ColumnsContainer { data } => {
            format!("ColumnsContainer x{}", data.props.columns_count)
        }
        Block::Container { .. } => "Container".to_string(),
        Block::EmailLayout { .. } => "EmailLayout".to_string(),
    }
}

fn print_tree(doc: &EmailDocument, id: &BlockId, depth: usize) {
    let indent = "  ".repeat(depth);
    match doc.get(id) {
        Some(block) => {
            println!("{indent}{} [{}]", describe(block), id);
            for slot in block.slots() {
                let children = block.child_ids(slot).unwrap_or(&[]);
                if matches!(slot, SlotRef::Column(_)) {
                    println!("{indent}  ({slot}: {} block(s))", children.len());
                }
                for child in children {
                    print_tree(doc, child, depth + 1);
                }
            }
        }
        None => println!("{indent}<missing block {id}>"),
    }
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "template.json".to_string());

    println!("Reading: {}", path);

    let json = fs::read_to_string(&path).expect("Failed to read file");
    println!("File size: {} bytes", json.len());

    let doc = decode_document(&json).expect("Failed to decode");

    println!("\n=== Document ===");
    println!("Blocks: {}", doc.len());
    println!("Root: {}", doc.root_id());
    println!();
    print_tree(&doc, &doc.root_id().clone(), 0);
}
