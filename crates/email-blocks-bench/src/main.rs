//! Benchmark for email document encoding/decoding.
//!
//! Synthesizes a large template through the public API (no hand-built
//! JSON), then measures canonical encode and validate-first decode.

use std::time::Instant;

use email_blocks::registry::make_default;
use email_blocks::{
    decode_document, encode_document, BlockId, BlockKind, EmailDocument, SlotRef,
};

/// Repeating content pattern for each section of the synthetic template.
const SECTION_KINDS: &[BlockKind] = &[
    BlockKind::Heading,
    BlockKind::Text,
    BlockKind::Image,
    BlockKind::Button,
    BlockKind::Divider,
    BlockKind::Spacer,
    BlockKind::Html,
    BlockKind::Avatar,
];

/// Builds a document with `sections` three-column sections, each column
/// filled with the full content pattern.
fn build_document(sections: usize) -> EmailDocument {
    let root = BlockId::new("layout");
    let mut doc = EmailDocument::new(root.clone(), make_default(BlockKind::EmailLayout))
        .expect("layout default is a valid root");

    for s in 0..sections {
        let section_id = BlockId::new(format!("section-{s}"));
        doc.insert(
            &root,
            SlotRef::Children,
            None,
            section_id.clone(),
            make_default(BlockKind::ColumnsContainer),
        )
        .expect("insert section");

        for column in 0..3u32 {
            for (k, kind) in SECTION_KINDS.iter().enumerate() {
                let id = BlockId::new(format!("s{s}-c{column}-b{k}"));
                doc.insert(&section_id, SlotRef::Column(column), None, id, make_default(*kind))
                    .expect("insert content block");
            }
        }
    }
    doc
}

fn main() {
    let sections: usize = std::env::args()
        .nth(1)
        .and_then(|v| v.parse().ok())
        .unwrap_or(500);

    println!("=== Build ===");
    let build_start = Instant::now();
    let doc = build_document(sections);
    println!(
        "Built {} blocks in {:?}",
        doc.len(),
        build_start.elapsed()
    );

    let validate_start = Instant::now();
    let violations = doc.validate();
    println!(
        "Validated in {:?} ({} violation(s))",
        validate_start.elapsed(),
        violations.len()
    );
    assert!(violations.is_empty());

    // Benchmark encoding
    const ITERS: u32 = 10;
    for _ in 0..3 {
        let _ = encode_document(&doc).expect("Failed to encode");
    }
    let encode_start = Instant::now();
    let mut encoded = String::new();
    for _ in 0..ITERS {
        encoded = encode_document(&doc).expect("Failed to encode");
    }
    let encode_time = encode_start.elapsed() / ITERS;

    println!("\n=== Encode ===");
    println!("{} bytes in {:?} (avg of {} iterations)", encoded.len(), encode_time, ITERS);
    println!(
        "  Throughput: {:.2} MB/s",
        (encoded.len() as f64 / 1_000_000.0) / encode_time.as_secs_f64()
    );

    // Canonical form is deterministic
    let encoded2 = encode_document(&doc).expect("Failed to encode");
    assert_eq!(encoded, encoded2, "Canonical encoding should be deterministic");

    // Benchmark decoding (includes the validate-first import walk)
    for _ in 0..3 {
        let _ = decode_document(&encoded).expect("Failed to decode");
    }
    let decode_start = Instant::now();
    let mut decoded = None;
    for _ in 0..ITERS {
        decoded = Some(decode_document(&encoded).expect("Failed to decode"));
    }
    let decode_time = decode_start.elapsed() / ITERS;
    let decoded = decoded.expect("at least one iteration");

    println!("\n=== Decode ===");
    println!("{:?} (avg of {} iterations, validation included)", decode_time, ITERS);
    println!(
        "  Throughput: {:.2} MB/s",
        (encoded.len() as f64 / 1_000_000.0) / decode_time.as_secs_f64()
    );
    assert_eq!(decoded.len(), doc.len());

    // Summary
    println!("\n=== Summary ===");
    println!("Sections: {sections}");
    println!("Blocks: {}", doc.len());
    println!(
        "JSON size: {} bytes ({:.1} MB)",
        encoded.len(),
        encoded.len() as f64 / 1_000_000.0
    );
    println!(
        "Per block: {:.0} bytes, encode {:.2} µs, decode {:.2} µs",
        encoded.len() as f64 / doc.len() as f64,
        encode_time.as_secs_f64() * 1_000_000.0 / doc.len() as f64,
        decode_time.as_secs_f64() * 1_000_000.0 / doc.len() as f64
    );
}
