//! Full-document invariant validation.
//!
//! Structural field shape is already enforced by serde at the boundary;
//! this module covers what needs the whole mapping: reference integrity,
//! single parentage, acyclicity, and per-type schema consistency. Nothing
//! here throws — every violation is collected and reported, so import
//! paths can reject an external document with a complete diagnosis rather
//! than attempting repair.
//!
//! Detached blocks (present in the mapping, referenced by no slot) are not
//! violations; importers may legitimately hold clipboard subtrees.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::Violation;
use crate::model::{BlockId, EmailDocument};

/// Walks `doc` and reports every invariant violation, in deterministic
/// (sorted-id) order.
pub fn validate_document(doc: &EmailDocument) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !doc.contains(doc.root_id()) {
        violations.push(Violation::MissingRoot { root: doc.root_id().clone() });
    }

    let mut ids: Vec<&BlockId> = doc.iter().map(|(id, _)| id).collect();
    ids.sort();

    // Reference integrity and single parentage in one pass.
    let mut claimed: FxHashSet<&BlockId> = FxHashSet::default();
    for id in &ids {
        let Some(block) = doc.get(id) else { continue };
        if let Err(reason) = block.check_shape() {
            violations.push(Violation::SchemaMismatch { id: (*id).clone(), reason });
        }
        for slot in block.slots() {
            let Some(children) = block.child_ids(slot) else { continue };
            for child in children {
                if !doc.contains(child) {
                    violations.push(Violation::DanglingReference {
                        container: (*id).clone(),
                        slot,
                        child: child.clone(),
                    });
                }
                if !claimed.insert(child) {
                    violations.push(Violation::DuplicateParentage {
                        child: child.clone(),
                        container: (*id).clone(),
                        slot,
                    });
                }
            }
        }
    }

    detect_cycles(doc, &ids, &mut violations);
    violations
}

/// Iterative coloring DFS over the child graph; one violation per
/// back-edge found.
fn detect_cycles(doc: &EmailDocument, ids: &[&BlockId], violations: &mut Vec<Violation>) {
    const GRAY: u8 = 1;
    const BLACK: u8 = 2;

    enum Visit<'a> {
        Enter(&'a BlockId),
        Exit(&'a BlockId),
    }

    let mut color: FxHashMap<&BlockId, u8> = FxHashMap::default();
    for start in ids {
        if color.contains_key(*start) {
            continue;
        }
        let mut stack = vec![Visit::Enter(*start)];
        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(id) => {
                    if color.contains_key(id) {
                        continue;
                    }
                    color.insert(id, GRAY);
                    stack.push(Visit::Exit(id));
                    let Some(block) = doc.get(id) else { continue };
                    for child in block.children() {
                        match color.get(child) {
                            Some(&GRAY) => {
                                violations.push(Violation::Cycle { start: child.clone() });
                            }
                            Some(_) => {}
                            None => {
                                if doc.contains(child) {
                                    stack.push(Visit::Enter(child));
                                }
                            }
                        }
                    }
                }
                Visit::Exit(id) => {
                    color.insert(id, BLACK);
                }
            }
        }
    }
}
