//! The in-memory email document: an id → block mapping rooted at a
//! designated block.
//!
//! Every mutating operation is atomic — all checks run before the first
//! write, so a failed call leaves the document untouched. The model never
//! inspects type tags; container structure is reached exclusively through
//! the slot surface declared by [`Block`].

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{DocumentError, Violation};
use crate::model::block::{Block, SlotRef};
use crate::model::id::BlockId;

/// A document: stable identifiers mapped to blocks, plus the root id.
///
/// Identifiers are caller-supplied and opaque; the surrounding editor owns
/// id generation. The document only checks uniqueness at insertion time.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailDocument {
    root: BlockId,
    blocks: FxHashMap<BlockId, Block>,
}

impl EmailDocument {
    /// Creates a document holding a single root block.
    ///
    /// The root must satisfy its type schema and carry no child references
    /// yet; children arrive through [`EmailDocument::insert`].
    pub fn new(root_id: BlockId, root: Block) -> Result<Self, DocumentError> {
        root.check_shape().map_err(|reason| DocumentError::SchemaMismatch {
            id: root_id.clone(),
            reason,
        })?;
        if root.has_children() {
            return Err(DocumentError::SchemaMismatch {
                id: root_id.clone(),
                reason: "a freshly created root must not reference children".to_string(),
            });
        }
        let mut blocks = FxHashMap::default();
        blocks.insert(root_id.clone(), root);
        Ok(EmailDocument { root: root_id, blocks })
    }

    /// Assembles a document from raw parts without checking any invariant.
    ///
    /// This is the import path's entry point: deserialize, assemble, then
    /// run [`EmailDocument::validate`] and reject on violations. Documents
    /// built here may be arbitrarily broken until validated.
    pub fn from_parts(root: BlockId, blocks: FxHashMap<BlockId, Block>) -> Self {
        EmailDocument { root, blocks }
    }

    /// The root block's identifier.
    pub fn root_id(&self) -> &BlockId {
        &self.root
    }

    /// The root block, if present (absent only in unvalidated imports).
    pub fn root(&self) -> Option<&Block> {
        self.blocks.get(&self.root)
    }

    /// Looks up a block by id.
    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.get(id)
    }

    /// Returns true if `id` is present in the mapping.
    pub fn contains(&self, id: &BlockId) -> bool {
        self.blocks.contains_key(id)
    }

    /// Number of blocks in the document, root included.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterates all `(id, block)` entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&BlockId, &Block)> {
        self.blocks.iter()
    }

    /// Finds the parent slot holding `id`: `(parent id, slot, position)`.
    ///
    /// Returns `None` for the root and for detached blocks.
    pub fn parent_of(&self, id: &BlockId) -> Option<(BlockId, SlotRef, usize)> {
        for (pid, block) in &self.blocks {
            for slot in block.slots() {
                if let Some(position) = block
                    .child_ids(slot)
                    .and_then(|list| list.iter().position(|c| c == id))
                {
                    return Some((pid.clone(), slot, position));
                }
            }
        }
        None
    }

    /// Ids of `id`'s strict descendants, preorder.
    ///
    /// Tolerates broken documents: missing children are skipped and cycles
    /// are not followed twice.
    pub fn descendants(&self, id: &BlockId) -> Vec<BlockId> {
        let mut out = self.subtree_ids(id);
        out.retain(|d| d != id);
        out
    }

    /// Inserts `block` as `child_id` into the parent's child list at `slot`,
    /// at `index` (clamped; appended when omitted).
    pub fn insert(
        &mut self,
        parent_id: &BlockId,
        slot: SlotRef,
        index: Option<usize>,
        child_id: BlockId,
        block: Block,
    ) -> Result<(), DocumentError> {
        if !self.blocks.contains_key(parent_id) {
            return Err(DocumentError::UnknownParent { id: parent_id.clone() });
        }
        if self.blocks.contains_key(&child_id) {
            return Err(DocumentError::DuplicateId { id: child_id });
        }
        block.check_shape().map_err(|reason| DocumentError::SchemaMismatch {
            id: child_id.clone(),
            reason,
        })?;
        if block.has_children() {
            return Err(DocumentError::SchemaMismatch {
                id: child_id.clone(),
                reason: "an inserted block must not already reference children".to_string(),
            });
        }
        let Some(list) = self
            .blocks
            .get_mut(parent_id)
            .and_then(|parent| parent.child_ids_mut(slot))
        else {
            return Err(DocumentError::InvalidSlot { id: parent_id.clone(), slot });
        };
        let at = index.unwrap_or(list.len()).min(list.len());
        list.insert(at, child_id.clone());
        debug!(child = %child_id, parent = %parent_id, %slot, position = at, "inserted block");
        self.blocks.insert(child_id, block);
        Ok(())
    }

    /// Removes `id` from its parent slot and from the mapping.
    ///
    /// With `cascade` the whole subtree goes; without it, removing a block
    /// that still has children fails — deleting a populated container is an
    /// explicit choice, never implicit data loss. Returns the removed ids.
    pub fn remove(&mut self, id: &BlockId, cascade: bool) -> Result<Vec<BlockId>, DocumentError> {
        if *id == self.root {
            return Err(DocumentError::RootMutation { id: id.clone() });
        }
        let block = self
            .blocks
            .get(id)
            .ok_or_else(|| DocumentError::UnknownBlock { id: id.clone() })?;
        if !cascade && block.has_children() {
            return Err(DocumentError::NonLeafRemoval { id: id.clone() });
        }
        let removed = if cascade { self.subtree_ids(id) } else { vec![id.clone()] };
        if let Some((parent_id, slot, position)) = self.parent_of(id) {
            if let Some(list) = self
                .blocks
                .get_mut(&parent_id)
                .and_then(|parent| parent.child_ids_mut(slot))
            {
                list.remove(position);
            }
        }
        for rid in &removed {
            self.blocks.remove(rid);
        }
        debug!(block = %id, cascade, count = removed.len(), "removed block");
        Ok(removed)
    }

    /// Relinks `id` (subtree untouched) from its current parent slot into
    /// `new_parent`'s `new_slot` at `new_index` (clamped; appended when
    /// omitted). Moving within the same slot reorders.
    pub fn move_block(
        &mut self,
        id: &BlockId,
        new_parent: &BlockId,
        new_slot: SlotRef,
        new_index: Option<usize>,
    ) -> Result<(), DocumentError> {
        if *id == self.root {
            return Err(DocumentError::RootMutation { id: id.clone() });
        }
        if !self.blocks.contains_key(id) {
            return Err(DocumentError::UnknownBlock { id: id.clone() });
        }
        let parent = self
            .blocks
            .get(new_parent)
            .ok_or_else(|| DocumentError::UnknownParent { id: new_parent.clone() })?;
        if parent.child_ids(new_slot).is_none() {
            return Err(DocumentError::InvalidSlot { id: new_parent.clone(), slot: new_slot });
        }
        if new_parent == id || self.subtree_ids(id).contains(new_parent) {
            return Err(DocumentError::Cycle {
                id: id.clone(),
                new_parent: new_parent.clone(),
            });
        }
        if let Some((old_parent, old_slot, position)) = self.parent_of(id) {
            if let Some(list) = self
                .blocks
                .get_mut(&old_parent)
                .and_then(|p| p.child_ids_mut(old_slot))
            {
                list.remove(position);
            }
        }
        let Some(list) = self
            .blocks
            .get_mut(new_parent)
            .and_then(|p| p.child_ids_mut(new_slot))
        else {
            // Slot existence was checked above and unlinking cannot retract
            // a slot, so this arm is unreachable; kept total regardless.
            return Err(DocumentError::InvalidSlot { id: new_parent.clone(), slot: new_slot });
        };
        let at = new_index.unwrap_or(list.len()).min(list.len());
        list.insert(at, id.clone());
        debug!(block = %id, parent = %new_parent, slot = %new_slot, position = at, "moved block");
        Ok(())
    }

    /// Replaces `id`'s payload after validating it against the block's
    /// current type schema. The replacement may permute the block's child
    /// ids across its own slots (that is the reorder path) but may not add
    /// or drop any — children change through insert/remove/move only.
    ///
    /// Returns the previous payload.
    pub fn replace_data(&mut self, id: &BlockId, new_block: Block) -> Result<Block, DocumentError> {
        let current = self
            .blocks
            .get(id)
            .ok_or_else(|| DocumentError::UnknownBlock { id: id.clone() })?;
        if new_block.kind() != current.kind() {
            return Err(DocumentError::SchemaMismatch {
                id: id.clone(),
                reason: format!(
                    "replacement is typed {} but the block is {}",
                    new_block.kind(),
                    current.kind()
                ),
            });
        }
        new_block.check_shape().map_err(|reason| DocumentError::SchemaMismatch {
            id: id.clone(),
            reason,
        })?;
        let mut new_children: Vec<&BlockId> = new_block.children().collect();
        new_children.sort();
        if new_children.windows(2).any(|w| w[0] == w[1]) {
            return Err(DocumentError::SchemaMismatch {
                id: id.clone(),
                reason: "replacement references the same child twice".to_string(),
            });
        }
        let mut current_children: Vec<&BlockId> = current.children().collect();
        current_children.sort();
        if new_children != current_children {
            return Err(DocumentError::SchemaMismatch {
                id: id.clone(),
                reason: "replacement may reorder child ids but not add or drop them".to_string(),
            });
        }
        match self.blocks.insert(id.clone(), new_block) {
            Some(previous) => Ok(previous),
            None => Err(DocumentError::UnknownBlock { id: id.clone() }),
        }
    }

    /// Deep-copies `id` and its subtree using `fresh` for every new id,
    /// splices the copy into the parent slot right after the original, and
    /// returns the copy's root id. A detached source yields a detached copy.
    pub fn duplicate_with(
        &mut self,
        id: &BlockId,
        fresh: &mut dyn FnMut() -> BlockId,
    ) -> Result<BlockId, DocumentError> {
        if *id == self.root {
            return Err(DocumentError::RootMutation { id: id.clone() });
        }
        if !self.blocks.contains_key(id) {
            return Err(DocumentError::UnknownBlock { id: id.clone() });
        }
        let originals = self.subtree_ids(id);
        let mut mapping: FxHashMap<BlockId, BlockId> = FxHashMap::default();
        for original in &originals {
            let new_id = fresh();
            if self.blocks.contains_key(&new_id) || mapping.values().any(|v| *v == new_id) {
                return Err(DocumentError::DuplicateId { id: new_id });
            }
            mapping.insert(original.clone(), new_id);
        }
        let Some(copy_root) = mapping.get(id).cloned() else {
            return Err(DocumentError::UnknownBlock { id: id.clone() });
        };
        for original in &originals {
            let Some(block) = self.blocks.get(original) else { continue };
            let mut copy = block.clone();
            for slot in copy.slots() {
                if let Some(list) = copy.child_ids_mut(slot) {
                    for child in list.iter_mut() {
                        if let Some(mapped) = mapping.get(child) {
                            *child = mapped.clone();
                        }
                    }
                }
            }
            if let Some(new_id) = mapping.get(original) {
                self.blocks.insert(new_id.clone(), copy);
            }
        }
        if let Some((parent_id, slot, position)) = self.parent_of(id) {
            if let Some(list) = self
                .blocks
                .get_mut(&parent_id)
                .and_then(|p| p.child_ids_mut(slot))
            {
                let at = (position + 1).min(list.len());
                list.insert(at, copy_root.clone());
            }
        }
        debug!(source = %id, copy = %copy_root, count = originals.len(), "duplicated subtree");
        Ok(copy_root)
    }

    /// [`EmailDocument::duplicate_with`] using random v4-UUID ids.
    pub fn duplicate(&mut self, id: &BlockId) -> Result<BlockId, DocumentError> {
        self.duplicate_with(id, &mut BlockId::random)
    }

    /// Walks the whole mapping and reports every invariant violation
    /// without throwing. Import paths run this before accepting an
    /// externally supplied document.
    pub fn validate(&self) -> Vec<Violation> {
        crate::validate::validate_document(self)
    }

    /// Preorder subtree ids starting at `id` (inclusive). Skips missing
    /// children and refuses to visit any id twice, so it terminates on
    /// broken documents too.
    fn subtree_ids(&self, id: &BlockId) -> Vec<BlockId> {
        let mut out = Vec::new();
        let mut stack = vec![id.clone()];
        while let Some(current) = stack.pop() {
            if out.contains(&current) || !self.blocks.contains_key(&current) {
                continue;
            }
            if let Some(block) = self.blocks.get(&current) {
                // reversed so that preorder pops left-to-right
                let mut children: Vec<BlockId> = block.children().cloned().collect();
                children.reverse();
                stack.extend(children);
            }
            out.push(current);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::block::{BlockKind, SlotRef};
    use crate::registry::make_default;

    fn container_doc() -> EmailDocument {
        EmailDocument::new(BlockId::new("doc-root"), make_default(BlockKind::Container))
            .expect("default container is a valid root")
    }

    fn insert_default(
        doc: &mut EmailDocument,
        parent: &str,
        slot: SlotRef,
        id: &str,
        kind: BlockKind,
    ) {
        doc.insert(
            &BlockId::new(parent),
            slot,
            None,
            BlockId::new(id),
            make_default(kind),
        )
        .expect("insert should succeed");
    }

    #[test]
    fn test_insert_unknown_parent() {
        let mut doc = container_doc();
        let err = doc
            .insert(
                &BlockId::new("nope"),
                SlotRef::Children,
                None,
                BlockId::new("t1"),
                make_default(BlockKind::Text),
            )
            .unwrap_err();
        assert_eq!(err, DocumentError::UnknownParent { id: BlockId::new("nope") });
    }

    #[test]
    fn test_insert_duplicate_id() {
        let mut doc = container_doc();
        insert_default(&mut doc, "doc-root", SlotRef::Children, "t1", BlockKind::Text);
        let err = doc
            .insert(
                &BlockId::new("doc-root"),
                SlotRef::Children,
                None,
                BlockId::new("t1"),
                make_default(BlockKind::Text),
            )
            .unwrap_err();
        assert_eq!(err, DocumentError::DuplicateId { id: BlockId::new("t1") });
    }

    #[test]
    fn test_insert_invalid_slot() {
        let mut doc = container_doc();
        let err = doc
            .insert(
                &BlockId::new("doc-root"),
                SlotRef::Column(0),
                None,
                BlockId::new("t1"),
                make_default(BlockKind::Text),
            )
            .unwrap_err();
        assert_eq!(
            err,
            DocumentError::InvalidSlot {
                id: BlockId::new("doc-root"),
                slot: SlotRef::Column(0)
            }
        );
    }

    #[test]
    fn test_insert_index_clamps_to_append() {
        let mut doc = container_doc();
        insert_default(&mut doc, "doc-root", SlotRef::Children, "a", BlockKind::Text);
        doc.insert(
            &BlockId::new("doc-root"),
            SlotRef::Children,
            Some(99),
            BlockId::new("b"),
            make_default(BlockKind::Text),
        )
        .unwrap();
        doc.insert(
            &BlockId::new("doc-root"),
            SlotRef::Children,
            Some(0),
            BlockId::new("c"),
            make_default(BlockKind::Text),
        )
        .unwrap();
        let root = doc.root().unwrap();
        assert_eq!(
            root.child_ids(SlotRef::Children).unwrap(),
            [BlockId::new("c"), BlockId::new("a"), BlockId::new("b")]
        );
    }

    #[test]
    fn test_insert_then_remove_roundtrip() {
        let mut doc = container_doc();
        let before = doc.clone();
        insert_default(&mut doc, "doc-root", SlotRef::Children, "t1", BlockKind::Text);
        assert_ne!(doc, before);
        let removed = doc.remove(&BlockId::new("t1"), false).unwrap();
        assert_eq!(removed, vec![BlockId::new("t1")]);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_remove_non_leaf_requires_cascade() {
        let mut doc = container_doc();
        insert_default(&mut doc, "doc-root", SlotRef::Children, "c1", BlockKind::Container);
        insert_default(&mut doc, "c1", SlotRef::Children, "t1", BlockKind::Text);
        let before = doc.clone();
        let err = doc.remove(&BlockId::new("c1"), false).unwrap_err();
        assert_eq!(err, DocumentError::NonLeafRemoval { id: BlockId::new("c1") });
        assert_eq!(doc, before, "failed removal must leave the document unchanged");
    }

    #[test]
    fn test_remove_cascade_takes_subtree() {
        let mut doc = container_doc();
        insert_default(&mut doc, "doc-root", SlotRef::Children, "c1", BlockKind::Container);
        insert_default(&mut doc, "c1", SlotRef::Children, "t1", BlockKind::Text);
        insert_default(&mut doc, "c1", SlotRef::Children, "t2", BlockKind::Text);
        let removed = doc.remove(&BlockId::new("c1"), true).unwrap();
        assert_eq!(removed.len(), 3);
        assert_eq!(doc.len(), 1);
        assert!(doc.validate().is_empty());
    }

    #[test]
    fn test_remove_root_is_refused() {
        let mut doc = container_doc();
        let err = doc.remove(&BlockId::new("doc-root"), true).unwrap_err();
        assert_eq!(err, DocumentError::RootMutation { id: BlockId::new("doc-root") });
    }

    #[test]
    fn test_move_to_self_and_descendant_are_cycles() {
        let mut doc = container_doc();
        insert_default(&mut doc, "doc-root", SlotRef::Children, "c1", BlockKind::Container);
        insert_default(&mut doc, "c1", SlotRef::Children, "c2", BlockKind::Container);
        let before = doc.clone();

        let err = doc
            .move_block(&BlockId::new("c1"), &BlockId::new("c1"), SlotRef::Children, None)
            .unwrap_err();
        assert!(matches!(err, DocumentError::Cycle { .. }));

        let err = doc
            .move_block(&BlockId::new("c1"), &BlockId::new("c2"), SlotRef::Children, None)
            .unwrap_err();
        assert!(matches!(err, DocumentError::Cycle { .. }));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_move_relinks_subtree_unchanged() {
        let mut doc = container_doc();
        insert_default(&mut doc, "doc-root", SlotRef::Children, "c1", BlockKind::Container);
        insert_default(&mut doc, "doc-root", SlotRef::Children, "c2", BlockKind::Container);
        insert_default(&mut doc, "c1", SlotRef::Children, "t1", BlockKind::Text);

        doc.move_block(&BlockId::new("t1"), &BlockId::new("c2"), SlotRef::Children, None)
            .unwrap();
        assert_eq!(
            doc.parent_of(&BlockId::new("t1")),
            Some((BlockId::new("c2"), SlotRef::Children, 0))
        );
        assert!(doc.validate().is_empty());
    }

    #[test]
    fn test_move_within_slot_reorders() {
        let mut doc = container_doc();
        for id in ["a", "b", "c"] {
            insert_default(&mut doc, "doc-root", SlotRef::Children, id, BlockKind::Text);
        }
        doc.move_block(&BlockId::new("c"), &BlockId::new("doc-root"), SlotRef::Children, Some(0))
            .unwrap();
        let root = doc.root().unwrap();
        assert_eq!(
            root.child_ids(SlotRef::Children).unwrap(),
            [BlockId::new("c"), BlockId::new("a"), BlockId::new("b")]
        );
    }

    #[test]
    fn test_replace_data_rejects_type_change() {
        let mut doc = container_doc();
        insert_default(&mut doc, "doc-root", SlotRef::Children, "t1", BlockKind::Text);
        let err = doc
            .replace_data(&BlockId::new("t1"), make_default(BlockKind::Button))
            .unwrap_err();
        assert!(matches!(err, DocumentError::SchemaMismatch { .. }));
    }

    #[test]
    fn test_replace_data_rejects_child_edits() {
        let mut doc = container_doc();
        insert_default(&mut doc, "doc-root", SlotRef::Children, "c1", BlockKind::Container);
        insert_default(&mut doc, "c1", SlotRef::Children, "t1", BlockKind::Text);

        // Dropping the child is not a reorder.
        let err = doc
            .replace_data(&BlockId::new("c1"), make_default(BlockKind::Container))
            .unwrap_err();
        assert!(matches!(err, DocumentError::SchemaMismatch { .. }));
        assert!(doc.contains(&BlockId::new("t1")));
    }

    #[test]
    fn test_replace_data_permutes_children() {
        let mut doc = container_doc();
        insert_default(&mut doc, "doc-root", SlotRef::Children, "a", BlockKind::Text);
        insert_default(&mut doc, "doc-root", SlotRef::Children, "b", BlockKind::Text);

        let mut reordered = doc.root().unwrap().clone();
        if let Some(list) = reordered.child_ids_mut(SlotRef::Children) {
            list.reverse();
        }
        doc.replace_data(&BlockId::new("doc-root"), reordered).unwrap();
        assert_eq!(
            doc.root().unwrap().child_ids(SlotRef::Children).unwrap(),
            [BlockId::new("b"), BlockId::new("a")]
        );
        assert!(doc.validate().is_empty());
    }

    #[test]
    fn test_duplicate_copies_subtree_with_fresh_ids() {
        let mut doc = container_doc();
        insert_default(&mut doc, "doc-root", SlotRef::Children, "c1", BlockKind::Container);
        insert_default(&mut doc, "c1", SlotRef::Children, "t1", BlockKind::Text);

        let mut counter = 0;
        let copy_root = doc
            .duplicate_with(&BlockId::new("c1"), &mut || {
                counter += 1;
                BlockId::new(format!("copy-{counter}"))
            })
            .unwrap();
        assert_eq!(copy_root, BlockId::new("copy-1"));
        assert_eq!(doc.len(), 5);
        // Splice lands right after the original.
        assert_eq!(
            doc.root().unwrap().child_ids(SlotRef::Children).unwrap(),
            [BlockId::new("c1"), BlockId::new("copy-1")]
        );
        // Copied container references the copied child, not the original.
        assert_eq!(
            doc.get(&copy_root).unwrap().child_ids(SlotRef::Children).unwrap(),
            [BlockId::new("copy-2")]
        );
        assert!(doc.validate().is_empty());
    }

    #[test]
    fn test_end_to_end_columns_lifecycle() {
        let mut doc = container_doc();
        let columns = make_default(BlockKind::ColumnsContainer);
        doc.insert(
            &BlockId::new("doc-root"),
            SlotRef::Children,
            None,
            BlockId::new("cols"),
            columns,
        )
        .unwrap();
        doc.insert(
            &BlockId::new("cols"),
            SlotRef::Column(1),
            None,
            BlockId::new("t1"),
            make_default(BlockKind::Text),
        )
        .unwrap();
        assert_eq!(
            doc.get(&BlockId::new("cols")).unwrap().child_ids(SlotRef::Column(1)).unwrap(),
            [BlockId::new("t1")]
        );

        doc.remove(&BlockId::new("cols"), true).unwrap();
        assert!(!doc.contains(&BlockId::new("cols")));
        assert!(!doc.contains(&BlockId::new("t1")));
        assert!(doc.validate().is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// Interprets raw `(op, a, b)` triples against the live document,
        /// always choosing structurally legal operands.
        fn apply_script(script: &[(u8, u8, u8)]) -> EmailDocument {
            let mut doc = container_doc();
            let mut next = 0usize;
            for (op, a, b) in script {
                let containers: Vec<BlockId> = doc
                    .iter()
                    .filter(|(_, block)| !block.slots().is_empty())
                    .map(|(id, _)| id.clone())
                    .collect();
                let mut sorted = containers.clone();
                sorted.sort();
                match op % 3 {
                    0 => {
                        let parent = &sorted[*a as usize % sorted.len()];
                        let slot = doc.get(parent).map(|p| p.slots()[0]).unwrap();
                        let kind = if b % 4 == 0 { BlockKind::Container } else { BlockKind::Text };
                        next += 1;
                        doc.insert(
                            &parent.clone(),
                            slot,
                            None,
                            BlockId::new(format!("n{next}")),
                            make_default(kind),
                        )
                        .unwrap();
                    }
                    1 => {
                        let mut ids: Vec<BlockId> = doc
                            .iter()
                            .map(|(id, _)| id.clone())
                            .filter(|id| id != doc.root_id())
                            .collect();
                        ids.sort();
                        if let Some(victim) = ids.get(*a as usize % ids.len().max(1)) {
                            doc.remove(&victim.clone(), true).unwrap();
                        }
                    }
                    _ => {
                        let mut ids: Vec<BlockId> = doc
                            .iter()
                            .map(|(id, _)| id.clone())
                            .filter(|id| id != doc.root_id())
                            .collect();
                        ids.sort();
                        if ids.is_empty() {
                            continue;
                        }
                        let subject = ids[*a as usize % ids.len()].clone();
                        let target = sorted[*b as usize % sorted.len()].clone();
                        if target == subject || doc.descendants(&subject).contains(&target) {
                            continue;
                        }
                        let slot = doc.get(&target).map(|p| p.slots()[0]).unwrap();
                        doc.move_block(&subject, &target, slot, None).unwrap();
                    }
                }
            }
            doc
        }

        proptest! {
            #[test]
            fn test_successful_edit_sequences_keep_invariants(
                script in prop::collection::vec((any::<u8>(), any::<u8>(), any::<u8>()), 0..40)
            ) {
                let doc = apply_script(&script);
                prop_assert!(doc.validate().is_empty());
            }
        }
    }
}
