pub mod block;
pub mod position;

use std::collections::HashMap;
use std::collections::hash_map;

use block::BlockId;
use position::BlockPos;

/// A sparse block world: position -> block id, absence meaning empty/air.
///
/// This is the spatial substrate shared by detection (read-only) and
/// generation (each cone produces its own disjoint `SparseGrid` that the
/// caller merges back).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SparseGrid {
    blocks: HashMap<BlockPos, BlockId>,
}

impl SparseGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a block. `None` means empty.
    pub fn get(&self, pos: BlockPos) -> Option<BlockId> {
        self.blocks.get(&pos).copied()
    }

    pub fn contains(&self, pos: BlockPos) -> bool {
        self.blocks.contains_key(&pos)
    }

    /// Write a block, replacing any existing entry.
    pub fn insert(&mut self, pos: BlockPos, block: BlockId) {
        self.blocks.insert(pos, block);
    }

    /// Write a block only if the position is empty. Returns whether the
    /// entry was inserted. This is the merge primitive: existing blocks
    /// are never overwritten by generated ones.
    pub fn insert_if_absent(&mut self, pos: BlockPos, block: BlockId) -> bool {
        match self.blocks.entry(pos) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(e) => {
                e.insert(block);
                true
            }
        }
    }

    /// Merge another grid into this one with insert-if-absent semantics.
    /// Returns the number of blocks actually added.
    pub fn merge(&mut self, other: SparseGrid) -> usize {
        let mut added = 0;
        for (pos, block) in other.blocks {
            if self.insert_if_absent(pos, block) {
                added += 1;
            }
        }
        added
    }

    pub fn iter(&self) -> impl Iterator<Item = (BlockPos, BlockId)> + '_ {
        self.blocks.iter().map(|(&pos, &block)| (pos, block))
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl FromIterator<(BlockPos, BlockId)> for SparseGrid {
    fn from_iter<I: IntoIterator<Item = (BlockPos, BlockId)>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_if_absent_never_overwrites() {
        let mut grid = SparseGrid::new();
        let pos = BlockPos::new(0, 0, 0);
        assert!(grid.insert_if_absent(pos, BlockId(24)));
        assert!(!grid.insert_if_absent(pos, BlockId(37)));
        assert_eq!(grid.get(pos), Some(BlockId(24)));
    }

    #[test]
    fn merge_counts_only_new_blocks() {
        let mut base = SparseGrid::new();
        base.insert(BlockPos::new(0, 0, 0), BlockId(24));

        let mut incoming = SparseGrid::new();
        incoming.insert(BlockPos::new(0, 0, 0), BlockId(37)); // collision
        incoming.insert(BlockPos::new(1, 0, 0), BlockId(4));
        incoming.insert(BlockPos::new(2, -1, 0), BlockId(37));

        let added = base.merge(incoming);
        assert_eq!(added, 2);
        assert_eq!(base.len(), 3);
        // The colliding key kept its original value.
        assert_eq!(base.get(BlockPos::new(0, 0, 0)), Some(BlockId(24)));
    }
}
