//! Platform detection: grouping contiguous target-material blocks at y = 0
//! into connected components via breadth-first flood fill.

use std::collections::{HashSet, VecDeque};

use crate::world::SparseGrid;
use crate::world::block::BlockId;
use crate::world::position::ColumnPos;

/// A maximal 4-connected region of target-material columns at y = 0.
#[derive(Debug, Clone)]
pub struct Platform {
    cells: HashSet<ColumnPos>,
}

impl Platform {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: ColumnPos) -> bool {
        self.cells.contains(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = ColumnPos> + '_ {
        self.cells.iter().copied()
    }

    /// Geometric center of the platform, with truncating integer division.
    pub fn center(&self) -> (i64, i64) {
        // Platforms are non-empty by construction (min_size > 0 filter).
        let n = self.cells.len() as i64;
        let (sum_x, sum_z) = self
            .cells
            .iter()
            .fold((0i64, 0i64), |(sx, sz), c| (sx + c.x, sz + c.z));
        (sum_x / n, sum_z / n)
    }
}

/// Find all platforms of `target` blocks at y = 0 with strictly more than
/// `min_size` cells.
///
/// Every occupied y = 0 coordinate holding `target` seeds a breadth-first
/// flood fill over 4-connected columns; a neighbor joins only if the grid
/// holds `target` at that column's y = 0 position. The visited set is local
/// to this call and shared across fills, so the returned platforms are
/// pairwise disjoint: each column belongs to at most one platform.
pub fn detect(grid: &SparseGrid, target: BlockId, min_size: usize) -> Vec<Platform> {
    let mut platforms = Vec::new();
    let mut visited: HashSet<ColumnPos> = HashSet::new();

    for (pos, block) in grid.iter() {
        if block != target || pos.y != 0 {
            continue;
        }
        let start = pos.column();
        if visited.contains(&start) {
            continue;
        }

        let cells = flood_fill(grid, target, start, &mut visited);
        if cells.len() > min_size {
            platforms.push(Platform { cells });
        }
    }

    tracing::debug!(
        "Platform detection: {} platform(s) above size {}",
        platforms.len(),
        min_size,
    );
    platforms
}

/// Collect the connected component containing `start`. Marks every visited
/// column in the caller's set; terminates because each column is enqueued
/// at most once per visit check and never revisited.
fn flood_fill(
    grid: &SparseGrid,
    target: BlockId,
    start: ColumnPos,
    visited: &mut HashSet<ColumnPos>,
) -> HashSet<ColumnPos> {
    let mut cells = HashSet::new();
    let mut queue = VecDeque::from([start]);

    while let Some(cell) = queue.pop_front() {
        if !visited.insert(cell) {
            continue;
        }
        cells.insert(cell);

        for neighbor in cell.neighbors() {
            if visited.contains(&neighbor) {
                continue;
            }
            if grid.get(neighbor.at(0)) == Some(target) {
                queue.push_back(neighbor);
            }
        }
    }

    cells
}
