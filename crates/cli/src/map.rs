//! Map file I/O.
//!
//! The map is a JSON object with a `blocks` field mapping coordinate keys
//! (`"x,y,z"`) to integer block ids. Every other top-level field is opaque
//! to this tool and written back unchanged.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use stalactite_engine::world::SparseGrid;
use stalactite_engine::world::block::BlockId;
use stalactite_engine::world::position::BlockPos;

#[derive(Debug, Serialize, Deserialize)]
pub struct MapFile {
    pub blocks: HashMap<String, u16>,

    /// Fields this tool doesn't know about, passed through verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Load and parse a map file. Distinguishes a missing file from a present
/// but malformed one (including a map without a `blocks` field).
pub fn load(path: &Path) -> Result<MapFile> {
    if !path.exists() {
        bail!("map file {} not found", path.display());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))
}

/// Write the map back. The JSON is fully serialized in memory first, so a
/// serialization failure leaves the file untouched.
pub fn save(map: &MapFile, path: &Path) -> Result<()> {
    let text = serde_json::to_string_pretty(map).context("serializing map")?;
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

impl MapFile {
    /// Decode the `blocks` mapping into a typed sparse grid.
    pub fn to_grid(&self) -> Result<SparseGrid> {
        let mut grid = SparseGrid::new();
        for (key, &id) in &self.blocks {
            let pos: BlockPos = key
                .parse()
                .with_context(|| format!("malformed coordinate key {key:?}"))?;
            grid.insert(pos, BlockId(id));
        }
        Ok(grid)
    }

    /// Merge generated blocks into `blocks` with insert-if-absent
    /// semantics: a key already present keeps its value. Returns the
    /// number of blocks added.
    pub fn apply_new_blocks(&mut self, generated: &SparseGrid) -> usize {
        let mut added = 0;
        for (pos, block) in generated.iter() {
            self.blocks.entry(pos.to_string()).or_insert_with(|| {
                added += 1;
                block.0
            });
        }
        added
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> MapFile {
        serde_json::from_str(
            r#"{"name": "test", "blocks": {"0,0,0": 24, "-3,0,7": 4}}"#,
        )
        .unwrap()
    }

    #[test]
    fn grid_round_trip() {
        let map = sample_map();
        let grid = map.to_grid().unwrap();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.get(BlockPos::new(0, 0, 0)), Some(BlockId(24)));
        assert_eq!(grid.get(BlockPos::new(-3, 0, 7)), Some(BlockId(4)));
    }

    #[test]
    fn unknown_fields_are_preserved() {
        let map = sample_map();
        assert_eq!(
            map.extra.get("name"),
            Some(&serde_json::Value::String("test".into()))
        );
        let text = serde_json::to_string(&map).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["name"], "test");
    }

    #[test]
    fn missing_blocks_field_is_malformed() {
        let result: Result<MapFile, _> = serde_json::from_str(r#"{"name": "test"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn malformed_key_is_reported() {
        let map: MapFile =
            serde_json::from_str(r#"{"blocks": {"not-a-key": 1}}"#).unwrap();
        let err = map.to_grid().unwrap_err();
        assert!(err.to_string().contains("not-a-key"));
    }

    #[test]
    fn apply_never_overwrites() {
        let mut map = sample_map();
        let mut generated = SparseGrid::new();
        generated.insert(BlockPos::new(0, 0, 0), BlockId(37)); // collides
        generated.insert(BlockPos::new(5, -1, 5), BlockId(37));

        let added = map.apply_new_blocks(&generated);
        assert_eq!(added, 1);
        assert_eq!(map.blocks["0,0,0"], 24);
        assert_eq!(map.blocks["5,-1,5"], 37);
    }
}
