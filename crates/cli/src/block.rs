//! Block type definitions for the map format.
//!
//! The engine treats ids as opaque; this is where they get names. The
//! values are the classic small numeric ids the JSON map format uses.

use stalactite_engine::cone::Palette;
use stalactite_engine::world::block::BlockId;

pub const COBBLESTONE: BlockId = BlockId(4);
pub const MOSSY_COBBLESTONE: BlockId = BlockId(24);
pub const STONE: BlockId = BlockId(37);

/// The material mix cones are built from.
pub fn cone_palette() -> Palette {
    Palette {
        stone: STONE,
        cobblestone: COBBLESTONE,
        mossy_cobblestone: MOSSY_COBBLESTONE,
    }
}
