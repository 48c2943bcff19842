//! The decoration pass: detect platforms, generate a cone under each,
//! merge the results into the map.

use anyhow::Result;

use stalactite_engine::{cone, platform};

use crate::block;
use crate::map::MapFile;

/// Platforms are made of mossy cobblestone.
pub const PLATFORM_BLOCK: stalactite_engine::world::block::BlockId = block::MOSSY_COBBLESTONE;

/// Components at or below this size are noise, not platforms.
pub const MIN_PLATFORM_SIZE: usize = 50;

/// How many layers each hanging cone descends.
pub const CONE_DEPTH: u32 = 30;

/// Run the full pass on an in-memory map. Returns the number of blocks
/// added; existing map entries are never overwritten.
pub fn decorate(map: &mut MapFile) -> Result<usize> {
    let grid = map.to_grid()?;
    tracing::info!("Map loaded: {} blocks", grid.len());

    let platforms = platform::detect(&grid, PLATFORM_BLOCK, MIN_PLATFORM_SIZE);
    tracing::info!("Found {} platform(s)", platforms.len());
    if platforms.is_empty() {
        return Ok(0);
    }

    let generated = cone::generate_for_platforms(&platforms, CONE_DEPTH, &block::cone_palette());
    tracing::info!("Generated {} candidate blocks", generated.len());

    Ok(map.apply_new_blocks(&generated))
}
