//! Map-decoration tool built on `stalactite-engine`: loads a JSON voxel
//! map, finds mossy-cobblestone platforms, hangs a generated cone under
//! each, and writes the map back.

pub mod block;
pub mod decorate;
pub mod map;
