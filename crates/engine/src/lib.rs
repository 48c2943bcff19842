//! Core algorithms for decorating a sparse voxel map: platform detection
//! over a sparse grid and procedural hanging-cone generation.
//!
//! The engine treats block ids as opaque numbers. Which id means "mossy
//! cobblestone" is the application's business (see the cli crate); the
//! engine only needs a [`cone::Palette`] telling it which ids to emit.

pub mod cone;
pub mod platform;
pub mod world;
