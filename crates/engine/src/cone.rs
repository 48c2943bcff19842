//! Hanging-cone generation.
//!
//! Each detected platform gets a decorative structure built from its
//! center: an organic, noise-perturbed circular cap at y = 0 and a stack
//! of shrinking layers below it, tapering like a stalactite.
//!
//! All randomness flows through an injected [`rand::Rng`], so tests can
//! seed a [`rand::rngs::StdRng`] and assert exact output. Production
//! callers go through [`generate_for_platforms`], which draws from the
//! thread-local generator.

use std::f64::consts::TAU;

use rand::Rng;
use rayon::prelude::*;

use crate::platform::Platform;
use crate::world::SparseGrid;
use crate::world::block::BlockId;
use crate::world::position::BlockPos;

/// Cap radius. The cap's bounding square extends [`EDGE_BAND`] further to
/// leave room for the noise-perturbed rim.
pub const MAX_RADIUS: f64 = 15.0;

/// Width of the rim treatment: the cap's detailed edge pattern and the
/// hanging layers' eroded outer band.
const EDGE_BAND: f64 = 2.0;

/// Number of angular anchor points shaping the cap outline.
const ANCHOR_COUNT: usize = 8;

/// The materials a cone is built from. The engine emits these ids without
/// interpreting them; the application decides what they mean.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub stone: BlockId,
    pub cobblestone: BlockId,
    pub mossy_cobblestone: BlockId,
}

/// Radius of hanging layer `layer` (1-based) for a cone of the given depth.
///
/// Shrinks faster as depth increases (exponent < 1), giving the cone a
/// concave taper. Non-increasing in `layer`; zero at `layer == depth`.
pub fn layer_radius(layer: u32, depth: u32) -> f64 {
    MAX_RADIUS * (1.0 - (layer as f64 / depth as f64).powf(0.7))
}

/// Per-cone outline noise: 8 random angular anchors, each pulling the cap
/// radius in [0.8, 1.2) of nominal around its own direction.
struct CapProfile {
    anchors: [(f64, f64); ANCHOR_COUNT],
}

impl CapProfile {
    /// Anchor angles are drawn first, then all scales, as two batches.
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut angles = [0.0; ANCHOR_COUNT];
        for angle in &mut angles {
            *angle = rng.random_range(0.0..TAU);
        }
        let mut scales = [0.0; ANCHOR_COUNT];
        for scale in &mut scales {
            *scale = rng.random_range(0.8..1.2);
        }

        let mut anchors = [(0.0, 0.0); ANCHOR_COUNT];
        for (anchor, (angle, scale)) in anchors.iter_mut().zip(angles.into_iter().zip(scales)) {
            *anchor = (angle, scale);
        }
        Self { anchors }
    }

    /// Smooth radius multiplier at `angle`: inverse-distance-weighted blend
    /// of the anchors. Every weight is at least 0.5, so the sum can't be
    /// zero; the fallback to 1.0 is a guard, not a reachable path.
    fn multiplier(&self, angle: f64) -> f64 {
        let mut total = 0.0;
        let mut weights = 0.0;
        for &(anchor_angle, scale) in &self.anchors {
            let weight = 1.0 / (1.0 + (angle - anchor_angle).sin().abs());
            total += scale * weight;
            weights += weight;
        }
        if weights > 0.0 { total / weights } else { 1.0 }
    }
}

/// Generate one hanging cone centered on (`center_x`, `center_z`): the
/// organic cap at y = 0 plus hanging layers at world y = -1 down to
/// y = -(depth - 1).
///
/// The result is a standalone grid; the caller merges it into the real map
/// with insert-if-absent semantics (the cap deliberately regenerates y = 0
/// positions that already hold platform blocks).
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    center_x: i64,
    center_z: i64,
    depth: u32,
    palette: &Palette,
) -> SparseGrid {
    let mut blocks = cap_layer(rng, center_x, center_z, palette);

    for layer in 1..depth {
        let radius = layer_radius(layer, depth);
        if layer % 5 == 0 {
            tracing::debug!("Cone layer {}/{}", layer, depth);
        }

        let extent = radius as i64;
        for x in -extent..=extent {
            for z in -extent..=extent {
                let distance = ((x * x + z * z) as f64).sqrt();
                if distance > radius {
                    continue;
                }
                // Outer band is porous: cells there survive a 40% skip roll.
                if distance > radius - EDGE_BAND && rng.random::<f64>() < 0.4 {
                    continue;
                }
                // Two sequential draws; the second happens only when the
                // first misses. Collapsing them into a single weighted
                // choice would change the distribution.
                let block = if rng.random::<f64>() < 0.6 {
                    palette.stone
                } else if rng.random::<f64>() < 0.3 {
                    palette.mossy_cobblestone
                } else {
                    palette.cobblestone
                };
                blocks.insert(
                    BlockPos::new(center_x + x, -(layer as i64), center_z + z),
                    block,
                );
            }
        }
    }

    blocks
}

/// The organic cap: a noise-perturbed disc at y = 0 with a detailed rim.
fn cap_layer<R: Rng + ?Sized>(
    rng: &mut R,
    center_x: i64,
    center_z: i64,
    palette: &Palette,
) -> SparseGrid {
    let profile = CapProfile::sample(rng);
    let mut blocks = SparseGrid::new();

    let extent = (MAX_RADIUS + EDGE_BAND) as i64;
    for x in -extent..=extent {
        for z in -extent..=extent {
            let distance = ((x * x + z * z) as f64).sqrt();
            let angle = (z as f64).atan2(x as f64);
            if distance > MAX_RADIUS * profile.multiplier(angle) {
                continue;
            }

            let block = if distance >= MAX_RADIUS - EDGE_BAND {
                // Rim: periodic noise decides between mossy fill and the
                // stone/cobble mix.
                let noise = (4.0 * angle).sin() * 0.5 + (0.8 * distance).cos() * 0.5;
                if noise > 0.0 {
                    stone_mix(rng, palette)
                } else {
                    palette.mossy_cobblestone
                }
            } else if rng.random::<f64>() < 0.9 {
                palette.mossy_cobblestone
            } else {
                stone_mix(rng, palette)
            };

            blocks.insert(BlockPos::new(center_x + x, 0, center_z + z), block);
        }
    }

    blocks
}

/// The subtle-variation mix: mostly stone, sometimes cobblestone.
fn stone_mix<R: Rng + ?Sized>(rng: &mut R, palette: &Palette) -> BlockId {
    if rng.random::<f64>() < 0.7 {
        palette.stone
    } else {
        palette.cobblestone
    }
}

/// Generate a cone for every platform and merge the results.
///
/// Each platform's generation is independent, so they run in parallel with
/// a thread-local RNG and a local output grid each; results are merged in
/// platform order with insert-if-absent semantics.
pub fn generate_for_platforms(
    platforms: &[Platform],
    depth: u32,
    palette: &Palette,
) -> SparseGrid {
    let grids: Vec<SparseGrid> = platforms
        .par_iter()
        .map(|platform| {
            let (center_x, center_z) = platform.center();
            tracing::info!(
                "Generating cone at ({}, {}) for a {}-cell platform",
                center_x,
                center_z,
                platform.len(),
            );
            let mut rng = rand::rng();
            generate(&mut rng, center_x, center_z, depth, palette)
        })
        .collect();

    let mut all = SparseGrid::new();
    for grid in grids {
        all.merge(grid);
    }
    all
}
