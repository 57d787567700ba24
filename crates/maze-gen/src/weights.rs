//! Random edge weights.
//!
//! Generation is deterministic for a fixed set of weights, so variety comes
//! from here: seed an RNG, draw weights, then carve.

use maze_core::{GridMaze, Weight};
use rand::Rng;

use crate::error::GenError;

/// Inclusive weight range drawn by [`randomize_weights`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightConfig {
    pub min: Weight,
    pub max: Weight,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self { min: 0, max: 3 }
    }
}

/// Give every interior edge of `maze` a weight drawn uniformly from
/// `config.min..=config.max`, visiting edges in row-major order.
///
/// A reversed range is treated as its canonical form.
pub fn randomize_weights<R: Rng>(
    maze: &mut GridMaze,
    rng: &mut R,
    config: &WeightConfig,
) -> Result<(), GenError> {
    let lo = config.min.min(config.max);
    let hi = config.min.max(config.max);
    for (a, b) in maze.interior_edges() {
        maze.set_weight(a, b, rng.random_range(lo..=hi))?;
    }
    Ok(())
}
