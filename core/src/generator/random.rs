use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::*;

/// Purely random generation strategy: hazards are drawn one at a time from a shrinking pool of candidate cells,
/// so no cell is picked twice and every remaining cell is equally likely on each draw.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomHazardGenerator<R = SmallRng> {
    rng: R,
}

impl RandomHazardGenerator<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomHazardGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> HazardGenerator for RandomHazardGenerator<R> {
    fn generate(mut self, config: &GameConfig) -> Result<HazardLayout> {
        let grid = config.grid();
        let total_cells = config.total_cells();
        let hazard_count = config.hazard_count();

        // optimize for full boards
        if hazard_count >= total_cells {
            log::warn!(
                "Every one of the {} cells is a hazard, the board cannot be won",
                total_cells
            );
            return Ok(HazardLayout::from_hazard_set_unchecked(
                grid,
                (0..total_cells).collect(),
            ));
        }

        let mut candidates: Vec<CellIndex> = (0..total_cells).collect();
        let mut hazards = BTreeSet::new();
        while hazards.len() < hazard_count {
            let pick = self.rng.random_range(0..candidates.len());
            hazards.insert(candidates.swap_remove(pick));
        }

        log::debug!(
            "Placed {} hazards on a {}x{} board ({}%)",
            hazards.len(),
            config.size(),
            config.size(),
            config.density_pct()
        );
        Ok(HazardLayout::from_hazard_set_unchecked(grid, hazards))
    }
}
