#![no_std]

extern crate alloc;

use alloc::collections::BTreeSet;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use symbol::*;

mod engine;
mod error;
mod generator;
mod grid;
mod symbol;

/// Board dimensions and hazard density requested for a new game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    grid: Grid,
    density_pct: u8,
}

#[derive(Deserialize)]
struct RawGameConfig {
    grid: Grid,
    density_pct: u8,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawGameConfig) -> Result<Self> {
        Self::new(raw.grid.size(), raw.density_pct)
    }
}

impl GameConfig {
    pub fn new(size: Side, density_pct: u8) -> Result<Self> {
        let grid = Grid::new(size)?;
        if density_pct > 100 {
            return Err(GameError::InvalidDensity { density_pct });
        }
        Ok(Self { grid, density_pct })
    }

    pub const fn grid(&self) -> Grid {
        self.grid
    }

    pub const fn size(&self) -> Side {
        self.grid.size()
    }

    pub const fn density_pct(&self) -> u8 {
        self.density_pct
    }

    pub fn total_cells(&self) -> CellCount {
        self.grid.cell_count()
    }

    /// `floor(density_pct / 100 * size²)`, computed exactly in integers.
    pub fn hazard_count(&self) -> CellCount {
        let total = self.total_cells() as u64;
        (total * u64::from(self.density_pct) / 100) as CellCount
    }
}

/// The hidden hazard cells of one board, fixed for the lifetime of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHazardLayout")]
pub struct HazardLayout {
    grid: Grid,
    hazards: BTreeSet<CellIndex>,
}

#[derive(Deserialize)]
struct RawHazardLayout {
    grid: Grid,
    hazards: BTreeSet<CellIndex>,
}

impl TryFrom<RawHazardLayout> for HazardLayout {
    type Error = GameError;

    fn try_from(raw: RawHazardLayout) -> Result<Self> {
        Self::from_hazard_indices(raw.grid, raw.hazards)
    }
}

impl HazardLayout {
    /// Builds a layout from a pre-selected set of hazard indices; duplicates collapse into one hazard.
    pub fn from_hazard_indices(
        grid: Grid,
        indices: impl IntoIterator<Item = CellIndex>,
    ) -> Result<Self> {
        let hazards = indices
            .into_iter()
            .map(|index| grid.validate_index(index))
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(Self { grid, hazards })
    }

    pub(crate) fn from_hazard_set_unchecked(grid: Grid, hazards: BTreeSet<CellIndex>) -> Self {
        Self { grid, hazards }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn size(&self) -> Side {
        self.grid.size()
    }

    pub fn total_cells(&self) -> CellCount {
        self.grid.cell_count()
    }

    pub fn hazard_count(&self) -> CellCount {
        self.hazards.len()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.hazard_count())
    }

    pub fn hazards(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.hazards.iter().copied()
    }

    pub fn contains_hazard(&self, index: CellIndex) -> bool {
        self.hazards.contains(&index)
    }

    pub fn neighbors(&self, index: CellIndex) -> Result<Neighbors> {
        self.grid.neighbors(index)
    }

    pub fn adjacent_hazard_count(&self, index: CellIndex) -> Result<u8> {
        let index = self.grid.validate_index(index)?;
        Ok(self.adjacent_hazard_count_unchecked(index))
    }

    /// Symbol the cell at `index` shows once disclosed.
    pub fn symbol_for(&self, index: CellIndex) -> Result<Symbol> {
        let index = self.grid.validate_index(index)?;
        Ok(self.symbol_for_unchecked(index))
    }

    pub(crate) fn symbol_for_unchecked(&self, index: CellIndex) -> Symbol {
        if self.contains_hazard(index) {
            Symbol::Hazard
        } else {
            Symbol::from_count(self.adjacent_hazard_count_unchecked(index))
        }
    }

    fn adjacent_hazard_count_unchecked(&self, index: CellIndex) -> u8 {
        let count = self
            .grid
            .neighbors_unchecked(index)
            .into_iter()
            .filter(|&pos| self.contains_hazard(pos))
            .count();
        // at most 8 neighbors
        count as u8
    }
}

/// Outcome of disclosing a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DiscloseOutcome {
    NoChange,
    Disclosed,
    HitHazard,
    Won,
}

impl DiscloseOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use DiscloseOutcome::*;
        match self {
            NoChange => false,
            Disclosed => true,
            HitHazard => true,
            Won => true,
        }
    }
}
