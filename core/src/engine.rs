use alloc::collections::{BTreeMap, VecDeque};
use core::fmt;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Active,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game session: a fixed hazard layout plus every cell disclosed so far.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGame")]
pub struct Game {
    layout: HazardLayout,
    disclosed: BTreeMap<CellIndex, Symbol>,
}

#[derive(Deserialize)]
struct RawGame {
    layout: HazardLayout,
    disclosed: BTreeMap<CellIndex, Symbol>,
}

/// Snapshots only load when every recorded cell is on the board and shows what the layout says it shows.
impl TryFrom<RawGame> for Game {
    type Error = GameError;

    fn try_from(raw: RawGame) -> Result<Self> {
        for (&index, &recorded) in &raw.disclosed {
            let expected = raw.layout.symbol_for(index)?;
            if recorded != expected {
                return Err(GameError::SymbolMismatch {
                    index,
                    recorded,
                    expected,
                });
            }
        }
        Ok(Self {
            layout: raw.layout,
            disclosed: raw.disclosed,
        })
    }
}

impl Game {
    pub fn new(config: GameConfig, generator: impl HazardGenerator) -> Result<Self> {
        Ok(Self::with_layout(generator.generate(&config)?))
    }

    pub fn with_layout(layout: HazardLayout) -> Self {
        Self {
            layout,
            disclosed: BTreeMap::new(),
        }
    }

    pub fn layout(&self) -> &HazardLayout {
        &self.layout
    }

    pub fn grid(&self) -> Grid {
        self.layout.grid()
    }

    pub fn size(&self) -> Side {
        self.layout.size()
    }

    pub fn hazard_count(&self) -> CellCount {
        self.layout.hazard_count()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.layout.safe_cell_count()
    }

    pub fn disclosed_count(&self) -> CellCount {
        self.disclosed.len()
    }

    /// Recorded symbol of a disclosed cell, `None` while it is still hidden.
    pub fn symbol_at(&self, index: CellIndex) -> Option<Symbol> {
        self.disclosed.get(&index).copied()
    }

    pub fn disclosed(&self) -> impl Iterator<Item = (CellIndex, Symbol)> + '_ {
        self.disclosed.iter().map(|(&index, &symbol)| (index, symbol))
    }

    pub fn is_lost(&self) -> bool {
        self.disclosed.values().any(|symbol| symbol.is_hazard())
    }

    /// A board without any safe cell can never be won.
    pub fn is_won(&self) -> bool {
        let safe_cells = self.safe_cell_count();
        safe_cells > 0 && !self.is_lost() && self.disclosed.len() == safe_cells
    }

    pub fn state(&self) -> GameState {
        if self.is_lost() {
            GameState::Lost
        } else if self.is_won() {
            GameState::Won
        } else {
            GameState::Active
        }
    }

    /// Discloses `chosen`, and when it has no neighboring hazards, the whole blank region around it together with
    /// that region's numbered border.
    ///
    /// An out-of-range index is rejected before anything is recorded. Disclosing an already disclosed cell is a
    /// no-op. Finished games still accept disclosures; the driver is expected to stop asking.
    pub fn disclose(&mut self, chosen: CellIndex) -> Result<DiscloseOutcome> {
        let chosen = self.layout.grid().validate_index(chosen)?;
        if self.disclosed.contains_key(&chosen) {
            return Ok(DiscloseOutcome::NoChange);
        }

        let grid = self.layout.grid();
        let before = self.disclosed.len();
        let mut to_visit = VecDeque::from([chosen]);

        while let Some(current) = to_visit.pop_front() {
            if self.disclosed.contains_key(&current) {
                continue;
            }

            let symbol = self.layout.symbol_for_unchecked(current);
            self.disclosed.insert(current, symbol);

            if symbol.is_blank() {
                to_visit.extend(
                    grid.neighbors_unchecked(current)
                        .into_iter()
                        .filter(|pos| !self.disclosed.contains_key(pos)),
                );
            }
        }

        log::trace!(
            "Disclosed {} cells from {}",
            self.disclosed.len() - before,
            chosen
        );

        Ok(match self.state() {
            GameState::Lost => DiscloseOutcome::HitHazard,
            GameState::Won => DiscloseOutcome::Won,
            GameState::Active => DiscloseOutcome::Disclosed,
        })
    }

    /// Row-major view of the board as the player sees it, hidden cells included.
    pub fn render_grid(&self) -> Array2<char> {
        self.render_with(|index| {
            self.symbol_at(index)
                .map_or(Symbol::HIDDEN_CHAR, Symbol::to_char)
        })
    }

    /// Row-major view with every cell shown, for the end of a game.
    pub fn render_solution(&self) -> Array2<char> {
        self.render_with(|index| self.layout.symbol_for_unchecked(index).to_char())
    }

    fn render_with(&self, cell: impl Fn(CellIndex) -> char) -> Array2<char> {
        let side = usize::from(self.size());
        Array2::from_shape_fn((side, side), |(row, column)| cell(row * side + column))
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, &self.render_grid())
    }
}

/// Writes a rendered grid one row per line, cells separated by a space.
pub fn write_grid(f: &mut impl fmt::Write, grid: &Array2<char>) -> fmt::Result {
    for (row_index, row) in grid.rows().into_iter().enumerate() {
        if row_index > 0 {
            f.write_char('\n')?;
        }
        for (column, cell) in row.iter().enumerate() {
            if column > 0 {
                f.write_char(' ')?;
            }
            f.write_char(*cell)?;
        }
    }
    Ok(())
}
