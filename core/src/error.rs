use thiserror::Error;

use crate::{CellCount, CellIndex, Side, Symbol};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board size {size}, must be at least 1")]
    InvalidSize { size: Side },
    #[error("Invalid hazard density {density_pct}%, must be within 0..=100")]
    InvalidDensity { density_pct: u8 },
    #[error("Cell index {index} out of range, board has {cell_count} cells")]
    IndexOutOfRange {
        index: CellIndex,
        cell_count: CellCount,
    },
    #[error("Layout is {actual}x{actual} but the game asks for {expected}x{expected}")]
    GridMismatch { expected: Side, actual: Side },
    #[error("Cell {index} is recorded as {recorded:?} but shows {expected:?}")]
    SymbolMismatch {
        index: CellIndex,
        recorded: Symbol,
        expected: Symbol,
    },
}

pub type Result<T> = core::result::Result<T, GameError>;
