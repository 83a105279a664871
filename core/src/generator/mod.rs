use crate::*;
pub use random::*;

mod random;

/// Strategy for laying out the hazards of a new board.
pub trait HazardGenerator {
    fn generate(self, config: &GameConfig) -> Result<HazardLayout>;
}

/// Always produces the same pre-selected layout, regardless of the requested density. The layout must match the
/// requested board size.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedHazardGenerator {
    layout: HazardLayout,
}

impl FixedHazardGenerator {
    pub fn new(layout: HazardLayout) -> Self {
        Self { layout }
    }
}

impl HazardGenerator for FixedHazardGenerator {
    fn generate(self, config: &GameConfig) -> Result<HazardLayout> {
        if self.layout.grid() != config.grid() {
            return Err(GameError::GridMismatch {
                expected: config.size(),
                actual: self.layout.size(),
            });
        }
        log::debug!(
            "Using fixed layout with {} hazards",
            self.layout.hazard_count()
        );
        Ok(self.layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_layout_must_match_requested_size() {
        let layout = HazardLayout::from_hazard_indices(Grid::new(3).unwrap(), [4]).unwrap();

        let config = GameConfig::new(6, 25).unwrap();
        assert_eq!(
            FixedHazardGenerator::new(layout.clone()).generate(&config),
            Err(GameError::GridMismatch {
                expected: 6,
                actual: 3
            })
        );

        let config = GameConfig::new(3, 25).unwrap();
        assert_eq!(FixedHazardGenerator::new(layout.clone()).generate(&config), Ok(layout));
    }
}
