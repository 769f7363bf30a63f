use alloc::vec::Vec;
use ndarray::Array2;

use super::*;

/// Uniform mine placement: draws exactly the configured number of distinct
/// cells without replacement via a partial Fisher-Yates over an index pool.
/// No cell is held back as safe, so the first reveal can hit a mine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::prelude::*;

        let (width, _) = config.size;
        let total = config.total_cells();

        // cap keeps a safe cell even for configs built with new_unchecked
        let mines = config.mines.min(total.saturating_sub(1));
        if mines != config.mines {
            log::warn!(
                "requested {} mines but only {} cells, capped to {}",
                config.mines,
                total,
                mines
            );
        }

        let mut mine_mask: Array2<bool> = Array2::default(nd_index(config.size));
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut pool: Vec<CellCount> = (0..total).collect();
        for _ in 0..mines {
            let pick = rng.random_range(0..pool.len());
            let index = pool.swap_remove(pick);
            mine_mask[nd_index(coords_of(index, width))] = true;
        }

        MineLayout::from_mine_mask(mine_mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exactly_the_requested_mine_count() {
        let layout = RandomLayoutGenerator::new(42).generate(GameConfig::new((9, 9), 10));
        assert_eq!(layout.mine_count(), 10);
        assert_eq!(layout.mine_coords().count(), 10);
    }

    #[test]
    fn honors_rectangular_grids() {
        let layout = RandomLayoutGenerator::new(7).generate(GameConfig::new((6, 2), 5));
        assert_eq!(layout.size(), (6, 2));
        assert_eq!(layout.mine_count(), 5);
    }

    #[test]
    fn same_seed_reproduces_the_same_layout() {
        let config = GameConfig::new((16, 16), 40);
        let first = RandomLayoutGenerator::new(1234).generate(config);
        let second = RandomLayoutGenerator::new(1234).generate(config);
        assert_eq!(first, second);
    }

    #[test]
    fn caps_unchecked_overfull_requests_to_leave_a_safe_cell() {
        let config = GameConfig::new_unchecked((3, 3), 20);
        let layout = RandomLayoutGenerator::new(99).generate(config);
        assert_eq!(layout.mine_count(), 8);
        assert_eq!(layout.safe_cell_count(), 1);
    }

    #[test]
    fn clamped_config_leaves_exactly_one_safe_cell_on_tiny_board() {
        let layout = RandomLayoutGenerator::new(3).generate(GameConfig::new((2, 2), 10));
        assert_eq!(layout.mine_count(), 3);
        assert_eq!(layout.safe_cell_count(), 1);
    }
}
