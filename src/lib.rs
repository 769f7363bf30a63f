#![no_std]

extern crate alloc;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;
pub use view::*;

mod engine;
mod error;
mod generator;
mod types;
mod view;

/// Board parameters as supplied by the embedder.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Clamps to a playable configuration: positive axes, at least one mine,
    /// and at least one safe cell. Never fails.
    pub fn new((width, height): Coord2, mines: CellCount) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let total = total_cells((width, height));
        let mines = mines.clamp(1, total.saturating_sub(1).max(1));
        Self::new_unchecked((width, height), mines)
    }

    pub const fn total_cells(&self) -> CellCount {
        total_cells(self.size)
    }
}

/// Immutable geometry of one generated board: where the mines sit and how
/// many mines border each cell. The adjacency grid is computed once, at
/// construction, and never recomputed during play.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    neighbor_counts: Array2<u8>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        let neighbor_counts = compute_neighbor_counts(&mine_mask);
        Self {
            mine_mask,
            neighbor_counts,
            mine_count,
        }
    }

    /// Builds a layout from explicit mine positions, for replays and test
    /// fixtures. Rejects out-of-bounds positions and fully-mined boards.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(nd_index(size));

        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[nd_index(coords)] = true;
        }

        let layout = Self::from_mine_mask(mine_mask);
        if layout.mine_count >= layout.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(layout)
    }

    pub fn size(&self) -> Coord2 {
        let (width, height) = self.mine_mask.dim();
        (width as Coord, height as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mine_mask[nd_index(coords)]
    }

    /// Number of mines in the Moore neighborhood of `coords`. The stored
    /// value for a mine cell itself is never shown to the player.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.neighbor_counts[nd_index(coords)]
    }

    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((x, y), _)| (x as Coord, y as Coord))
    }
}

fn compute_neighbor_counts(mine_mask: &Array2<bool>) -> Array2<u8> {
    let (width, height) = mine_mask.dim();
    let bounds = (width as Coord, height as Coord);
    Array2::from_shape_fn(mine_mask.raw_dim(), |(x, y)| {
        moore_neighbors((x as Coord, y as Coord), bounds)
            .filter(|&pos| mine_mask[nd_index(pos)])
            .count() as u8
    })
}

/// What a `reveal` command did.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// Nothing changed: board not active, coordinates out of bounds, or the
    /// cell was already revealed.
    NoChange,
    /// One or more safe cells were revealed.
    Revealed,
    /// A mine was revealed; the board is over. This is the one
    /// dialog-worthy event the presentation layer surfaces.
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn is_loss(self) -> bool {
        matches!(self, Self::HitMine)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn config_clamps_mines_into_playable_range() {
        let config = GameConfig::new((2, 2), 10);
        assert_eq!(config.mines, 3);

        let config = GameConfig::new((5, 5), 0);
        assert_eq!(config.mines, 1);
    }

    #[test]
    fn config_clamps_degenerate_dimensions() {
        let config = GameConfig::new((0, 0), 0);
        assert_eq!(config.size, (1, 1));
        assert_eq!(config.mines, 1);
    }

    #[test]
    fn layout_rejects_out_of_bounds_mines() {
        let result = MineLayout::from_mine_coords((3, 3), &[(3, 0)]);
        assert_eq!(result.unwrap_err(), GameError::InvalidCoords);
    }

    #[test]
    fn layout_rejects_fully_mined_board() {
        let all = [(0, 0), (1, 0), (0, 1), (1, 1)];
        let result = MineLayout::from_mine_coords((2, 2), &all);
        assert_eq!(result.unwrap_err(), GameError::TooManyMines);
    }

    #[test]
    fn neighbor_counts_match_brute_force_recomputation() {
        let mines = [(0, 0), (1, 2), (3, 3), (3, 0)];
        let layout = MineLayout::from_mine_coords((4, 4), &mines).unwrap();

        for x in 0..4u8 {
            for y in 0..4u8 {
                let expected = mines
                    .iter()
                    .filter(|&&(mx, my)| {
                        let dx = (mx as i16 - x as i16).abs();
                        let dy = (my as i16 - y as i16).abs();
                        dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
                    })
                    .count() as u8;
                assert_eq!(
                    layout.adjacent_mine_count((x, y)),
                    expected,
                    "count mismatch at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn layout_reports_exact_mine_positions() {
        let mines = [(2, 0), (0, 1)];
        let layout = MineLayout::from_mine_coords((3, 2), &mines).unwrap();

        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.safe_cell_count(), 4);
        let found: Vec<_> = layout.mine_coords().collect();
        assert_eq!(found.len(), 2);
        assert!(found.contains(&(2, 0)));
        assert!(found.contains(&(0, 1)));
    }
}
