use alloc::collections::{BTreeSet, VecDeque};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Engine lifecycle as seen by the presentation layer.
///
/// Valid transitions:
/// - `Configuring -> Active` on the first `new_game`
/// - `Active -> Lost` when a reveal hits a mine
/// - `Active | Lost -> Active` on any later `new_game`
///
/// `Lost` is terminal until the next `new_game`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Configuring,
    Active,
    Lost,
}

impl GameState {
    pub const fn is_started(self) -> bool {
        !matches!(self, Self::Configuring)
    }

    pub const fn is_game_over(self) -> bool {
        matches!(self, Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Configuring
    }
}

/// One generated board mid-play. Replaced wholesale on every new game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct PlayBoard {
    layout: MineLayout,
    revealed: Array2<bool>,
    revealed_count: CellCount,
    game_over: bool,
    triggered_mine: Option<Coord2>,
}

impl PlayBoard {
    fn new(layout: MineLayout) -> Self {
        let size = layout.size();
        Self {
            layout,
            revealed: Array2::default(nd_index(size)),
            revealed_count: 0,
            game_over: false,
            triggered_mine: None,
        }
    }

    fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed[nd_index(coords)]
    }

    fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if self.game_over || !in_bounds(coords, self.layout.size()) || self.is_revealed(coords) {
            return RevealOutcome::NoChange;
        }

        if self.layout.contains_mine(coords) {
            log::debug!("mine hit at {:?}", coords);
            self.triggered_mine = Some(coords);
            self.game_over = true;
            self.reveal_all_mines();
            RevealOutcome::HitMine
        } else {
            self.flood_reveal(coords);
            RevealOutcome::Revealed
        }
    }

    /// The losing board shows every mine; safe cells keep whatever revealed
    /// flags they had.
    fn reveal_all_mines(&mut self) {
        for coords in self.layout.mine_coords() {
            self.revealed[nd_index(coords)] = true;
        }
    }

    /// Worklist flood-fill: reveals `start`, then cascades across the
    /// connected zero-count region and its numbered boundary. One visit per
    /// cell, no recursion.
    fn flood_reveal(&mut self, start: Coord2) {
        let bounds = self.layout.size();

        self.mark_safe_revealed(start);
        if self.layout.adjacent_mine_count(start) != 0 {
            return;
        }

        let mut visited = BTreeSet::from([start]);
        let mut to_visit: VecDeque<Coord2> = moore_neighbors(start, bounds)
            .filter(|&pos| !self.layout.contains_mine(pos) && !self.is_revealed(pos))
            .collect();
        log::trace!("flood-fill from {:?}, frontier {:?}", start, to_visit);

        while let Some(coords) = to_visit.pop_front() {
            if !visited.insert(coords) {
                continue;
            }
            if self.is_revealed(coords) {
                continue;
            }

            self.mark_safe_revealed(coords);

            // numbered cells are revealed but never cascade further
            if self.layout.adjacent_mine_count(coords) == 0 {
                to_visit.extend(
                    moore_neighbors(coords, bounds)
                        .filter(|&pos| !self.layout.contains_mine(pos) && !self.is_revealed(pos))
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }
    }

    fn mark_safe_revealed(&mut self, coords: Coord2) {
        log::trace!(
            "revealed {:?}, adjacent mines: {}",
            coords,
            self.layout.adjacent_mine_count(coords)
        );
        self.revealed[nd_index(coords)] = true;
        self.revealed_count += 1;
    }

    fn cell_view(&self, coords: Coord2) -> CellView {
        if !in_bounds(coords, self.layout.size()) || !self.is_revealed(coords) {
            return CellView::Hidden;
        }

        if self.layout.contains_mine(coords) {
            CellView::Mine
        } else {
            CellView::Number(self.layout.adjacent_mine_count(coords))
        }
    }
}

/// Owns all game state. The presentation layer issues commands
/// (`configure`, `new_game`, `reveal`) and reads the board back through the
/// query methods; it never touches cells directly.
#[derive(Clone, Debug)]
pub struct BoardEngine {
    config: GameConfig,
    seeds: rand::rngs::SmallRng,
    board: Option<PlayBoard>,
}

impl BoardEngine {
    /// `seed` is the embedder's entropy: time- or OS-sourced in production,
    /// fixed in tests. Every game draws a fresh sub-seed from it.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        use rand::prelude::*;
        Self {
            config,
            seeds: SmallRng::seed_from_u64(seed),
            board: None,
        }
    }

    /// Stores a clamped configuration for the next game. An in-flight board
    /// is untouched until `new_game`.
    pub fn configure(&mut self, size: Coord2, mines: CellCount) {
        self.config = GameConfig::new(size, mines);
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn new_game(&mut self) {
        use rand::RngExt;
        let seed: u64 = self.seeds.random();
        self.new_game_with(RandomLayoutGenerator::new(seed));
    }

    /// Starts a game from an injected generator (or a fixed `MineLayout`).
    pub fn new_game_with(&mut self, generator: impl LayoutGenerator) {
        let layout = generator.generate(self.config);
        log::debug!(
            "new game: {:?} cells, {} mines",
            layout.size(),
            layout.mine_count()
        );
        self.board = Some(PlayBoard::new(layout));
    }

    /// Reveals a cell. Out-of-bounds coordinates, non-active states, and
    /// already-revealed cells degrade to `NoChange`; a mine ends the game.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        match &mut self.board {
            Some(board) => board.reveal(coords),
            None => RevealOutcome::NoChange,
        }
    }

    pub fn state(&self) -> GameState {
        match &self.board {
            None => GameState::Configuring,
            Some(board) if board.game_over => GameState::Lost,
            Some(_) => GameState::Active,
        }
    }

    pub fn is_started(&self) -> bool {
        self.state().is_started()
    }

    pub fn is_game_over(&self) -> bool {
        self.state().is_game_over()
    }

    /// Dimensions of the active board, or the configured ones before the
    /// first game.
    pub fn size(&self) -> Coord2 {
        self.board
            .as_ref()
            .map_or(self.config.size, |board| board.layout.size())
    }

    pub fn total_mines(&self) -> CellCount {
        self.board
            .as_ref()
            .map_or(self.config.mines, |board| board.layout.mine_count())
    }

    /// Safe cells revealed so far on the active board.
    pub fn revealed_count(&self) -> CellCount {
        self.board
            .as_ref()
            .map_or(0, |board| board.revealed_count)
    }

    /// The mine that ended the game, so the presentation can highlight it.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.board.as_ref().and_then(|board| board.triggered_mine)
    }

    pub fn cell_view(&self, coords: Coord2) -> CellView {
        self.board
            .as_ref()
            .map_or(CellView::Hidden, |board| board.cell_view(coords))
    }
}
