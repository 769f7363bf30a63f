use serde::{Deserialize, Serialize};

/// Display-safe projection of a single cell, as handed to the presentation
/// layer. Unrevealed cells always project to `Hidden`, so mine locations
/// stay secret until the board is over.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Mine,
    Number(u8),
}

impl CellView {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
