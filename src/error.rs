use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates outside the board")]
    InvalidCoords,
    #[error("Mine layout leaves no safe cell")]
    TooManyMines,
}

pub type Result<T> = core::result::Result<T, GameError>;
