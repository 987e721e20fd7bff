use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid radius")]
    InvalidRadius,
    #[error("Difficulty must be strictly between 0 and 1")]
    InvalidDifficulty,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Not enough free cells to relocate mines")]
    NoRelocationSpace,
}

pub type Result<T> = core::result::Result<T, GameError>;
