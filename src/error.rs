/// Errors raised by the rules engine.
///
/// Every variant is reported synchronously to the caller; the engine never
/// retries or repairs anything itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("illegal move at ({row}, {col})")]
    InvalidMove { row: i32, col: i32 },

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("invalid coordinate: {0:?}")]
    InvalidCoord(String),

    #[error("cannot pass while a legal move is available")]
    PassNotAllowed,

    #[error("the game is already over")]
    GameOver,
}
