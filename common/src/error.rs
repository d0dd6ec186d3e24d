#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error("maze needs at least one row")]
    ZeroRows,

    #[error("maze needs at least one column")]
    ZeroColumns,

    #[error("maze size must be at least one pixel")]
    ZeroSize,

    #[error("at least one step per frame is needed for the walk to make progress")]
    ZeroStepsPerFrame,

    #[error("invalid value for {key}: {value:?}")]
    InvalidSetting { key: String, value: String },
}
