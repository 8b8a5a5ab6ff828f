use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("invalid side marker: {0:?}")]
    InvalidSide(String),
}
