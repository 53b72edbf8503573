use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoachError {
    #[error("invalid stage: {0}")]
    InvalidStage(String),

    #[error("prompt for {0} is missing the {{success_criteria}} placeholder")]
    MissingPlaceholder(&'static str),
}
