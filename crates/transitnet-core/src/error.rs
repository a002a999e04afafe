/// Core domain errors.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid stop name: {0:?}")]
    InvalidStopName(String),
}
