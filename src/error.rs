use thiserror::Error;

pub type InteractResult<T> = Result<T, InteractError>;

#[derive(Debug, Error)]
pub enum InteractError {
    #[error("invalid surface size: width={width}, height={height}")]
    InvalidSurface { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
