use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("malformed network description: {0}")]
    Parse(#[from] serde_json::Error),
}
