use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Word index {index} at token {position} does not follow index {previous}")]
    IndexOrder {
        position: usize,
        index: usize,
        previous: usize,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
