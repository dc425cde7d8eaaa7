use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopsenseError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
