use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Word pool is empty")]
    EmptyWordPool,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Env error: {0}")]
    EnvError(String),

    #[error("No round has been started")]
    NoActiveRound,
}
