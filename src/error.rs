use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("{0}")]
    Deck(#[from] blackjack::Error),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unrecognized input: {0:?}")]
    InvalidInput(String),

    #[error("Name must not be blank")]
    EmptyName,

    #[error("Input closed while waiting for an answer")]
    InputClosed,
}
