use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("No more cards in deck")]
    ExhaustedDeck,
}
