//! Top-level error for the binary.

use thiserror::Error;

use crate::deck::DeckError;
use crate::draw::DrawError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error(transparent)]
    Draw(#[from] DrawError),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
