//! Error types for storefront command handlers.

use std::error::Error;

use crate::basket::BasketError;
use crate::catalog::CatalogError;
use crate::session::SessionError;

/// Error type for command handler operations.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// No handler registered for this command name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    /// Payload decode / deserialization failed.
    #[error("decode failed: {0}")]
    DecodeFailed(String),
    /// Business logic rejected the command.
    #[error("rejected: {0}")]
    Rejected(String),
    /// Product, category or other resource not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Guard rejected the command (input validation failed).
    #[error("guard rejected command: {0}")]
    GuardRejected(String),
    #[error("basket error: {0}")]
    Basket(#[from] BasketError),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("session error: {0}")]
    Session(#[from] SessionError),
    /// Other error.
    #[error("handler error: {0}")]
    Other(Box<dyn Error + Send + Sync>),
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::DecodeFailed(err.to_string())
    }
}

impl HandlerError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::UnknownCommand(_) => 404,
            HandlerError::DecodeFailed(_) => 400,
            HandlerError::Rejected(_) => 422,
            HandlerError::NotFound(_) => 404,
            HandlerError::GuardRejected(_) => 400,
            HandlerError::Basket(_) => 500,
            HandlerError::Catalog(_) => 500,
            HandlerError::Session(_) => 500,
            HandlerError::Other(_) => 500,
        }
    }

    /// Whether the caller sent a bad request (a 4xx status).
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
