use color_eyre::eyre::Report;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthAPIError {
    #[error("Invalid subject")]
    InvalidSubject,

    #[error("Missing token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl AuthAPIError {
    pub fn unexpected(report: Report) -> Self {
        Self::UnexpectedError(report)
    }
}
