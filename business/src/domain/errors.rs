/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.network")]
    Network,
    #[error("repository.unexpected_status")]
    UnexpectedStatus(u16),
    #[error("repository.decode")]
    Decode,
}

impl RepositoryError {
    pub fn network() -> Self {
        RepositoryError::Network
    }
    pub fn unexpected_status(status: u16) -> Self {
        RepositoryError::UnexpectedStatus(status)
    }
    pub fn decode() -> Self {
        RepositoryError::Decode
    }
}
