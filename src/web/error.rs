use thiserror::Error;

pub type Result<T, E = WebError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum WebError {
    #[error("Client couldn't be created.")]
    CantCreateClient,
    #[error("The connection to the other server failed.")]
    ConnectionFailed,
    #[error("The page that has been downloaded doesn't provide any content.")]
    CantReadPageContent,
    #[error("The other server answered with an unexpected status [status: {0}]")]
    UnexpectedStatus(u16),
}
