use crate::lookup::error::LookupError;
use crate::web::error::WebError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum ApplicationError {
    #[error("An error has been encountered while executing requests onto another server.")]
    Web(#[from] WebError),
    #[error("The lookup request is invalid.")]
    Lookup(#[from] LookupError),
}
