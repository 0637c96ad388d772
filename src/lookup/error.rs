use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LookupError {
    #[error("No more than {max} members can be looked up at once [requested: {requested}]")]
    BatchTooLarge { max: usize, requested: usize },
}
