mod dig;
mod document;

pub use dig::{DigError, ErrorKind};
pub use document::DocumentError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Dig(#[from] DigError),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

pub type Result<T> = std::result::Result<T, Error>;
