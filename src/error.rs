use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("png encoding failed")]
    Png(#[source] png::EncodingError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Error::Io { path, source }
    }

    /// Encoder errors caused by the underlying writer stay `Io`.
    pub(crate) fn png(path: impl Into<PathBuf>) -> impl FnOnce(png::EncodingError) -> Self {
        let path = path.into();
        move |err| match err {
            png::EncodingError::IoError(source) => Error::Io { path, source },
            other => Error::Png(other),
        }
    }
}
