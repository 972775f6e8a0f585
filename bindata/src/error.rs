pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    NotFound(String),
    NotADirectory(String),
    DecodeError {
        name: String,
        source: std::io::Error,
    },
    InvalidName(String),
    InvalidMetadata(String),
    IoError(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::NotFound(ref name) => write!(f, "Asset {name} not found"),
            Error::NotADirectory(ref name) => write!(f, "Asset {name} is not a directory"),
            Error::DecodeError {
                ref name,
                ref source,
            } => write!(f, "Read {name:?}: {source}"),
            Error::InvalidName(ref msg) => write!(f, "Invalid asset name: {msg}"),
            Error::InvalidMetadata(ref msg) => write!(f, "Invalid asset metadata: {msg}"),
            Error::IoError(ref err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::DecodeError { ref source, .. } => Some(source),
            Error::IoError(ref err) => Some(err),
            _ => None,
        }
    }
}

impl std::convert::From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        Error::IoError(error)
    }
}

impl Error {
    /// The name (or one of its path segments) is not in the table.
    pub fn is_not_found(&self) -> bool {
        matches!(*self, Error::NotFound(_))
    }
}
