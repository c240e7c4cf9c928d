use std::fmt;

/// Result type for airqual-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// A feature attribute the current report needs is absent
    MissingAttribute(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingAttribute(name) => {
                write!(f, "malformed response: missing attribute '{}'", name)
            }
        }
    }
}

impl std::error::Error for Error {}
