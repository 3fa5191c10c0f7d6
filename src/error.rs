use std::error;
use std::fmt::{self, Display};

/// Errors raised by the engine's public operations.
///
/// There is no variant for malformed input beyond an unknown target/source
/// node: negative weights or mutating the graph after the engine has been
/// built are undefined behavior (documented on the relevant constructors),
/// not detected here.
#[derive(Debug)]
pub enum Error {
    /// Raised at construction time: the requested target is not a node of
    /// the graph.
    TargetNotFound(String),
    /// Raised when a query is initiated: the requested source is not a
    /// node of the graph.
    SourceNotFound(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::TargetNotFound(msg) => write!(f, "target not found: {}", msg),
            Error::SourceNotFound(msg) => write!(f, "source not found: {}", msg),
        }
    }
}

impl error::Error for Error {}
