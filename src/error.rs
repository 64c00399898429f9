use std::fmt;

use crate::schema::TypeOperation;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Occurs when serde serialization or deserialization fails, usually because a value has no
    /// [`Value`][crate::Value] representation (like a map with non-string keys).
    SerdeFail(String),
    /// A union or intersection was assembled from an empty list of schemas. Only the untyped
    /// constructors on [`Schema`][crate::Schema] can hit this; the typed builders need at least
    /// one schema to compile.
    EmptyOperation(TypeOperation),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::SerdeFail(ref msg) => f.write_str(msg),
            Error::EmptyOperation(op) => {
                write!(f, "{} needs at least one schema", op)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(feature = "serde")]
impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::SerdeFail(msg.to_string())
    }
}

#[cfg(feature = "serde")]
impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::SerdeFail(msg.to_string())
    }
}
