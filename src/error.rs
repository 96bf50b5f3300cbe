use core::fmt::{self, Display, Formatter};

/// Failure of a [`BitElementIter`](crate::BitElementIter) operation.
///
/// `E` is the error type of the resolver in use. Resolver errors are carried
/// unchanged in [`Error::Resolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error<E> {
    /// `next_element` was called with no set position left after the
    /// cursor.
    Exhausted,
    /// `remove` was called before the cursor had visited any position.
    RemoveBeforeNext,
    /// The resolver failed while resolving or removing an element.
    Resolver(E),
}

impl<E> Error<E> {
    /// Returns the resolver error, if this is one.
    pub fn into_resolver(self) -> Option<E> {
        match self {
            Error::Resolver(err) => Some(err),
            _ => None,
        }
    }
}

impl<E: Display> Display for Error<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Exhausted => write!(f, "no set bit left after the cursor"),
            Error::RemoveBeforeNext => write!(f, "remove called before the first element"),
            Error::Resolver(err) => write!(f, "resolver failed: {err}"),
        }
    }
}

impl<E: core::error::Error + 'static> core::error::Error for Error<E> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::Resolver(err) => Some(err),
            _ => None,
        }
    }
}

/// Failure of one of the stock resolvers in [`resolver`](crate::resolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveError {
    /// The position has no backing element.
    OutOfRange {
        /// The position that was looked up.
        position: usize,
        /// Number of elements in the backing store.
        len: usize,
    },
    /// The resolver does not support removal.
    Unsupported {
        /// The position whose removal was requested.
        position: usize,
    },
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::OutOfRange { position, len } => {
                write!(f, "bit {position} has no element (len is {len})")
            }
            ResolveError::Unsupported { position } => {
                write!(f, "cannot remove the element at bit {position}")
            }
        }
    }
}

impl core::error::Error for ResolveError {}
