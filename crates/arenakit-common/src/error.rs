//! Error type shared by the arena and the string views.
//!
//! Every failure falls into one of two kinds: the caller passed something
//! invalid, or the system could not supply memory. Neither is retried
//! internally; the caller decides what to do.

use serde::Serialize;

/// Coarse classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfMemory,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A zero-byte allocation was requested.
    #[error("allocation size must be at least one byte")]
    ZeroSizeAllocation,

    /// `count * elem_size` does not fit in `usize`.
    #[error("allocation of {count} elements of {elem_size} bytes overflows")]
    SizeOverflow { count: usize, elem_size: usize },

    #[error("substring at {start} of length {length} is out of range for a view of size {size}")]
    SubstringOutOfRange {
        start: usize,
        length: usize,
        size: usize,
    },

    #[error("size {size} exceeds capacity {capacity}")]
    SizeExceedsCapacity { size: usize, capacity: usize },

    /// The text cannot be represented as a NUL-terminated string.
    #[error("text contains a NUL byte at offset {position}")]
    InteriorNul { position: usize },

    /// A chunk buffer of `requested` bytes could not be acquired, either
    /// from the system allocator or within the configured byte budget.
    #[error("out of memory: could not acquire a chunk of {requested} bytes")]
    OutOfMemory { requested: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::OutOfMemory { .. } => ErrorKind::OutOfMemory,
            Error::ZeroSizeAllocation
            | Error::SizeOverflow { .. }
            | Error::SubstringOutOfRange { .. }
            | Error::SizeExceedsCapacity { .. }
            | Error::InteriorNul { .. } => ErrorKind::InvalidArgument,
        }
    }

    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    #[inline]
    pub fn is_out_of_memory(&self) -> bool {
        self.kind() == ErrorKind::OutOfMemory
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::ZeroSizeAllocation.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            Error::SubstringOutOfRange {
                start: 3,
                length: 10,
                size: 5
            }
            .kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            Error::OutOfMemory { requested: 1 << 20 }.kind(),
            ErrorKind::OutOfMemory
        );
        assert!(Error::InteriorNul { position: 0 }.is_invalid_argument());
        assert!(Error::OutOfMemory { requested: 8 }.is_out_of_memory());
    }

    #[test]
    fn test_error_messages() {
        let err = Error::SubstringOutOfRange {
            start: 3,
            length: 10,
            size: 5,
        };
        assert_eq!(
            err.to_string(),
            "substring at 3 of length 10 is out of range for a view of size 5"
        );
        assert_eq!(
            Error::OutOfMemory { requested: 64 }.to_string(),
            "out of memory: could not acquire a chunk of 64 bytes"
        );
    }
}
