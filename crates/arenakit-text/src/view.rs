//! `StrView`: a borrowed byte window with separate size and capacity.

use crate::whitespace::is_whitespace;
use arenakit_arena::{Allocation, Arena};
use arenakit_common::{Error, Result};
use serde::Serialize;
use std::ffi::{CStr, CString};
use std::fmt;

/// Result of comparing two views with [`StrView::equals`].
///
/// Keeps "different sizes" apart from "same size, different bytes".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Comparison {
    Equal,
    SizeMismatch,
    ByteMismatch,
}

impl Comparison {
    /// Numeric code: 0 equal, 1 size mismatch, 2 byte mismatch.
    pub fn code(self) -> i32 {
        match self {
            Comparison::Equal => 0,
            Comparison::SizeMismatch => 1,
            Comparison::ByteMismatch => 2,
        }
    }

    #[inline]
    pub fn is_equal(self) -> bool {
        self == Comparison::Equal
    }
}

/// A non-owning view over bytes.
///
/// `bytes` spans the whole capacity; the first `size` of them are the view's
/// text. `size <= bytes.len()` always holds. The lifetime ties the view to
/// the memory it borrows, so it cannot outlive an arena or a caller buffer.
#[derive(Clone, Copy, Default)]
pub struct StrView<'a> {
    bytes: &'a [u8],
    size: usize,
}

impl<'a> StrView<'a> {
    /// Wrap NUL-terminated text without copying.
    ///
    /// The view ends at the first NUL byte, or at the end of `bytes` if there
    /// is none. Size and capacity are both that length.
    pub fn from_text(bytes: &'a [u8]) -> StrView<'a> {
        let len = memchr::memchr(0, bytes).unwrap_or(bytes.len());
        StrView {
            bytes: &bytes[..len],
            size: len,
        }
    }

    /// View the first `size` bytes of `buffer`, keeping the whole buffer as
    /// capacity.
    pub fn with_capacity(buffer: &'a [u8], size: usize) -> Result<StrView<'a>> {
        if size > buffer.len() {
            return Err(Error::SizeExceedsCapacity {
                size,
                capacity: buffer.len(),
            });
        }
        Ok(StrView {
            bytes: buffer,
            size,
        })
    }

    /// View the text stored in an arena allocation.
    ///
    /// The text runs up to the first NUL byte; the whole allocation is the
    /// capacity. For regions made by [`Arena::allocate_text`] this gives the
    /// stored text with the terminator slot as spare capacity.
    /// Returns `None` for stale handles.
    pub fn from_allocation(arena: &'a Arena, allocation: &Allocation) -> Option<StrView<'a>> {
        let bytes = arena.get(allocation)?;
        let size = memchr::memchr(0, bytes).unwrap_or(bytes.len());
        Some(StrView { bytes, size })
    }

    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.bytes[..self.size]
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The text as `&str`, if it is valid UTF-8.
    pub fn to_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    /// Copy the text into an owned NUL-terminated string.
    ///
    /// The borrowed buffer is left untouched. Text containing a NUL byte
    /// cannot be represented and is rejected.
    pub fn to_text(&self) -> Result<CString> {
        CString::new(self.as_bytes()).map_err(|err| Error::InteriorNul {
            position: err.nul_position(),
        })
    }

    /// Copy the text into `arena` with a NUL terminator in a reserved byte.
    pub fn to_text_in(&self, arena: &mut Arena) -> Result<Allocation> {
        if let Some(position) = memchr::memchr(0, self.as_bytes()) {
            return Err(Error::InteriorNul { position });
        }
        arena.allocate_text(self.as_bytes())
    }

    /// Advance past leading whitespace (see [`is_whitespace`]).
    ///
    /// Size and capacity both shrink by the number of bytes skipped. Never
    /// moves past the end of the view.
    pub fn skip_leading_whitespace(&self) -> StrView<'a> {
        let skipped = self
            .as_bytes()
            .iter()
            .take_while(|&&byte| is_whitespace(byte))
            .count();
        StrView {
            bytes: &self.bytes[skipped..],
            size: self.size - skipped,
        }
    }

    pub fn equals(&self, other: &StrView<'_>) -> Comparison {
        if self.size != other.size {
            Comparison::SizeMismatch
        } else if self.as_bytes() != other.as_bytes() {
            Comparison::ByteMismatch
        } else {
            Comparison::Equal
        }
    }

    /// The `length` bytes starting `start` bytes into this view.
    ///
    /// The result keeps the capacity that remains after `start`.
    pub fn substring(&self, start: usize, length: usize) -> Result<StrView<'a>> {
        let out_of_range = Error::SubstringOutOfRange {
            start,
            length,
            size: self.size,
        };
        match start.checked_add(length) {
            Some(end) if end <= self.size => Ok(StrView {
                bytes: &self.bytes[start..],
                size: length,
            }),
            _ => Err(out_of_range),
        }
    }
}

/// Compare two views. Same as [`StrView::equals`].
pub fn equals(a: &StrView<'_>, b: &StrView<'_>) -> Comparison {
    a.equals(b)
}

impl PartialEq for StrView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other).is_equal()
    }
}

impl Eq for StrView<'_> {}

impl<'a> From<&'a [u8]> for StrView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        StrView::from_text(bytes)
    }
}

impl<'a> From<&'a str> for StrView<'a> {
    fn from(text: &'a str) -> Self {
        StrView::from_text(text.as_bytes())
    }
}

impl<'a> From<&'a CStr> for StrView<'a> {
    fn from(text: &'a CStr) -> Self {
        let bytes = text.to_bytes();
        StrView {
            bytes,
            size: bytes.len(),
        }
    }
}

impl fmt::Display for StrView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Debug for StrView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrView")
            .field("text", &String::from_utf8_lossy(self.as_bytes()))
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_stops_at_nul() {
        let view = StrView::from_text(b"abc\0def");
        assert_eq!(view.as_bytes(), b"abc");
        assert_eq!(view.size(), 3);
        assert_eq!(view.capacity(), 3);
    }

    #[test]
    fn test_with_capacity_rejects_oversized_view() {
        let buffer = [0u8; 4];
        assert_eq!(
            StrView::with_capacity(&buffer, 5).unwrap_err(),
            Error::SizeExceedsCapacity {
                size: 5,
                capacity: 4
            }
        );
        let view = StrView::with_capacity(&buffer, 2).unwrap();
        assert_eq!((view.size(), view.capacity()), (2, 4));
    }

    #[test]
    fn test_skip_whitespace_stays_within_size() {
        // Trailing spare capacity is whitespace; it must not be consumed.
        let view = StrView::with_capacity(b"  \t    ", 3).unwrap();
        let trimmed = view.skip_leading_whitespace();
        assert!(trimmed.is_empty());
        assert_eq!(trimmed.capacity(), 4);
    }

    #[test]
    fn test_substring_keeps_remaining_capacity() {
        let view = StrView::with_capacity(b"hello world", 5).unwrap();
        let part = view.substring(1, 3).unwrap();
        assert_eq!(part.as_bytes(), b"ell");
        assert_eq!(part.capacity(), 10);
    }

    #[test]
    fn test_substring_overflowing_bounds() {
        let view = StrView::from("hello");
        assert!(view.substring(usize::MAX, 2).is_err());
        assert!(view.substring(6, 0).is_err());
        assert!(view.substring(5, 0).unwrap().is_empty());
    }

    #[test]
    fn test_comparison_codes() {
        assert_eq!(Comparison::Equal.code(), 0);
        assert_eq!(Comparison::SizeMismatch.code(), 1);
        assert_eq!(Comparison::ByteMismatch.code(), 2);
    }
}
