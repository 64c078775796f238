//! Whitespace classification for view trimming.

/// Whether `byte` counts as leading whitespace.
///
/// ASCII space, tab, newline, carriage return, vertical tab and form feed,
/// plus each byte of the UTF-8 byte-order mark (`EF BB BF`) taken on its
/// own, so a BOM at the start of a buffer is skipped along with any
/// following blanks.
#[inline]
pub const fn is_whitespace(byte: u8) -> bool {
    matches!(
        byte,
        b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C | 0xEF | 0xBB | 0xBF
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_whitespace() {
        for byte in [b' ', b'\t', b'\n', b'\r', 0x0B, 0x0C] {
            assert!(is_whitespace(byte), "{byte:#04x}");
        }
    }

    #[test]
    fn test_bom_bytes() {
        assert!(is_whitespace(0xEF));
        assert!(is_whitespace(0xBB));
        assert!(is_whitespace(0xBF));
    }

    #[test]
    fn test_non_whitespace() {
        for byte in [b'a', b'0', b'_', 0x00, 0x7F, 0xC3, 0xA0] {
            assert!(!is_whitespace(byte), "{byte:#04x}");
        }
    }
}
