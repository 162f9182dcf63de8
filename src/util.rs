//! UTF-8 helpers shared by the reader.

use std::borrow::Cow;

// ============================================================================
// Text Decoding
// ============================================================================

/// Decode bytes as UTF-8 the way a WHATWG `TextDecoder("utf-8")` does.
///
/// A leading UTF-8 byte order mark is removed, and every malformed
/// sequence is replaced with U+FFFD. No BOM sniffing for other encodings
/// takes place; the bytes are always treated as UTF-8.
///
/// Uses `Cow<str>` to avoid allocation when the input is already valid.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(decode_utf8_lossy(b"\xEF\xBB\xBFhi"), "hi");
/// assert_eq!(decode_utf8_lossy(b"a\xFFb"), "a\u{FFFD}b");
/// ```
pub fn decode_utf8_lossy(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _malformed) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    result
}

/// Width in bytes of the UTF-8 sequence introduced by `lead`.
///
/// Returns `None` for continuation bytes and for lead bytes that can
/// never start a valid sequence (`0xC0`, `0xC1`, `0xF5..=0xFF`).
pub fn utf8_char_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
