//! Sequential cursor over a fixed byte buffer.
//!
//! [`BinaryReader`] borrows a buffer and hands out typed values from a
//! cursor that only moves when a read succeeds. A read that would run past
//! the end returns [`Error::UnexpectedEof`] and leaves the cursor where it
//! was, so callers can probe and fall back without bookkeeping of their own.
//!
//! Multi-byte reads come in four flavours:
//!
//! - `read_u32()` uses the reader's default byte order (big-endian unless
//!   changed with [`BinaryReader::with_endian`])
//! - `read_u32_le()` / `read_u32_be()` force a byte order
//! - `read_u32_with(endian)` takes the byte order as an argument
//! - `read_as::<u32>(endian)` is the generic form used by the others

use std::fmt;

use crate::endian::Endian;
use crate::error::{Error, Result};
use crate::util::{decode_utf8_lossy, utf8_char_width};

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width numeric type that can be decoded from raw bytes.
///
/// Implemented for every integer type from 8 to 64 bits and for `f32` and
/// `f64`. Floats are rebuilt from their exact bit pattern, so NaN payloads,
/// signed zeros and subnormals survive decoding unchanged.
pub trait Primitive: sealed::Sealed + Copy {
    /// Encoded width in bytes.
    const SIZE: usize;

    /// Raw encoded form, always `[u8; Self::SIZE]`.
    type Bytes: Default + AsMut<[u8]>;

    /// Decodes a value from its raw bytes.
    fn decode(bytes: Self::Bytes, endian: Endian) -> Self;
}

macro_rules! impl_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                type Bytes = [u8; std::mem::size_of::<$ty>()];

                #[inline]
                fn decode(bytes: Self::Bytes, endian: Endian) -> Self {
                    match endian {
                        Endian::Big => <$ty>::from_be_bytes(bytes),
                        Endian::Little => <$ty>::from_le_bytes(bytes),
                    }
                }
            }
        )*
    };
}

impl_primitive!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

/// Bounds-checked sequential reader over a borrowed byte buffer.
#[derive(Clone)]
pub struct BinaryReader<'a> {
    buf: &'a [u8],
    position: usize,
    endian: Endian,
}

impl<'a> BinaryReader<'a> {
    /// Creates a reader positioned at the start of `buf`, reading
    /// big-endian by default.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            position: 0,
            endian: Endian::default(),
        }
    }

    /// Sets the byte order used by reads that don't name one.
    pub fn with_endian(mut self, endian: Endian) -> Self {
        self.endian = endian;
        self
    }

    pub fn endian(&self) -> Endian {
        self.endian
    }

    pub fn set_endian(&mut self, endian: Endian) {
        self.endian = endian;
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of bytes between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position == self.buf.len()
    }

    /// The whole underlying buffer, regardless of cursor position.
    pub fn as_slice(&self) -> &'a [u8] {
        self.buf
    }

    /// The unread tail of the buffer.
    pub fn remaining_slice(&self) -> &'a [u8] {
        &self.buf[self.position..]
    }

    // ------------------------------------------------------------------------
    // Cursor movement
    // ------------------------------------------------------------------------

    /// Moves the cursor to an absolute offset.
    ///
    /// Seeking to `len()` is allowed and leaves the reader at the end.
    pub fn seek(&mut self, position: usize) -> Result<()> {
        self.seek_to(position as i128)
    }

    /// Moves the cursor by a signed offset from its current position.
    pub fn seek_relative(&mut self, delta: i64) -> Result<()> {
        self.seek_to(self.position as i128 + delta as i128)
    }

    /// Moves the cursor to `target`, which must lie in `0..=len()`.
    pub(crate) fn seek_to(&mut self, target: i128) -> Result<()> {
        if target < 0 || target > self.buf.len() as i128 {
            return Err(self.seek_error(target));
        }
        self.position = target as usize;
        Ok(())
    }

    /// Advances the cursor by `n` bytes without decoding them.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n).map(|_| ())
    }

    /// Moves the cursor back to the start of the buffer.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    // ------------------------------------------------------------------------
    // Byte spans
    // ------------------------------------------------------------------------

    /// Returns the next `n` bytes without advancing the cursor.
    pub fn peek_bytes(&self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(self.eof_error(n));
        }
        Ok(&self.buf[self.position..self.position + n])
    }

    /// Reads `n` bytes as a span borrowed from the buffer.
    ///
    /// A zero-length read always succeeds, even at the end of the buffer.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.take(n)
    }

    /// Reads exactly `N` bytes into an owned array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    // ------------------------------------------------------------------------
    // Numbers
    // ------------------------------------------------------------------------

    /// Reads any [`Primitive`] in the given byte order.
    pub fn read_as<T: Primitive>(&mut self, endian: Endian) -> Result<T> {
        let mut raw = <T::Bytes as Default>::default();
        raw.as_mut().copy_from_slice(self.take(T::SIZE)?);
        Ok(T::decode(raw, endian))
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_as(self.endian)
    }

    /// Reads a two's-complement signed byte.
    pub fn read_i8(&mut self) -> Result<i8> {
        self.read_as(self.endian)
    }

    // ------------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------------

    /// Reads `n` bytes and decodes them as UTF-8, replacing malformed
    /// sequences with U+FFFD and dropping a leading byte order mark.
    ///
    /// Only fails when fewer than `n` bytes remain.
    pub fn read_string(&mut self, n: usize) -> Result<String> {
        let bytes = self.take(n)?;
        Ok(decode_utf8_lossy(bytes).into_owned())
    }

    /// Reads `n` bytes as a borrowed `&str`, rejecting invalid UTF-8.
    pub fn read_str(&mut self, n: usize) -> Result<&'a str> {
        let bytes = self.peek_bytes(n)?;
        let text = std::str::from_utf8(bytes).map_err(|e| self.utf8_error(e.valid_up_to()))?;
        self.position += n;
        Ok(text)
    }

    /// Reads one UTF-8 encoded character (1 to 4 bytes).
    ///
    /// A sequence cut off by the end of the buffer is `UnexpectedEof`; one
    /// whose available bytes are already malformed is `InvalidUtf8`.
    pub fn read_char(&mut self) -> Result<char> {
        let lead = self.peek_bytes(1)?[0];
        let width = utf8_char_width(lead).ok_or_else(|| self.utf8_error(0))?;
        let tail = self.remaining_slice();
        let bytes = &tail[..width.min(tail.len())];
        match std::str::from_utf8(bytes) {
            Ok(text) => {
                let ch = text.chars().next().ok_or_else(|| self.utf8_error(0))?;
                self.position += width;
                Ok(ch)
            }
            Err(e) if e.error_len().is_some() => Err(self.utf8_error(e.valid_up_to())),
            Err(_) => Err(self.eof_error(width)),
        }
    }

    /// Reads bytes up to a NUL terminator.
    ///
    /// The terminator is consumed but not included in the returned span.
    pub fn read_cstr(&mut self) -> Result<&'a [u8]> {
        let tail = self.remaining_slice();
        match memchr::memchr(0, tail) {
            Some(end) => {
                self.position += end + 1;
                Ok(&tail[..end])
            }
            None => {
                log::trace!(
                    "no NUL terminator after offset {} ({} bytes scanned)",
                    self.position,
                    tail.len()
                );
                Err(Error::UnexpectedEof {
                    offset: self.position,
                    needed: tail.len() + 1,
                    available: tail.len(),
                })
            }
        }
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let bytes = self.peek_bytes(n)?;
        self.position += n;
        Ok(bytes)
    }

    fn eof_error(&self, needed: usize) -> Error {
        let available = self.remaining();
        log::trace!(
            "read of {needed} bytes at offset {} exceeds buffer ({available} available)",
            self.position
        );
        Error::UnexpectedEof {
            offset: self.position,
            needed,
            available,
        }
    }

    fn seek_error(&self, target: i128) -> Error {
        log::trace!(
            "seek to {target} rejected (buffer length {}, cursor stays at {})",
            self.buf.len(),
            self.position
        );
        Error::SeekOutOfBounds {
            target,
            len: self.buf.len(),
        }
    }

    fn utf8_error(&self, valid_up_to: usize) -> Error {
        Error::InvalidUtf8 {
            offset: self.position,
            valid_up_to,
        }
    }
}

macro_rules! read_methods {
    ($($ty:ty => $read:ident, $read_le:ident, $read_be:ident, $read_with:ident;)*) => {
        impl BinaryReader<'_> {
            $(
                #[doc = concat!("Reads a `", stringify!($ty), "` in the reader's default byte order.")]
                pub fn $read(&mut self) -> Result<$ty> {
                    self.read_as(self.endian)
                }

                #[doc = concat!("Reads a little-endian `", stringify!($ty), "`.")]
                pub fn $read_le(&mut self) -> Result<$ty> {
                    self.read_as(Endian::Little)
                }

                #[doc = concat!("Reads a big-endian `", stringify!($ty), "`.")]
                pub fn $read_be(&mut self) -> Result<$ty> {
                    self.read_as(Endian::Big)
                }

                #[doc = concat!("Reads a `", stringify!($ty), "` in the given byte order.")]
                pub fn $read_with(&mut self, endian: Endian) -> Result<$ty> {
                    self.read_as(endian)
                }
            )*
        }
    };
}

read_methods! {
    u16 => read_u16, read_u16_le, read_u16_be, read_u16_with;
    i16 => read_i16, read_i16_le, read_i16_be, read_i16_with;
    u32 => read_u32, read_u32_le, read_u32_be, read_u32_with;
    i32 => read_i32, read_i32_le, read_i32_be, read_i32_with;
    u64 => read_u64, read_u64_le, read_u64_be, read_u64_with;
    i64 => read_i64, read_i64_le, read_i64_be, read_i64_with;
    f32 => read_f32, read_f32_le, read_f32_be, read_f32_with;
    f64 => read_f64, read_f64_le, read_f64_be, read_f64_with;
}

impl fmt::Debug for BinaryReader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryReader")
            .field("len", &self.buf.len())
            .field("position", &self.position)
            .field("endian", &self.endian)
            .finish()
    }
}

impl<'a> From<&'a [u8]> for BinaryReader<'a> {
    fn from(buf: &'a [u8]) -> Self {
        Self::new(buf)
    }
}

impl<'a> From<&'a Vec<u8>> for BinaryReader<'a> {
    fn from(buf: &'a Vec<u8>) -> Self {
        Self::new(buf.as_slice())
    }
}
