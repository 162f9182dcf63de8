//! Byte order selection.

/// Byte order of a multi-byte value.
///
/// Defaults to [`Endian::Big`], matching `DataView` which reads
/// big-endian unless told otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endian {
    #[default]
    Big,
    Little,
}

impl Endian {
    /// Byte order of the compilation target.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Endian = Endian::Little;
    #[cfg(target_endian = "big")]
    pub const NATIVE: Endian = Endian::Big;

    /// Maps a `littleEndian` flag onto a byte order.
    pub fn from_little(little: bool) -> Self {
        if little { Endian::Little } else { Endian::Big }
    }

    pub fn is_little(self) -> bool {
        self == Endian::Little
    }
}
